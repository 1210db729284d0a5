//! GetAgendaHandler - Query handler resolving the agenda to courses.

use std::sync::Arc;

use crate::domain::calendar::{CalendarError, Course, SharedAgenda};
use crate::ports::CourseRepository;

/// Handler listing registered courses in registration order.
pub struct GetAgendaHandler {
    repository: Arc<dyn CourseRepository>,
    agenda: SharedAgenda,
}

impl GetAgendaHandler {
    pub fn new(repository: Arc<dyn CourseRepository>, agenda: SharedAgenda) -> Self {
        Self { repository, agenda }
    }

    pub async fn handle(&self) -> Result<Vec<Course>, CalendarError> {
        let ids = self.agenda.read().await.course_ids().to_vec();
        Ok(self.repository.find_by_ids(&ids).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::course::fixtures::{seeded_store, store_with_references};
    use crate::domain::calendar::Agenda;

    #[tokio::test]
    async fn lists_registered_courses_in_order() {
        let (store, agenda) = seeded_store().await;

        let courses = GetAgendaHandler::new(store, agenda).handle().await.unwrap();

        let starts: Vec<String> = courses.iter().map(|c| c.start().to_string()).collect();
        assert_eq!(
            starts,
            vec![
                "2015-01-01 08:00:00",
                "2015-01-02 14:00:00",
                "2015-01-02 10:00:00"
            ]
        );
    }

    #[tokio::test]
    async fn empty_agenda_lists_nothing() {
        let store = store_with_references().await;

        let courses = GetAgendaHandler::new(store, Agenda::shared())
            .handle()
            .await
            .unwrap();

        assert!(courses.is_empty());
    }

    #[tokio::test]
    async fn courses_reflect_current_subject_name() {
        use crate::domain::foundation::SubjectId;
        use crate::ports::SubjectRepository;

        let (store, agenda) = seeded_store().await;
        let mut web = SubjectRepository::find_by_id(store.as_ref(), SubjectId::new(1))
            .await
            .unwrap()
            .unwrap();
        web.rename("Web sémantique").unwrap();
        SubjectRepository::update(store.as_ref(), &web).await.unwrap();

        let courses = GetAgendaHandler::new(store, agenda).handle().await.unwrap();

        assert!(courses
            .iter()
            .all(|course| course.subject().name() == "Web sémantique"));
    }
}
