//! CreateTeacherHandler - Command handler for registering teachers.

use std::sync::Arc;

use tracing::debug;

use crate::domain::calendar::{CalendarError, NewTeacher, Teacher};
use crate::ports::TeacherRepository;

/// Command to create a teacher.
#[derive(Debug, Clone)]
pub struct CreateTeacherCommand {
    pub name: String,
}

/// Handler for creating teachers.
pub struct CreateTeacherHandler {
    repository: Arc<dyn TeacherRepository>,
}

impl CreateTeacherHandler {
    pub fn new(repository: Arc<dyn TeacherRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateTeacherCommand) -> Result<Teacher, CalendarError> {
        let draft = NewTeacher::new(cmd.name)?;
        let teacher = self.repository.insert(&draft).await?;

        debug!(teacher_id = %teacher.id(), name = teacher.name(), "Teacher created");
        Ok(teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCalendarStore;

    #[tokio::test]
    async fn creates_teacher_with_store_assigned_id() {
        let store = Arc::new(InMemoryCalendarStore::new());
        let handler = CreateTeacherHandler::new(store.clone());

        let teacher = handler
            .handle(CreateTeacherCommand {
                name: "Blouin".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(teacher.id(), 1);
        assert_eq!(teacher.name(), "Blouin");
        assert_eq!(store.teacher_count().await, 1);
    }

    #[tokio::test]
    async fn blank_name_is_invalid_input() {
        let store = Arc::new(InMemoryCalendarStore::new());
        let handler = CreateTeacherHandler::new(store.clone());

        let result = handler
            .handle(CreateTeacherCommand {
                name: "  ".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(CalendarError::InvalidInput { ref field, .. }) if field == "name"
        ));
        assert_eq!(store.teacher_count().await, 0);
    }
}
