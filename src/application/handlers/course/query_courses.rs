//! QueryCoursesHandler - Query handler for the week/id course search.

use std::sync::Arc;

use tracing::debug;

use crate::domain::calendar::{CalendarError, Course, CourseFilter};
use crate::ports::CourseRepository;

/// Query for courses in `week`, or related to `id`.
///
/// `id` is compared against the course id, its teacher id and its subject
/// id; see [`CourseFilter`].
#[derive(Debug, Clone, Copy)]
pub struct QueryCoursesQuery {
    pub week: i64,
    pub id: i64,
}

impl From<QueryCoursesQuery> for CourseFilter {
    fn from(query: QueryCoursesQuery) -> Self {
        CourseFilter::new(query.week, query.id)
    }
}

/// Handler scanning every stored course through a [`CourseFilter`].
pub struct QueryCoursesHandler {
    repository: Arc<dyn CourseRepository>,
}

impl QueryCoursesHandler {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: QueryCoursesQuery) -> Result<Vec<Course>, CalendarError> {
        let courses = self.repository.find_all().await?;
        let scanned = courses.len();
        let matching = CourseFilter::from(query).apply(courses);

        debug!(
            week = query.week,
            id = query.id,
            scanned,
            matched = matching.len(),
            "Courses queried"
        );
        Ok(matching)
    }
}
