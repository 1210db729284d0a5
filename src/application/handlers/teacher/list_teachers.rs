//! ListTeachersHandler - Query handler for listing teachers.

use std::sync::Arc;

use crate::domain::calendar::{CalendarError, Teacher};
use crate::ports::TeacherRepository;

/// Handler for listing every teacher, in id order.
pub struct ListTeachersHandler {
    repository: Arc<dyn TeacherRepository>,
}

impl ListTeachersHandler {
    pub fn new(repository: Arc<dyn TeacherRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Teacher>, CalendarError> {
        Ok(self.repository.find_all().await?)
    }
}
