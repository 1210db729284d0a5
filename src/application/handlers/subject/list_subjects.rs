//! ListSubjectsHandler - Query handler for listing subjects.

use std::sync::Arc;

use crate::domain::calendar::{CalendarError, Subject};
use crate::ports::SubjectRepository;

/// Handler for listing every subject, in id order.
pub struct ListSubjectsHandler {
    repository: Arc<dyn SubjectRepository>,
}

impl ListSubjectsHandler {
    pub fn new(repository: Arc<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Subject>, CalendarError> {
        Ok(self.repository.find_all().await?)
    }
}
