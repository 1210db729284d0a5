//! GetSubjectByNameHandler - Query handler for exact-name lookup.

use std::sync::Arc;

use crate::domain::calendar::{CalendarError, Subject};
use crate::ports::SubjectRepository;

/// Query for the single subject carrying `name`.
#[derive(Debug, Clone)]
pub struct GetSubjectByNameQuery {
    pub name: String,
}

/// Handler resolving a subject by exact name.
///
/// Names are not unique, so several matches are reported as `Ambiguous`
/// rather than picking one.
pub struct GetSubjectByNameHandler {
    repository: Arc<dyn SubjectRepository>,
}

impl GetSubjectByNameHandler {
    pub fn new(repository: Arc<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSubjectByNameQuery) -> Result<Subject, CalendarError> {
        let mut matches = self.repository.find_by_name(&query.name).await?;
        match matches.len() {
            0 => Err(CalendarError::not_found("Subject", query.name)),
            1 => Ok(matches.remove(0)),
            count => Err(CalendarError::ambiguous("Subject", query.name, count)),
        }
    }
}
