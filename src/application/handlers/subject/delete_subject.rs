//! DeleteSubjectHandler - Command handler for removing subjects.

use std::sync::Arc;

use tracing::debug;

use crate::domain::calendar::{CalendarError, Subject};
use crate::domain::foundation::SubjectId;
use crate::ports::SubjectRepository;

/// Command to delete a subject.
#[derive(Debug, Clone)]
pub struct DeleteSubjectCommand {
    pub subject_id: SubjectId,
}

/// Handler for deleting subjects.
///
/// A subject still referenced by a course is refused with `Conflict`.
pub struct DeleteSubjectHandler {
    repository: Arc<dyn SubjectRepository>,
}

impl DeleteSubjectHandler {
    pub fn new(repository: Arc<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSubjectCommand) -> Result<Subject, CalendarError> {
        let removed = self.repository.delete(cmd.subject_id).await?;

        debug!(subject_id = %removed.id(), name = removed.name(), "Subject deleted");
        Ok(removed)
    }
}
