//! RenameSubjectHandler - Command handler for renaming subjects.

use std::sync::Arc;

use tracing::debug;

use crate::domain::calendar::{CalendarError, Subject};
use crate::domain::foundation::SubjectId;
use crate::ports::SubjectRepository;

/// Command to rename a subject.
#[derive(Debug, Clone)]
pub struct RenameSubjectCommand {
    pub subject_id: SubjectId,
    pub new_name: String,
}

/// Handler for renaming subjects.
///
/// Names are not unique; renaming to an existing name is allowed.
pub struct RenameSubjectHandler {
    repository: Arc<dyn SubjectRepository>,
}

impl RenameSubjectHandler {
    pub fn new(repository: Arc<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RenameSubjectCommand) -> Result<Subject, CalendarError> {
        // 1. Load subject
        let mut subject = self
            .repository
            .find_by_id(cmd.subject_id)
            .await?
            .ok_or_else(|| CalendarError::not_found("Subject", cmd.subject_id))?;

        // 2. Apply rename
        let old_name = subject.rename(cmd.new_name)?;

        // 3. Persist
        self.repository.update(&subject).await?;

        debug!(
            subject_id = %subject.id(),
            old_name = %old_name,
            new_name = subject.name(),
            "Subject renamed"
        );
        Ok(subject)
    }
}
