//! CreateSubjectHandler - Command handler for creating subjects.

use std::sync::Arc;

use tracing::debug;

use crate::domain::calendar::{CalendarError, NewSubject, Subject, DEFAULT_WEIGHT};
use crate::ports::SubjectRepository;

/// Command to create a subject. A missing weight means [`DEFAULT_WEIGHT`].
#[derive(Debug, Clone)]
pub struct CreateSubjectCommand {
    pub name: String,
    pub weight: Option<i32>,
}

/// Handler for creating subjects.
pub struct CreateSubjectHandler {
    repository: Arc<dyn SubjectRepository>,
}

impl CreateSubjectHandler {
    pub fn new(repository: Arc<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSubjectCommand) -> Result<Subject, CalendarError> {
        let draft = NewSubject::new(cmd.name, cmd.weight.unwrap_or(DEFAULT_WEIGHT))?;
        let subject = self.repository.insert(&draft).await?;

        debug!(
            subject_id = %subject.id(),
            name = subject.name(),
            weight = subject.weight(),
            "Subject created"
        );
        Ok(subject)
    }
}
