//! Subject repository port.
//!
//! Subjects are the only entity that can be renamed or deleted, so this
//! port carries the write-side integrity rules: a subject referenced by a
//! course cannot be deleted.

use async_trait::async_trait;

use crate::domain::calendar::{NewSubject, Subject};
use crate::domain::foundation::{DomainError, SubjectId};

/// Repository port for subject persistence.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    /// Store a new subject and return it with its assigned id.
    async fn insert(&self, subject: &NewSubject) -> Result<Subject, DomainError>;

    /// Find a subject by id. Returns `None` if not found.
    async fn find_by_id(&self, id: SubjectId) -> Result<Option<Subject>, DomainError>;

    /// All subjects with exactly this name, ordered by id.
    ///
    /// Names are not unique, so this may return several subjects.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Subject>, DomainError>;

    /// All subjects, ordered by id.
    async fn find_all(&self) -> Result<Vec<Subject>, DomainError>;

    /// Persist changes to an existing subject.
    ///
    /// # Errors
    ///
    /// - `SubjectNotFound` if the subject doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subject: &Subject) -> Result<(), DomainError>;

    /// Remove a subject and return what was removed.
    ///
    /// # Errors
    ///
    /// - `SubjectNotFound` if the subject doesn't exist
    /// - `SubjectInUse` if a course still references it
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: SubjectId) -> Result<Subject, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SubjectRepository) {}
    }
}
