//! Teacher repository port.

use async_trait::async_trait;

use crate::domain::calendar::{NewTeacher, Teacher};
use crate::domain::foundation::{DomainError, TeacherId};

/// Repository port for teacher persistence.
///
/// Teachers are never deleted through this port.
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Store a new teacher and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, teacher: &NewTeacher) -> Result<Teacher, DomainError>;

    /// Find a teacher by id. Returns `None` if not found.
    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, DomainError>;

    /// All teachers, ordered by id.
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError>;
}
