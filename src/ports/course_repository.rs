//! Course repository port.
//!
//! Courses are returned fully resolved: each carries its current subject
//! and teacher, so a renamed subject shows its new name in every course.

use async_trait::async_trait;

use crate::domain::calendar::{Course, NewCourse};
use crate::domain::foundation::{CourseId, DomainError};

/// Repository port for course persistence.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Store a new course and return it with its id and references resolved.
    ///
    /// # Errors
    ///
    /// - `SubjectNotFound` / `TeacherNotFound` if a reference is dangling
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, course: &NewCourse) -> Result<Course, DomainError>;

    /// Find a course by id. Returns `None` if not found.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError>;

    /// Courses for the given ids, in the order of `ids`.
    ///
    /// Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, DomainError>;

    /// All courses, ordered by id.
    async fn find_all(&self) -> Result<Vec<Course>, DomainError>;
}
