//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types and calendar arithmetic
//! that form the vocabulary of the agenda domain.

mod errors;
mod ids;
mod week;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CourseId, SubjectId, TeacherId};
pub use week::week_of_year;
