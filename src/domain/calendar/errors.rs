//! Calendar-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors surfaced by calendar operations.
///
/// Nothing here is retried; every failure reaches the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A required field is missing or malformed.
    #[error("Validation failed for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A lookup by id or name yielded nothing.
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// A lookup expected to be unique matched several records.
    #[error("{count} {resource} records match '{key}'")]
    Ambiguous {
        resource: &'static str,
        key: String,
        count: usize,
    },

    /// The operation would break referential integrity.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The store could not complete the operation.
    #[error("Store failure: {0}")]
    StoreFailure(String),
}

impl CalendarError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        CalendarError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, key: impl ToString) -> Self {
        CalendarError::NotFound {
            resource,
            key: key.to_string(),
        }
    }

    pub fn ambiguous(resource: &'static str, key: impl ToString, count: usize) -> Self {
        CalendarError::Ambiguous {
            resource,
            key: key.to_string(),
            count,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CalendarError::Conflict(message.into())
    }

    pub fn store_failure(message: impl Into<String>) -> Self {
        CalendarError::StoreFailure(message.into())
    }

    /// Returns the machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            CalendarError::InvalidInput { .. } => "INVALID_INPUT",
            CalendarError::NotFound { .. } => "NOT_FOUND",
            CalendarError::Ambiguous { .. } => "AMBIGUOUS",
            CalendarError::Conflict(_) => "CONFLICT",
            CalendarError::StoreFailure(_) => "STORE_FAILURE",
        }
    }
}

impl From<ValidationError> for CalendarError {
    fn from(err: ValidationError) -> Self {
        CalendarError::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CalendarError {
    fn from(err: DomainError) -> Self {
        let key = err.details.get("id").cloned().unwrap_or_default();
        match err.code {
            ErrorCode::TeacherNotFound => CalendarError::not_found("Teacher", key),
            ErrorCode::SubjectNotFound => CalendarError::not_found("Subject", key),
            ErrorCode::CourseNotFound => CalendarError::not_found("Course", key),
            ErrorCode::ValidationFailed => CalendarError::InvalidInput {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::SubjectInUse => CalendarError::Conflict(err.message),
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                CalendarError::StoreFailure(err.message)
            }
        }
    }
}
