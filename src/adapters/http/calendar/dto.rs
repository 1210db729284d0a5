//! HTTP DTOs for calendar endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::calendar::{CalendarError, Course, CourseKind, Subject, Teacher};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for subject creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectWeightQuery {
    #[serde(default)]
    pub weight: Option<i32>,
}

/// Request to schedule a course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub subject_id: i64,
    pub teacher_id: i64,
    pub start: NaiveDateTime,
    pub duration_minutes: i64,
    #[serde(default)]
    pub kind: CourseKind,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Teacher> for TeacherResponse {
    fn from(teacher: &Teacher) -> Self {
        Self {
            id: teacher.id().value(),
            name: teacher.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectResponse {
    pub id: i64,
    pub name: String,
    pub weight: i32,
}

impl From<&Subject> for SubjectResponse {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id().value(),
            name: subject.name().to_string(),
            weight: subject.weight(),
        }
    }
}

/// A course with its subject and teacher inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub kind: CourseKind,
    pub subject: SubjectResponse,
    pub teacher: TeacherResponse,
    pub start: NaiveDateTime,
    pub duration_minutes: i64,
    /// ISO week of `start`.
    pub week: u32,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().value(),
            kind: course.kind(),
            subject: course.subject().into(),
            teacher: course.teacher().into(),
            start: *course.start(),
            duration_minutes: course.duration_minutes(),
            week: course.week(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

impl From<&CalendarError> for ErrorResponse {
    fn from(error: &CalendarError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
