//! Course session entity.
//!
//! A course is one scheduled teaching slot: a subject, a teacher, a start
//! time and a duration. The store owns courses; the agenda only references
//! them by id.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{week_of_year, CourseId, SubjectId, TeacherId, ValidationError};

use super::{Subject, Teacher};

/// Kind of course session.
///
/// A plain tag: every kind carries the same fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    /// Plain lecture ("cours").
    #[default]
    Lecture,
    /// Tutorial session ("travaux dirigés").
    Td,
}

impl CourseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseKind::Lecture => "lecture",
            CourseKind::Td => "td",
        }
    }
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lecture" | "cours" => Ok(CourseKind::Lecture),
            "td" => Ok(CourseKind::Td),
            other => Err(ValidationError::invalid_format(
                "kind",
                format!("unknown course kind '{}'", other),
            )),
        }
    }
}

/// A stored course session with its subject and teacher resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    kind: CourseKind,
    subject: Subject,
    teacher: Teacher,
    start: NaiveDateTime,
    duration_minutes: i64,
}

impl Course {
    /// Reconstitute a course from persistence (no validation).
    pub fn reconstitute(
        id: CourseId,
        kind: CourseKind,
        subject: Subject,
        teacher: Teacher,
        start: NaiveDateTime,
        duration_minutes: i64,
    ) -> Self {
        Self {
            id,
            kind,
            subject,
            teacher,
            start,
            duration_minutes,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn kind(&self) -> CourseKind {
        self.kind
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    pub fn start(&self) -> &NaiveDateTime {
        &self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// Returns the ISO week number of the course start.
    pub fn week(&self) -> u32 {
        week_of_year(&self.start)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Matching
    // ─────────────────────────────────────────────────────────────────────────

    /// True iff the course's own identifier equals `id`.
    pub fn matches_id(&self, id: i64) -> bool {
        self.id == id
    }
}

/// A course that has not been stored yet.
///
/// References its subject and teacher by id; the store resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    kind: CourseKind,
    subject_id: SubjectId,
    teacher_id: TeacherId,
    start: NaiveDateTime,
    duration_minutes: i64,
}

impl NewCourse {
    /// Creates an unsaved course.
    ///
    /// # Errors
    ///
    /// - `NotPositive` if the duration is zero or negative
    pub fn new(
        kind: CourseKind,
        subject_id: SubjectId,
        teacher_id: TeacherId,
        start: NaiveDateTime,
        duration_minutes: i64,
    ) -> Result<Self, ValidationError> {
        if duration_minutes <= 0 {
            return Err(ValidationError::not_positive(
                "duration_minutes",
                duration_minutes,
            ));
        }
        Ok(Self {
            kind,
            subject_id,
            teacher_id,
            start,
            duration_minutes,
        })
    }

    pub fn kind(&self) -> CourseKind {
        self.kind
    }

    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    pub fn teacher_id(&self) -> TeacherId {
        self.teacher_id
    }

    pub fn start(&self) -> &NaiveDateTime {
        &self.start
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// Builds the stored course once the store assigned an id and resolved
    /// both references.
    pub fn into_course(self, id: CourseId, subject: Subject, teacher: Teacher) -> Course {
        Course::reconstitute(
            id,
            self.kind,
            subject,
            teacher,
            self.start,
            self.duration_minutes,
        )
    }
}
