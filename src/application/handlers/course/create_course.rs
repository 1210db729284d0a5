//! CreateCourseHandler - Command handler for scheduling courses.
//!
//! Persisting a course and registering it in the agenda happen as one
//! operation: the agenda write lock is held across the insert, so readers
//! never observe a stored course missing from the agenda, and a failed
//! insert registers nothing.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::calendar::{CalendarError, Course, CourseKind, NewCourse, SharedAgenda};
use crate::domain::foundation::{SubjectId, TeacherId};
use crate::ports::CourseRepository;

/// Command to create a course.
#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub kind: CourseKind,
    pub subject_id: SubjectId,
    pub teacher_id: TeacherId,
    pub start: NaiveDateTime,
    pub duration_minutes: i64,
}

/// Handler for creating courses and registering them in the agenda.
pub struct CreateCourseHandler {
    repository: Arc<dyn CourseRepository>,
    agenda: SharedAgenda,
}

impl CreateCourseHandler {
    pub fn new(repository: Arc<dyn CourseRepository>, agenda: SharedAgenda) -> Self {
        Self { repository, agenda }
    }

    pub async fn handle(&self, cmd: CreateCourseCommand) -> Result<Course, CalendarError> {
        let draft = NewCourse::new(
            cmd.kind,
            cmd.subject_id,
            cmd.teacher_id,
            cmd.start,
            cmd.duration_minutes,
        )?;

        let mut agenda = self.agenda.write().await;
        let course = self.repository.insert(&draft).await?;
        agenda.add(course.id());
        drop(agenda);

        debug!(
            course_id = %course.id(),
            kind = course.kind().as_str(),
            subject_id = %course.subject().id(),
            teacher_id = %course.teacher().id(),
            week = course.week(),
            "Course created"
        );
        Ok(course)
    }
}
