//! Startup routine: rebuild the agenda from the store, then seed an empty store.
//!
//! Run once by `main` before the server accepts requests.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::handlers::{
    CreateCourseCommand, CreateCourseHandler, CreateSubjectCommand, CreateSubjectHandler,
    CreateTeacherCommand, CreateTeacherHandler,
};
use crate::config::SeedData;
use crate::domain::calendar::{CalendarError, SharedAgenda};
use crate::domain::foundation::{SubjectId, TeacherId};
use crate::ports::{CourseRepository, SubjectRepository, TeacherRepository};

/// Outcome of [`Bootstrap::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BootstrapReport {
    /// Courses already in the store, registered in the agenda.
    pub restored_courses: usize,
    /// Whether the seed dataset was applied.
    pub seeded: bool,
}

/// Wires the repositories and the shared agenda for the startup routine.
pub struct Bootstrap {
    teachers: Arc<dyn TeacherRepository>,
    subjects: Arc<dyn SubjectRepository>,
    courses: Arc<dyn CourseRepository>,
    agenda: SharedAgenda,
}

impl Bootstrap {
    pub fn new(
        teachers: Arc<dyn TeacherRepository>,
        subjects: Arc<dyn SubjectRepository>,
        courses: Arc<dyn CourseRepository>,
        agenda: SharedAgenda,
    ) -> Self {
        Self {
            teachers,
            subjects,
            courses,
            agenda,
        }
    }

    /// Rebuilds the agenda, then applies `seed` if given, non-empty, and the
    /// store is empty.
    pub async fn run(&self, seed: Option<&SeedData>) -> Result<BootstrapReport, CalendarError> {
        let restored_courses = self.rebuild_agenda().await?;

        let seeded = match seed {
            Some(data) if !data.is_empty() && self.store_is_empty().await? => {
                self.seed(data).await?;
                true
            }
            _ => false,
        };

        Ok(BootstrapReport {
            restored_courses,
            seeded,
        })
    }

    /// Registers every stored course in the agenda, in id order.
    ///
    /// Returns the number of newly registered courses.
    pub async fn rebuild_agenda(&self) -> Result<usize, CalendarError> {
        let courses = self.courses.find_all().await?;

        let mut agenda = self.agenda.write().await;
        let mut restored = 0;
        for course in &courses {
            if agenda.add(course.id()) {
                restored += 1;
            }
        }

        info!(restored, "Agenda rebuilt from store");
        Ok(restored)
    }

    /// True when the store holds no teacher, subject or course.
    pub async fn store_is_empty(&self) -> Result<bool, CalendarError> {
        Ok(self.teachers.find_all().await?.is_empty()
            && self.subjects.find_all().await?.is_empty()
            && self.courses.find_all().await?.is_empty())
    }

    /// Creates the seed's teachers, subjects, then courses.
    ///
    /// Course references are checked against the seed's own names before
    /// anything is written, so an unknown name leaves the store untouched.
    pub async fn seed(&self, data: &SeedData) -> Result<(), CalendarError> {
        for course in &data.courses {
            if !data.teachers.iter().any(|name| *name == course.teacher) {
                return Err(CalendarError::invalid_input(
                    "teacher",
                    format!("Seed course references unknown teacher '{}'", course.teacher),
                ));
            }
            if !data.subjects.iter().any(|s| s.name == course.subject) {
                return Err(CalendarError::invalid_input(
                    "subject",
                    format!("Seed course references unknown subject '{}'", course.subject),
                ));
            }
        }

        let create_teacher = CreateTeacherHandler::new(self.teachers.clone());
        let mut teacher_ids: HashMap<&str, TeacherId> = HashMap::new();
        for name in &data.teachers {
            let teacher = create_teacher
                .handle(CreateTeacherCommand { name: name.clone() })
                .await?;
            teacher_ids.entry(name.as_str()).or_insert(teacher.id());
        }

        let create_subject = CreateSubjectHandler::new(self.subjects.clone());
        let mut subject_ids: HashMap<&str, SubjectId> = HashMap::new();
        for subject in &data.subjects {
            let created = create_subject
                .handle(CreateSubjectCommand {
                    name: subject.name.clone(),
                    weight: Some(subject.weight),
                })
                .await?;
            subject_ids.entry(subject.name.as_str()).or_insert(created.id());
        }

        let create_course = CreateCourseHandler::new(self.courses.clone(), self.agenda.clone());
        for course in &data.courses {
            let teacher_id = teacher_ids
                .get(course.teacher.as_str())
                .copied()
                .ok_or_else(|| CalendarError::not_found("Teacher", &course.teacher))?;
            let subject_id = subject_ids
                .get(course.subject.as_str())
                .copied()
                .ok_or_else(|| CalendarError::not_found("Subject", &course.subject))?;

            create_course
                .handle(CreateCourseCommand {
                    kind: course.kind,
                    subject_id,
                    teacher_id,
                    start: course.start,
                    duration_minutes: course.duration_minutes,
                })
                .await?;
        }

        info!(
            teachers = data.teachers.len(),
            subjects = data.subjects.len(),
            courses = data.courses.len(),
            "Seed dataset applied"
        );
        Ok(())
    }
}
