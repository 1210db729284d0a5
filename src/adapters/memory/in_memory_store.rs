//! In-Memory Calendar Store Adapter
//!
//! Keeps teachers, subjects and courses in one lock-guarded table set so
//! that cross-table rules (resolving course references, refusing to delete
//! a subject still in use) are checked atomically. Useful for tests and
//! development, and the default backend.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::calendar::{
    Course, CourseKind, NewCourse, NewSubject, NewTeacher, Subject, Teacher,
};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, SubjectId, TeacherId};
use crate::ports::{CourseRepository, SubjectRepository, TeacherRepository};

/// Stored course row; references are resolved on read.
#[derive(Debug, Clone)]
struct CourseRow {
    kind: CourseKind,
    subject_id: SubjectId,
    teacher_id: TeacherId,
    start: NaiveDateTime,
    duration_minutes: i64,
}

#[derive(Debug, Default)]
struct Tables {
    teachers: BTreeMap<TeacherId, Teacher>,
    subjects: BTreeMap<SubjectId, Subject>,
    courses: BTreeMap<CourseId, CourseRow>,
    last_teacher_id: i64,
    last_subject_id: i64,
    last_course_id: i64,
}

impl Tables {
    fn resolve(&self, id: CourseId, row: &CourseRow) -> Result<Course, DomainError> {
        let subject = self.subjects.get(&row.subject_id).cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Course {} references missing subject {}", id, row.subject_id),
            )
        })?;
        let teacher = self.teachers.get(&row.teacher_id).cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Course {} references missing teacher {}", id, row.teacher_id),
            )
        })?;
        Ok(Course::reconstitute(
            id,
            row.kind,
            subject,
            teacher,
            row.start,
            row.duration_minutes,
        ))
    }
}

/// In-memory implementation of all calendar repository ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCalendarStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCalendarStore {
    /// Create an empty store. Ids start at 1 for every table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored teachers
    pub async fn teacher_count(&self) -> usize {
        self.tables.read().await.teachers.len()
    }

    /// Get the number of stored subjects
    pub async fn subject_count(&self) -> usize {
        self.tables.read().await.subjects.len()
    }

    /// Get the number of stored courses
    pub async fn course_count(&self) -> usize {
        self.tables.read().await.courses.len()
    }
}

#[async_trait]
impl TeacherRepository for InMemoryCalendarStore {
    async fn insert(&self, teacher: &NewTeacher) -> Result<Teacher, DomainError> {
        let mut tables = self.tables.write().await;
        tables.last_teacher_id += 1;
        let stored = teacher
            .clone()
            .into_teacher(TeacherId::new(tables.last_teacher_id));
        tables.teachers.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, DomainError> {
        Ok(self.tables.read().await.teachers.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError> {
        Ok(self.tables.read().await.teachers.values().cloned().collect())
    }
}

#[async_trait]
impl SubjectRepository for InMemoryCalendarStore {
    async fn insert(&self, subject: &NewSubject) -> Result<Subject, DomainError> {
        let mut tables = self.tables.write().await;
        tables.last_subject_id += 1;
        let stored = subject
            .clone()
            .into_subject(SubjectId::new(tables.last_subject_id));
        tables.subjects.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: SubjectId) -> Result<Option<Subject>, DomainError> {
        Ok(self.tables.read().await.subjects.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Subject>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .subjects
            .values()
            .filter(|s| s.name() == name)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Subject>, DomainError> {
        Ok(self.tables.read().await.subjects.values().cloned().collect())
    }

    async fn update(&self, subject: &Subject) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.subjects.get_mut(&subject.id()) {
            Some(stored) => {
                *stored = subject.clone();
                Ok(())
            }
            None => Err(subject_not_found(subject.id())),
        }
    }

    async fn delete(&self, id: SubjectId) -> Result<Subject, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.subjects.contains_key(&id) {
            return Err(subject_not_found(id));
        }

        let in_use = tables
            .courses
            .values()
            .filter(|row| row.subject_id == id)
            .count();
        if in_use > 0 {
            return Err(DomainError::new(
                ErrorCode::SubjectInUse,
                format!("Subject {} is used by {} course(s)", id, in_use),
            )
            .with_detail("id", id.to_string()));
        }

        tables.subjects.remove(&id).ok_or_else(|| subject_not_found(id))
    }
}

#[async_trait]
impl CourseRepository for InMemoryCalendarStore {
    async fn insert(&self, course: &NewCourse) -> Result<Course, DomainError> {
        let mut tables = self.tables.write().await;
        let subject = tables
            .subjects
            .get(&course.subject_id())
            .cloned()
            .ok_or_else(|| subject_not_found(course.subject_id()))?;
        let teacher = tables
            .teachers
            .get(&course.teacher_id())
            .cloned()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::TeacherNotFound,
                    format!("Teacher not found: {}", course.teacher_id()),
                )
                .with_detail("id", course.teacher_id().to_string())
            })?;

        tables.last_course_id += 1;
        let id = CourseId::new(tables.last_course_id);
        tables.courses.insert(
            id,
            CourseRow {
                kind: course.kind(),
                subject_id: course.subject_id(),
                teacher_id: course.teacher_id(),
                start: *course.start(),
                duration_minutes: course.duration_minutes(),
            },
        );

        Ok(course.clone().into_course(id, subject, teacher))
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError> {
        let tables = self.tables.read().await;
        tables
            .courses
            .get(&id)
            .map(|row| tables.resolve(id, row))
            .transpose()
    }

    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, DomainError> {
        let tables = self.tables.read().await;
        ids.iter()
            .filter_map(|id| tables.courses.get(id).map(|row| tables.resolve(*id, row)))
            .collect()
    }

    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let tables = self.tables.read().await;
        tables
            .courses
            .iter()
            .map(|(id, row)| tables.resolve(*id, row))
            .collect()
    }
}

fn subject_not_found(id: SubjectId) -> DomainError {
    DomainError::new(ErrorCode::SubjectNotFound, format!("Subject not found: {}", id))
        .with_detail("id", id.to_string())
}
