//! PostgreSQL implementation of CourseRepository.
//!
//! Courses are read with their subject and teacher joined in, so every
//! returned course carries the current state of both.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{PgPool, Row};

use crate::domain::calendar::{Course, CourseKind, NewCourse, Subject, Teacher};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, SubjectId, TeacherId};
use crate::ports::CourseRepository;

use super::subject_repository::row_to_subject;

const SELECT_COURSES: &str = r#"
    SELECT c.id, c.kind, c.start_at, c.duration_minutes,
           s.id AS subject_id, s.name AS subject_name, s.weight AS subject_weight,
           t.id AS teacher_id, t.name AS teacher_name
    FROM courses c
    JOIN subjects s ON s.id = c.subject_id
    JOIN teachers t ON t.id = c.teacher_id
"#;

/// PostgreSQL implementation of CourseRepository.
#[derive(Clone)]
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    /// Creates a new PostgresCourseRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn insert(&self, course: &NewCourse) -> Result<Course, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        // Lock both references so they cannot disappear before the insert lands
        let subject = sqlx::query("SELECT id, name, weight FROM subjects WHERE id = $1 FOR SHARE")
            .bind(course.subject_id().value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to fetch subject", e))?
            .map(row_to_subject)
            .transpose()?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SubjectNotFound,
                    format!("Subject not found: {}", course.subject_id()),
                )
                .with_detail("id", course.subject_id().to_string())
            })?;

        let teacher = sqlx::query("SELECT id, name FROM teachers WHERE id = $1 FOR SHARE")
            .bind(course.teacher_id().value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to fetch teacher", e))?
            .map(|row| -> Result<Teacher, DomainError> {
                let id: i64 = row
                    .try_get("id")
                    .map_err(|e| DomainError::database("Failed to get id", e))?;
                let name: String = row
                    .try_get("name")
                    .map_err(|e| DomainError::database("Failed to get name", e))?;
                Ok(Teacher::reconstitute(TeacherId::new(id), name))
            })
            .transpose()?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::TeacherNotFound,
                    format!("Teacher not found: {}", course.teacher_id()),
                )
                .with_detail("id", course.teacher_id().to_string())
            })?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO courses (kind, subject_id, teacher_id, start_at, duration_minutes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(course.kind().as_str())
        .bind(course.subject_id().value())
        .bind(course.teacher_id().value())
        .bind(*course.start())
        .bind(course.duration_minutes())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert course", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(course.clone().into_course(CourseId::new(id), subject, teacher))
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE c.id = $1", SELECT_COURSES))
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch course", e))?;

        row.map(row_to_course).transpose()
    }

    async fn find_by_ids(&self, ids: &[CourseId]) -> Result<Vec<Course>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(CourseId::value).collect();
        let rows = sqlx::query(&format!(
            "{} WHERE c.id = ANY($1) ORDER BY array_position($1, c.id)",
            SELECT_COURSES
        ))
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch courses by id", e))?;

        rows.into_iter().map(row_to_course).collect()
    }

    async fn find_all(&self) -> Result<Vec<Course>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY c.id", SELECT_COURSES))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch courses", e))?;

        rows.into_iter().map(row_to_course).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_course_kind(s: &str) -> Result<CourseKind, DomainError> {
    s.parse::<CourseKind>().map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid course kind: {}", e))
    })
}

fn row_to_course(row: sqlx::postgres::PgRow) -> Result<Course, DomainError> {
    let get_err = |column: &str, e: sqlx::Error| {
        DomainError::database(&format!("Failed to get {}", column), e)
    };

    let id: i64 = row.try_get("id").map_err(|e| get_err("id", e))?;
    let kind: String = row.try_get("kind").map_err(|e| get_err("kind", e))?;
    let start: NaiveDateTime = row.try_get("start_at").map_err(|e| get_err("start_at", e))?;
    let duration_minutes: i64 = row
        .try_get("duration_minutes")
        .map_err(|e| get_err("duration_minutes", e))?;
    let subject_id: i64 = row.try_get("subject_id").map_err(|e| get_err("subject_id", e))?;
    let subject_name: String = row
        .try_get("subject_name")
        .map_err(|e| get_err("subject_name", e))?;
    let subject_weight: i32 = row
        .try_get("subject_weight")
        .map_err(|e| get_err("subject_weight", e))?;
    let teacher_id: i64 = row.try_get("teacher_id").map_err(|e| get_err("teacher_id", e))?;
    let teacher_name: String = row
        .try_get("teacher_name")
        .map_err(|e| get_err("teacher_name", e))?;

    Ok(Course::reconstitute(
        CourseId::new(id),
        str_to_course_kind(&kind)?,
        Subject::reconstitute(SubjectId::new(subject_id), subject_name, subject_weight),
        Teacher::reconstitute(TeacherId::new(teacher_id), teacher_name),
        start,
        duration_minutes,
    ))
}
