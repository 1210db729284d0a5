//! PostgreSQL implementation of SubjectRepository.
//!
//! Deletion runs in a transaction: the subject row is locked, its course
//! references are counted, then the row is removed. The `ON DELETE RESTRICT`
//! foreign key on `courses.subject_id` backs the same rule at the schema level.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::calendar::{NewSubject, Subject};
use crate::domain::foundation::{DomainError, ErrorCode, SubjectId};
use crate::ports::SubjectRepository;

use super::is_foreign_key_violation;

/// PostgreSQL implementation of SubjectRepository.
#[derive(Clone)]
pub struct PostgresSubjectRepository {
    pool: PgPool,
}

impl PostgresSubjectRepository {
    /// Creates a new PostgresSubjectRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectRepository for PostgresSubjectRepository {
    async fn insert(&self, subject: &NewSubject) -> Result<Subject, DomainError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO subjects (name, weight) VALUES ($1, $2) RETURNING id",
        )
        .bind(subject.name())
        .bind(subject.weight())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert subject", e))?;

        Ok(subject.clone().into_subject(SubjectId::new(id)))
    }

    async fn find_by_id(&self, id: SubjectId) -> Result<Option<Subject>, DomainError> {
        let row = sqlx::query("SELECT id, name, weight FROM subjects WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch subject", e))?;

        row.map(row_to_subject).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Subject>, DomainError> {
        let rows = sqlx::query("SELECT id, name, weight FROM subjects WHERE name = $1 ORDER BY id")
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch subjects by name", e))?;

        rows.into_iter().map(row_to_subject).collect()
    }

    async fn find_all(&self) -> Result<Vec<Subject>, DomainError> {
        let rows = sqlx::query("SELECT id, name, weight FROM subjects ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch subjects", e))?;

        rows.into_iter().map(row_to_subject).collect()
    }

    async fn update(&self, subject: &Subject) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE subjects SET name = $2, weight = $3 WHERE id = $1")
            .bind(subject.id().value())
            .bind(subject.name())
            .bind(subject.weight())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to update subject", e))?;

        if result.rows_affected() == 0 {
            return Err(subject_not_found(subject.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: SubjectId) -> Result<Subject, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let row = sqlx::query("SELECT id, name, weight FROM subjects WHERE id = $1 FOR UPDATE")
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to fetch subject", e))?;

        let subject = match row {
            Some(row) => row_to_subject(row)?,
            None => return Err(subject_not_found(id)),
        };

        let in_use: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM courses WHERE subject_id = $1")
            .bind(id.value())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to count subject courses", e))?;

        if in_use > 0 {
            return Err(subject_in_use(id, in_use));
        }

        sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    subject_in_use(id, 1)
                } else {
                    DomainError::database("Failed to delete subject", e)
                }
            })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(subject)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn subject_not_found(id: SubjectId) -> DomainError {
    DomainError::new(ErrorCode::SubjectNotFound, format!("Subject not found: {}", id))
        .with_detail("id", id.to_string())
}

fn subject_in_use(id: SubjectId, courses: i64) -> DomainError {
    DomainError::new(
        ErrorCode::SubjectInUse,
        format!("Subject {} is used by {} course(s)", id, courses),
    )
    .with_detail("id", id.to_string())
}

pub(super) fn row_to_subject(row: sqlx::postgres::PgRow) -> Result<Subject, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;
    let weight: i32 = row
        .try_get("weight")
        .map_err(|e| DomainError::database("Failed to get weight", e))?;

    Ok(Subject::reconstitute(SubjectId::new(id), name, weight))
}
