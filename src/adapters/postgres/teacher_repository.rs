//! PostgreSQL implementation of TeacherRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::calendar::{NewTeacher, Teacher};
use crate::domain::foundation::{DomainError, TeacherId};
use crate::ports::TeacherRepository;

/// PostgreSQL implementation of TeacherRepository.
#[derive(Clone)]
pub struct PostgresTeacherRepository {
    pool: PgPool,
}

impl PostgresTeacherRepository {
    /// Creates a new PostgresTeacherRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for PostgresTeacherRepository {
    async fn insert(&self, teacher: &NewTeacher) -> Result<Teacher, DomainError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO teachers (name) VALUES ($1) RETURNING id")
            .bind(teacher.name())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to insert teacher", e))?;

        Ok(teacher.clone().into_teacher(TeacherId::new(id)))
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM teachers WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch teacher", e))?;

        row.map(row_to_teacher).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM teachers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch teachers", e))?;

        rows.into_iter().map(row_to_teacher).collect()
    }
}

fn row_to_teacher(row: sqlx::postgres::PgRow) -> Result<Teacher, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;

    Ok(Teacher::reconstitute(TeacherId::new(id), name))
}
