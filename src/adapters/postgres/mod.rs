//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresTeacherRepository` - teachers table
//! - `PostgresSubjectRepository` - subjects table, guarded delete
//! - `PostgresCourseRepository` - courses joined with their subject and teacher
//! - `connect` / `run_migrations` - pool setup from `DatabaseConfig`

mod course_repository;
mod database;
mod subject_repository;
mod teacher_repository;

pub use course_repository::PostgresCourseRepository;
pub use database::{connect, run_migrations};
pub use subject_repository::PostgresSubjectRepository;
pub use teacher_repository::PostgresTeacherRepository;

/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == FOREIGN_KEY_VIOLATION)
}
