//! Subject command and query handlers.

mod create_subject;
mod delete_subject;
mod get_subject_by_name;
mod list_subjects;
mod rename_subject;

pub use create_subject::{CreateSubjectCommand, CreateSubjectHandler};
pub use delete_subject::{DeleteSubjectCommand, DeleteSubjectHandler};
pub use get_subject_by_name::{GetSubjectByNameHandler, GetSubjectByNameQuery};
pub use list_subjects::ListSubjectsHandler;
pub use rename_subject::{RenameSubjectCommand, RenameSubjectHandler};
