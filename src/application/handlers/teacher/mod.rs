//! Teacher command and query handlers.

mod create_teacher;
mod list_teachers;

pub use create_teacher::{CreateTeacherCommand, CreateTeacherHandler};
pub use list_teachers::ListTeachersHandler;
