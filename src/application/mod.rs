//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) are kept apart; the
//! bootstrap routine runs once before the server starts.

pub mod bootstrap;
pub mod handlers;

pub use bootstrap::{Bootstrap, BootstrapReport};
pub use handlers::{
    CreateCourseCommand, CreateCourseHandler, CreateSubjectCommand, CreateSubjectHandler,
    CreateTeacherCommand, CreateTeacherHandler, DeleteSubjectCommand, DeleteSubjectHandler,
    GetAgendaHandler, GetSubjectByNameHandler, GetSubjectByNameQuery, ListSubjectsHandler,
    ListTeachersHandler, QueryCoursesHandler, QueryCoursesQuery, RenameSubjectCommand,
    RenameSubjectHandler,
};
