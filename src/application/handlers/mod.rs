//! Command and query handlers, one per calendar operation.

pub mod course;
pub mod subject;
pub mod teacher;

pub use course::{
    CreateCourseCommand, CreateCourseHandler, GetAgendaHandler, QueryCoursesHandler,
    QueryCoursesQuery,
};
pub use subject::{
    CreateSubjectCommand, CreateSubjectHandler, DeleteSubjectCommand, DeleteSubjectHandler,
    GetSubjectByNameHandler, GetSubjectByNameQuery, ListSubjectsHandler, RenameSubjectCommand,
    RenameSubjectHandler,
};
pub use teacher::{CreateTeacherCommand, CreateTeacherHandler, ListTeachersHandler};
