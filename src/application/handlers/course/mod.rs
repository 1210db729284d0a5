//! Course command and query handlers.

mod create_course;
mod get_agenda;
mod query_courses;

pub use create_course::{CreateCourseCommand, CreateCourseHandler};
pub use get_agenda::GetAgendaHandler;
pub use query_courses::{QueryCoursesHandler, QueryCoursesQuery};
