//! HTTP adapter for calendar endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CourseResponse, CreateCourseRequest, ErrorResponse, SubjectResponse, SubjectWeightQuery,
    TeacherResponse,
};
pub use handlers::CalendarHandlers;
pub use routes::calendar_routes;
