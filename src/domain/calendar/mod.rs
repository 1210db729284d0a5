//! Calendar domain module.
//!
//! Teachers, subjects and the course sessions that tie them together,
//! plus the agenda registry and the week/id course filter.

mod agenda;
mod course;
mod errors;
mod filter;
mod subject;
mod teacher;

pub use agenda::{Agenda, SharedAgenda};
pub use course::{Course, CourseKind, NewCourse};
pub use errors::CalendarError;
pub use filter::CourseFilter;
pub use subject::{NewSubject, Subject, DEFAULT_WEIGHT};
pub use teacher::{NewTeacher, Teacher};
