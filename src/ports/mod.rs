//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `TeacherRepository` - Teacher persistence
//! - `SubjectRepository` - Subject persistence, rename and guarded delete
//! - `CourseRepository` - Course persistence with resolved references

mod course_repository;
mod subject_repository;
mod teacher_repository;

pub use course_repository::CourseRepository;
pub use subject_repository::SubjectRepository;
pub use teacher_repository::TeacherRepository;
