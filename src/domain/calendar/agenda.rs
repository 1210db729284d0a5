//! Agenda: the in-memory registry of scheduled courses.
//!
//! # Ownership
//!
//! The agenda references courses by id but does NOT own them.
//! Courses live in the store; resolving ids is the caller's job.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::CourseId;

/// Agenda shared between request handlers.
pub type SharedAgenda = Arc<RwLock<Agenda>>;

/// Ordered, duplicate-free list of registered courses.
///
/// # Invariants
///
/// - a course id appears at most once
/// - ids are kept in registration order
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    course_ids: Vec<CourseId>,
    index: HashSet<CourseId>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh agenda for sharing across handlers.
    pub fn shared() -> SharedAgenda {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Register a course.
    ///
    /// Returns `false` and leaves the agenda untouched if the course is
    /// already registered.
    pub fn add(&mut self, course_id: CourseId) -> bool {
        if !self.index.insert(course_id) {
            return false;
        }
        self.course_ids.push(course_id);
        true
    }

    /// Returns registered course ids in registration order.
    pub fn course_ids(&self) -> &[CourseId] {
        &self.course_ids
    }

    pub fn len(&self) -> usize {
        self.course_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.course_ids.is_empty()
    }
}
