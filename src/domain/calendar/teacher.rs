//! Teacher entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeacherId, ValidationError};

/// A teacher that can be assigned to courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    id: TeacherId,
    name: String,
}

impl Teacher {
    /// Reconstitute a teacher from persistence (no validation).
    pub fn reconstitute(id: TeacherId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> TeacherId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A teacher that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    name: String,
}

impl NewTeacher {
    /// Creates an unsaved teacher.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches the identifier assigned by the store.
    pub fn into_teacher(self, id: TeacherId) -> Teacher {
        Teacher::reconstitute(id, self.name)
    }
}
