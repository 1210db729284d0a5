//! Subject entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SubjectId, ValidationError};

/// Weekly hour count given to a subject when the caller does not pick one.
pub const DEFAULT_WEIGHT: i32 = 3;

/// A taught subject (matière).
///
/// The name can change through [`Subject::rename`]; nothing checks that
/// names are unique, so lookups by name may be ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    id: SubjectId,
    name: String,
    weight: i32,
}

impl Subject {
    /// Reconstitute a subject from persistence (no validation).
    pub fn reconstitute(id: SubjectId, name: String, weight: i32) -> Self {
        Self { id, name, weight }
    }

    pub fn id(&self) -> SubjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Rename the subject, returning the previous name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the new name is blank
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<String, ValidationError> {
        let new_name = new_name.into();
        if new_name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(std::mem::replace(&mut self.name, new_name))
    }
}

/// A subject that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    name: String,
    weight: i32,
}

impl NewSubject {
    /// Creates an unsaved subject.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(name: impl Into<String>, weight: i32) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self { name, weight })
    }

    /// Creates an unsaved subject with [`DEFAULT_WEIGHT`].
    pub fn with_default_weight(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, DEFAULT_WEIGHT)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Attaches the identifier assigned by the store.
    pub fn into_subject(self, id: SubjectId) -> Subject {
        Subject::reconstitute(id, self.name, self.weight)
    }
}
