//! Strongly-typed identifier value objects.
//!
//! Identifiers are numeric and assigned by the store on insert. The three
//! kinds share one number space from the caller's point of view: the course
//! query compares a single raw id against all of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generates a numeric identifier newtype with the conversions every id needs.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw store identifier.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw numeric value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

numeric_id!(
    /// Identifier of a teacher (enseignant).
    TeacherId
);

numeric_id!(
    /// Identifier of a subject (matière).
    SubjectId
);

numeric_id!(
    /// Identifier of a scheduled course session.
    CourseId
);
