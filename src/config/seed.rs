//! Startup seed configuration
//!
//! The seed is applied once at boot, and only to an empty store. Without a
//! `file` the built-in dataset is used.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::domain::calendar::{CourseKind, DEFAULT_WEIGHT};

/// Seed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Apply the seed when the store is empty
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// YAML file replacing the built-in dataset
    pub file: Option<PathBuf>,
}

impl SeedConfig {
    /// Resolves the dataset to apply: the configured file, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn dataset(&self) -> Result<SeedData, ConfigError> {
        match &self.file {
            Some(path) => SeedData::from_file(path),
            None => Ok(SeedData::default()),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            file: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// A subject to create at boot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedSubject {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: i32,
}

fn default_weight() -> i32 {
    DEFAULT_WEIGHT
}

/// A course to create at boot. Subject and teacher are referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedCourse {
    pub subject: String,
    pub teacher: String,
    pub start: NaiveDateTime,
    pub duration_minutes: i64,
    #[serde(default)]
    pub kind: CourseKind,
}

/// Dataset applied to an empty store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub teachers: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<SeedSubject>,
    #[serde(default)]
    pub courses: Vec<SeedCourse>,
}

impl SeedData {
    /// Parses a dataset from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Reads and parses a YAML dataset file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty() && self.subjects.is_empty() && self.courses.is_empty()
    }
}

impl Default for SeedData {
    /// The two teachers, one subject and three TD sessions of January 2015.
    fn default() -> Self {
        let td = |day: u32, hour: u32, teacher: &str, duration_minutes: i64| SeedCourse {
            subject: "Web".to_string(),
            teacher: teacher.to_string(),
            start: at(2015, 1, day, hour),
            duration_minutes,
            kind: CourseKind::Td,
        };

        Self {
            teachers: vec!["Blouin".to_string(), "Bieber".to_string()],
            subjects: vec![SeedSubject {
                name: "Web".to_string(),
                weight: DEFAULT_WEIGHT,
            }],
            courses: vec![
                td(1, 8, "Blouin", 120),
                td(2, 14, "Bieber", 180),
                td(2, 10, "Blouin", 60),
            ],
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap_or_default()
}
