//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, week arithmetic)
//! - `calendar` - Teachers, subjects, courses, the agenda and the course filter

pub mod calendar;
pub mod foundation;
