//! Agendapp - Academic Calendar Backend
//!
//! Teachers, subjects and course sessions behind a small REST API, with an
//! in-process agenda of scheduled courses and a week/id course search.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
