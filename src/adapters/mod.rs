//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process store implementing every repository port
//! - `postgres` - sqlx/PostgreSQL repositories, pool and migrations
//! - `http` - axum REST API

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{app_router, CalendarHandlers};
pub use memory::InMemoryCalendarStore;
