//! In-memory adapters - process-local implementations of the repository ports.

mod in_memory_store;

pub use in_memory_store::InMemoryCalendarStore;
