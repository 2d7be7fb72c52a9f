//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session stores (YAML files, in-memory)

pub mod storage;

pub use storage::{FileSessionStore, InMemorySessionStore};
