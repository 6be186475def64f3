//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON file (`store.json`) for the StateStore port
//! - In-memory map for tests and ephemeral runs

pub mod json_file;
pub mod memory;
