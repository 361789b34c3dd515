//! Storage adapters for the domain ports.

pub mod file;
pub mod in_memory;
pub mod json_store;
