//! Infrastructure adapters for dddgen.
//!
//! This crate implements the ports defined in `dddgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod config_store;
pub mod filesystem;

// Re-export commonly used adapters
pub use config_store::{MemoryConfigStore, TomlConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
