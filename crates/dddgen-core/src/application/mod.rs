//! Application layer for dddgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, SettingsService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Input**: Turning collaborator answers into validated values
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! resolution logic itself. Layouts and templates live in `crate::domain`.

pub mod error;
pub mod input;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerationReport, ScaffoldService, SettingsService};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigKey, ConfigStore, Filesystem};

pub use error::ApplicationError;
