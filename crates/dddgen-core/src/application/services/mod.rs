//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "switch language".

pub mod scaffold_service;
pub mod settings_service;

pub use scaffold_service::{GenerationReport, ScaffoldService};
pub use settings_service::SettingsService;
