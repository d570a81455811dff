//! dddgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the dddgen
//! DDD scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dddgen-cli (CLI)              │
//! │   (prompts, notifications, logging)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, SettingsService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, ConfigStore)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      dddgen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TomlConfigStore, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Layout Resolver, Template Renderer)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use dddgen_core::prelude::*;
//! # fn run(filesystem: Box<dyn Filesystem>, store: Box<dyn ConfigStore>) -> DddgenResult<()> {
//!
//! // 1. Load the persisted (language, package) pair
//! let config = SettingsService::new(store).load()?;
//!
//! // 2. Generate an artifact into its layout directory
//! let service = ScaffoldService::new(filesystem);
//! let name = ArtifactName::new("Order")?;
//! service.create_artifact(Path::new("."), ArtifactKind::Entity, &name, &config)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GenerationReport, ScaffoldService, SettingsService,
        ports::{ConfigKey, ConfigStore, Filesystem},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactName, DomainError, GeneratorConfig, Layout, PackageIdentifier,
        ProjectStructure, RelativePath, RenderedFile, TargetLanguage,
    };
    pub use crate::error::{DddgenError, DddgenResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
