//! Command handlers.
//!
//! Each handler turns parsed arguments into calls on the core services and
//! renders the result. Adapters are built here, once per invocation.

use std::path::{Path, PathBuf};

use dddgen_adapters::{LocalFilesystem, TomlConfigStore};
use dddgen_core::application::{ScaffoldService, SettingsService};

use crate::{
    cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager, prompt::Prompter,
};

pub mod completions;
pub mod config;
pub mod generate;
pub mod language;
pub mod layout;

/// Everything a handler needs besides its own arguments.
pub struct Context {
    pub global: GlobalArgs,
    pub config: AppConfig,
    pub output: OutputManager,
    pub prompter: Prompter,
}

impl Context {
    pub fn new(global: GlobalArgs, config: AppConfig, output: OutputManager) -> Self {
        let prompter = Prompter::detect(global.quiet || output.is_json());
        Self {
            global,
            config,
            output,
            prompter,
        }
    }

    /// The settings file in effect: `--settings`, then `settings.path`, then
    /// the platform default.
    pub fn settings_store(&self) -> CliResult<TomlConfigStore> {
        match self.config.settings_path(self.global.settings.as_deref()) {
            Some(path) => Ok(TomlConfigStore::new(path)),
            None => Ok(TomlConfigStore::at_default_location()?),
        }
    }

    pub fn settings(&self) -> CliResult<SettingsService> {
        Ok(SettingsService::new(Box::new(self.settings_store()?)))
    }

    pub fn scaffold(&self) -> ScaffoldService {
        ScaffoldService::new(Box::new(LocalFilesystem::new()))
    }
}

/// The workspace folder to generate into; defaults to the current directory.
pub fn workspace_root(root: Option<&Path>) -> CliResult<PathBuf> {
    match root {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}
