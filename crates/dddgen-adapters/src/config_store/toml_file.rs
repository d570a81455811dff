//! `settings.toml` store.
//!
//! ```toml
//! language = "java"
//! package = "com.acme.shop"
//! ```
//!
//! The file is read on every `get` and rewritten on every `set`; a missing
//! file reads as empty.

use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use dddgen_core::{
    application::{ApplicationError, ports::{ConfigKey, ConfigStore}},
    error::{DddgenError, DddgenResult},
};

/// File name inside the platform config directory.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Failures local to this adapter, surfaced as `ApplicationError::ConfigStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("{path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl StoreError {
    fn into_core(self, key: impl Into<String>) -> DddgenError {
        ApplicationError::ConfigStore {
            key: key.into(),
            reason: self.to_string(),
        }
        .into()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    package: Option<String>,
}

impl SettingsFile {
    fn slot(&mut self, key: ConfigKey) -> &mut Option<String> {
        match key {
            ConfigKey::Language => &mut self.language,
            ConfigKey::Package => &mut self.package,
        }
    }
}

/// Settings persisted as TOML on disk.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform config dir>/settings.toml`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        ProjectDirs::from("", "", "dddgen")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
            .ok_or(StoreError::NoConfigDir)
    }

    /// Store at the platform default location.
    pub fn at_default_location() -> DddgenResult<Self> {
        Self::default_path()
            .map(Self::new)
            .map_err(|e| e.into_core("settings"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SettingsFile, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SettingsFile::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        toml::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, settings: &SettingsFile) -> Result<(), StoreError> {
        let raw = toml::to_string_pretty(settings)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl ConfigStore for TomlConfigStore {
    fn get(&self, key: ConfigKey) -> DddgenResult<Option<String>> {
        let mut settings = self.read().map_err(|e| e.into_core(key.as_str()))?;
        Ok(settings.slot(key).take())
    }

    fn set(&self, key: ConfigKey, value: &str) -> DddgenResult<()> {
        let mut settings = self.read().map_err(|e| e.into_core(key.as_str()))?;
        *settings.slot(key) = Some(value.to_string());
        self.write(&settings).map_err(|e| e.into_core(key.as_str()))?;
        debug!(key = %key, path = %self.path.display(), "Setting stored");
        Ok(())
    }
}
