//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `dddgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `ConfigStore`: the persisted (language, package) pair
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::application::ApplicationError;
use crate::error::DddgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dddgen_adapters::filesystem::LocalFilesystem` (production)
/// - `dddgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> DddgenResult<()>;

    /// Create or overwrite a file. The parent directory must exist.
    fn write_file(&self, path: &Path, content: &str) -> DddgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Keys of the persisted generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Language,
    Package,
}

impl ConfigKey {
    pub const ALL: [Self; 2] = [Self::Language, Self::Package];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Package => "package",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "language" | "lang" => Ok(Self::Language),
            "package" | "pkg" => Ok(Self::Package),
            other => Err(ApplicationError::UnknownConfigKey(other.to_string())),
        }
    }
}

/// Port for the persisted generator settings.
///
/// Values are stored as plain strings; the settings service validates them
/// on the way in and on the way out.
///
/// Implemented by:
/// - `dddgen_adapters::config_store::TomlConfigStore` (production)
/// - `dddgen_adapters::config_store::MemoryConfigStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    fn get(&self, key: ConfigKey) -> DddgenResult<Option<String>>;

    fn set(&self, key: ConfigKey, value: &str) -> DddgenResult<()>;
}
