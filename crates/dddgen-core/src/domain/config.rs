//! The generator configuration pair.
//!
//! `GeneratorConfig` is the explicit form of the persisted (language, package)
//! choice. Application services load it once per command and hand it to the
//! pure layout and template functions, which never look configuration up on
//! their own.

use crate::domain::{
    error::DomainError,
    value_objects::{PackageIdentifier, TargetLanguage},
};

/// Target language plus the optional package identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    language: TargetLanguage,
    package: Option<PackageIdentifier>,
}

impl GeneratorConfig {
    pub fn new(language: TargetLanguage) -> Self {
        Self {
            language,
            package: None,
        }
    }

    pub fn with_package(mut self, package: PackageIdentifier) -> Self {
        self.package = Some(package);
        self
    }

    pub const fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn package(&self) -> Option<&PackageIdentifier> {
        self.package.as_ref()
    }

    /// The package, required when the language needs one.
    ///
    /// Returns `Ok(None)` for languages that ignore packages, even if one is
    /// stored.
    pub fn require_package(&self) -> Result<Option<&PackageIdentifier>, DomainError> {
        if !self.language.requires_package() {
            return Ok(None);
        }
        self.package
            .as_ref()
            .map(Some)
            .ok_or(DomainError::MissingPackageIdentifier)
    }
}
