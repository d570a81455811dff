//! Settings Service - the persisted (language, package) pair.
//!
//! Every command loads its `GeneratorConfig` here once, up front. Values are
//! validated before they are stored, so a rejected change never leaves the
//! store half-updated.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ConfigKey, ConfigStore},
    domain::{DomainError, GeneratorConfig, PackageIdentifier, TargetLanguage},
    error::DddgenResult,
};

pub struct SettingsService {
    store: Box<dyn ConfigStore>,
}

impl SettingsService {
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Read the current configuration.
    ///
    /// A missing language means TypeScript. Stored values are parsed again, so
    /// a hand-edited settings file surfaces as a validation error.
    pub fn load(&self) -> DddgenResult<GeneratorConfig> {
        let language = match self.store.get(ConfigKey::Language)? {
            Some(raw) => raw.parse::<TargetLanguage>()?,
            None => TargetLanguage::default(),
        };

        // The package only matters, and is only checked, for Java.
        let config = GeneratorConfig::new(language);
        let config = match self.stored_package_for(language)? {
            Some(package) => config.with_package(package),
            None => config,
        };

        debug!(
            language = %config.language(),
            package = ?config.package().map(PackageIdentifier::as_str),
            "Settings loaded"
        );
        Ok(config)
    }

    /// Switch the target language.
    ///
    /// Java needs a package: the one supplied here, or one already stored.
    /// Without either this fails with `MissingPackageIdentifier` and nothing
    /// is written.
    #[instrument(skip_all, fields(language = %language))]
    pub fn change_language(
        &self,
        language: TargetLanguage,
        package: Option<&str>,
    ) -> DddgenResult<GeneratorConfig> {
        let package = match package {
            Some(raw) => Some(PackageIdentifier::parse(raw)?),
            None => None,
        };

        if language.requires_package() && package.is_none() && self.stored_package()?.is_none() {
            return Err(DomainError::MissingPackageIdentifier.into());
        }

        // Language goes last: a failed package write leaves the old pair intact.
        if let Some(pkg) = &package {
            self.store.set(ConfigKey::Package, pkg.as_str())?;
        }
        self.store.set(ConfigKey::Language, language.as_str())?;

        info!("Target language changed");
        self.load()
    }

    /// Store a package identifier without touching the language.
    #[instrument(skip(self))]
    pub fn set_package(&self, raw: &str) -> DddgenResult<PackageIdentifier> {
        let package = PackageIdentifier::parse(raw)?;
        self.store.set(ConfigKey::Package, package.as_str())?;
        info!("Package identifier stored");
        Ok(package)
    }

    /// Raw stored value of one key.
    pub fn get(&self, key: ConfigKey) -> DddgenResult<Option<String>> {
        self.store.get(key)
    }

    /// Validate and store one key. Returns the normalized value.
    pub fn set(&self, key: ConfigKey, raw: &str) -> DddgenResult<String> {
        match key {
            ConfigKey::Language => {
                // Same Java guard as `change_language`.
                let language = raw.parse::<TargetLanguage>()?;
                self.change_language(language, None)?;
                Ok(language.as_str().to_string())
            }
            ConfigKey::Package => Ok(self.set_package(raw)?.as_str().to_string()),
        }
    }

    fn stored_package(&self) -> DddgenResult<Option<PackageIdentifier>> {
        match self.store.get(ConfigKey::Package)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(PackageIdentifier::parse(&raw)?)),
            _ => Ok(None),
        }
    }

    fn stored_package_for(
        &self,
        language: TargetLanguage,
    ) -> DddgenResult<Option<PackageIdentifier>> {
        if language.requires_package() {
            self.stored_package()
        } else {
            Ok(None)
        }
    }
}
