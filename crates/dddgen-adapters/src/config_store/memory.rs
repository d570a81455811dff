//! In-memory settings store for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use dddgen_core::{
    application::{ApplicationError, ports::{ConfigKey, ConfigStore}},
    error::DddgenResult,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    values: Arc<RwLock<HashMap<ConfigKey, String>>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate one key.
    pub fn with(self, key: ConfigKey, value: impl Into<String>) -> Self {
        if let Ok(mut values) = self.values.write() {
            values.insert(key, value.into());
        }
        self
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: ConfigKey) -> DddgenResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: ConfigKey, value: &str) -> DddgenResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        values.insert(key, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepopulated_values_are_visible() {
        let store = MemoryConfigStore::new().with(ConfigKey::Language, "csharp");
        assert_eq!(store.get(ConfigKey::Language).unwrap().as_deref(), Some("csharp"));
        assert_eq!(store.get(ConfigKey::Package).unwrap(), None);
    }
}
