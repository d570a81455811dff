//! Settings store adapters.

mod memory;
mod toml_file;

pub use memory::MemoryConfigStore;
pub use toml_file::{SETTINGS_FILE, StoreError, TomlConfigStore};
