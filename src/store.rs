//! Persisted settings.
//!
//! The engine treats persistence as an opaque key-value slot holding one JSON
//! record:
//!
//! ```json
//! { "length": 16, "options": { "lowercase": true, "uppercase": true,
//!   "numbers": true, "symbols": true, "exc-duplicate": false,
//!   "spaces": false } }
//! ```
//!
//! Option keys missing from a stored record keep their defaults; unknown keys
//! are ignored. Load and save failures are recoverable: callers fall back to
//! [`GenerationConfig::default`] and carry on.

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;
use crate::config::GenerationConfig;

/// Option keys that are flags rather than categories.
const OPTION_EXC_DUPLICATE: &str = "exc-duplicate";
const OPTION_SPACES: &str = "spaces";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access settings storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings record is not valid: {0}")]
    Format(#[from] serde_json::Error),
}

/// External key-value persistence for the generation configuration.
pub trait SettingsStore {
    /// Returns the stored configuration, or `None` when nothing was saved.
    fn load(&self) -> Result<Option<GenerationConfig>, StoreError>;

    /// Persists the configuration, replacing any previous record.
    fn save(&self, config: &GenerationConfig) -> Result<(), StoreError>;
}

/// Wire representation of the persisted record.
#[derive(Debug, Serialize, Deserialize)]
struct SettingsRecord {
    length: usize,
    options: BTreeMap<String, bool>,
}

impl SettingsRecord {
    fn from_config(config: &GenerationConfig) -> Self {
        let mut options = BTreeMap::new();
        for category in Category::ALL {
            options.insert(category.id().to_string(), config.is_enabled(category));
        }
        options.insert(OPTION_EXC_DUPLICATE.to_string(), config.exclude_duplicates);
        options.insert(OPTION_SPACES.to_string(), config.include_spaces);
        Self {
            length: config.length,
            options,
        }
    }

    fn into_config(self) -> GenerationConfig {
        let mut config = GenerationConfig {
            length: self.length,
            ..GenerationConfig::default()
        };
        for (key, enabled) in self.options {
            if let Some(category) = Category::from_id(&key) {
                config.set_enabled(category, enabled);
            } else if key == OPTION_EXC_DUPLICATE {
                config.exclude_duplicates = enabled;
            } else if key == OPTION_SPACES {
                config.include_spaces = enabled;
            }
            // unknown keys are ignored
        }
        config
    }
}

fn parse_record(raw: &str) -> Result<Option<GenerationConfig>, StoreError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let record: SettingsRecord = serde_json::from_str(raw)?;
    Ok(Some(record.into_config()))
}

/// In-memory store: a single slot holding the serialized record. Useful as a
/// session-scoped stand-in for an external key-value collaborator.
#[derive(Default)]
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<GenerationConfig>, StoreError> {
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        match guard.as_deref() {
            Some(raw) => parse_record(raw),
            None => Ok(None),
        }
    }

    fn save(&self, config: &GenerationConfig) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&SettingsRecord::from_config(config))?;
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(raw);
        Ok(())
    }
}

/// Environment variable overriding the default settings file location.
pub const SETTINGS_PATH_ENV: &str = "PWD_GENERATOR_SETTINGS_PATH";

/// Returns the settings file path.
///
/// Priority:
/// 1. Environment variable `PWD_GENERATOR_SETTINGS_PATH`
/// 2. Default path `./pwd-generator-settings.json`
pub fn default_settings_path() -> PathBuf {
    env::var(SETTINGS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./pwd-generator-settings.json"))
}

/// File-backed store holding the JSON record at a fixed path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_settings_path`].
    pub fn from_env() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Option<GenerationConfig>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        parse_record(&raw)
    }

    fn save(&self, config: &GenerationConfig) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&SettingsRecord::from_config(config))?;
        std::fs::write(&self.path, raw)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            env::remove_var(key);
        }
    }

    fn sample_config() -> GenerationConfig {
        GenerationConfig {
            length: 12,
            lowercase: true,
            uppercase: false,
            numbers: true,
            symbols: false,
            exclude_duplicates: true,
            include_spaces: false,
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let config = sample_config();
        store.save(&config).unwrap();

        let loaded = store.load().unwrap().expect("record present");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_wire_shape_matches_the_persisted_record() {
        let store = MemoryStore::new();
        store.save(&sample_config()).unwrap();

        let raw = store.slot.read().unwrap().clone().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["length"], 12);
        let options = value["options"].as_object().unwrap();
        assert_eq!(options.len(), 6);
        assert_eq!(options["lowercase"], true);
        assert_eq!(options["uppercase"], false);
        assert_eq!(options["numbers"], true);
        assert_eq!(options["symbols"], false);
        assert_eq!(options["exc-duplicate"], true);
        assert_eq!(options["spaces"], false);
    }

    #[test]
    fn test_missing_option_keys_keep_defaults() {
        let store = MemoryStore::new();
        *store.slot.write().unwrap() =
            Some(r#"{"length": 20, "options": {"symbols": false}}"#.to_string());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.length, 20);
        assert!(!loaded.symbols);
        // untouched keys fall back to defaults
        assert!(loaded.lowercase);
        assert!(loaded.uppercase);
        assert!(loaded.numbers);
        assert!(!loaded.exclude_duplicates);
    }

    #[test]
    fn test_unknown_option_keys_are_ignored() {
        let store = MemoryStore::new();
        *store.slot.write().unwrap() = Some(
            r#"{"length": 10, "options": {"lowercase": false, "theme-dark": true}}"#.to_string(),
        );

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.length, 10);
        assert!(!loaded.lowercase);
    }

    #[test]
    fn test_corrupted_record_is_a_format_error() {
        let store = MemoryStore::new();
        *store.slot.write().unwrap() = Some("{not json".to_string());
        assert!(matches!(store.load(), Err(StoreError::Format(_))));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));
        let config = sample_config();

        store.save(&config).unwrap();
        let loaded = store.load().unwrap().expect("record present");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nothing-here.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    #[serial]
    fn test_default_settings_path() {
        remove_env(SETTINGS_PATH_ENV);
        assert_eq!(
            default_settings_path(),
            PathBuf::from("./pwd-generator-settings.json")
        );
    }

    #[test]
    #[serial]
    fn test_settings_path_from_env() {
        let custom_path = "/custom/path/settings.json";
        set_env(SETTINGS_PATH_ENV, custom_path);

        assert_eq!(default_settings_path(), PathBuf::from(custom_path));
        assert_eq!(FileStore::from_env().path(), PathBuf::from(custom_path));

        remove_env(SETTINGS_PATH_ENV);
    }
}
