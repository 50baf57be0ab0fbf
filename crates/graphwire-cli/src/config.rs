// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted `graphwire` preferences and the storage port they live behind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Storage port for the single settings document.
pub trait ConfigStore {
    /// The saved document, or `None` before the first save.
    fn read(&self) -> Result<Option<Vec<u8>>, ConfigError>;
    /// Replace the saved document.
    fn write(&self, document: &[u8]) -> Result<(), ConfigError>;
}

/// Failure to locate, read or write the settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The saved document is not a valid settings object.
    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
    /// No usable config directory.
    #[error("could not resolve config dir")]
    NoConfigDir,
}

/// Persisted CLI preferences. Missing members take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    /// Indent JSON written by `parse`.
    pub pretty: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl CliConfig {
    /// Settings saved in `store`; the defaults when nothing (or an empty
    /// document) was saved.
    pub fn load(store: &impl ConfigStore) -> Result<Self, ConfigError> {
        match store.read()? {
            Some(document) if !document.is_empty() => Ok(serde_json::from_slice(&document)?),
            _ => Ok(Self::default()),
        }
    }

    /// Write these settings to `store` as pretty JSON.
    pub fn save(&self, store: &impl ConfigStore) -> Result<(), ConfigError> {
        store.write(&serde_json::to_vec_pretty(self)?)
    }

    /// Load, apply `edit`, save, and return the saved settings.
    pub fn update(store: &impl ConfigStore, edit: impl FnOnce(&mut Self)) -> Result<Self, ConfigError> {
        let mut config = Self::load(store)?;
        edit(&mut config);
        config.save(store)?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore(RefCell<Option<Vec<u8>>>);

    impl ConfigStore for MemoryStore {
        fn read(&self) -> Result<Option<Vec<u8>>, ConfigError> {
            Ok(self.0.borrow().clone())
        }

        fn write(&self, document: &[u8]) -> Result<(), ConfigError> {
            *self.0.borrow_mut() = Some(document.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_or_empty_documents_read_as_defaults() {
        let store = MemoryStore::default();
        assert_eq!(CliConfig::load(&store).unwrap(), CliConfig::default());
        store.write(b"").unwrap();
        assert_eq!(CliConfig::load(&store).unwrap(), CliConfig::default());
    }

    #[test]
    fn updates_persist() {
        let store = MemoryStore::default();
        CliConfig::update(&store, |c| c.pretty = true).unwrap();
        let config = CliConfig::update(&store, |c| c.log_filter = "graphwire_json=trace".into()).unwrap();
        assert!(config.pretty);
        assert_eq!(CliConfig::load(&store).unwrap(), config);

        let saved: serde_json::Value = serde_json::from_slice(&store.read().unwrap().unwrap()).unwrap();
        assert_eq!(saved["logFilter"], "graphwire_json=trace");
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let store = MemoryStore::default();
        store.write(br#"{"pretty":true}"#).unwrap();
        let config = CliConfig::load(&store).unwrap();
        assert!(config.pretty);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn corrupt_documents_are_errors() {
        let store = MemoryStore::default();
        store.write(b"{not json").unwrap();
        assert!(matches!(CliConfig::load(&store), Err(ConfigError::Malformed(_))));
    }
}
