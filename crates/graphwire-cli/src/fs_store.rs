// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed [`ConfigStore`] rooted at the platform config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::config::{ConfigError, ConfigStore};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "GRAPHWIRE_CONFIG_DIR";

/// File name of the settings document.
pub const CONFIG_FILE: &str = "graphwire.json";

/// Keeps the settings document as [`CONFIG_FILE`] in one directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at the user config directory (e.g. `~/.config/graphwire`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "graphwire").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Store rooted at `dir`. The directory is created on first save.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            base: dir.as_ref().to_path_buf(),
        }
    }

    /// Store rooted at `$GRAPHWIRE_CONFIG_DIR` when set, else [`FsConfigStore::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(Self::at(dir)),
            _ => Self::new(),
        }
    }

    /// Path of the settings document.
    pub fn path(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }
}

impl ConfigStore for FsConfigStore {
    fn read(&self) -> Result<Option<Vec<u8>>, ConfigError> {
        let path = self.path();
        match fs::read(&path) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                Ok(None)
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn write(&self, document: &[u8]) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.base)?;
        fs::write(self.path(), document)?;
        debug!(path = %self.path().display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path().join("nested"));
        assert_eq!(store.read().unwrap(), None);
        store.write(b"{}").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some(&b"{}"[..]));
        assert_eq!(store.path(), dir.path().join("nested").join(CONFIG_FILE));
        assert!(store.path().is_file());
    }
}
