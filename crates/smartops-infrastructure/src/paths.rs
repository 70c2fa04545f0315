//! Unified path management for SmartOps configuration and storage files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/smartops/          # Config directory
//! └── config.toml              # API configuration
//!
//! ~/.local/share/smartops/     # Data directory
//! └── storage.json             # Persistent key-value store (token, user)
//! ```
//!
//! When a base directory is supplied (CLI `--data-dir`, tests), both files
//! live directly under it.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "smartops";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_FILE: &str = "storage.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for smartops_core::SmartOpsError {
    fn from(err: PathError) -> Self {
        smartops_core::SmartOpsError::config(err.to_string())
    }
}

/// Resolves where SmartOps keeps its files.
#[derive(Debug, Clone, Default)]
pub struct SmartOpsPaths {
    base: Option<PathBuf>,
}

impl SmartOpsPaths {
    /// Creates a resolver. `base` overrides the platform directories.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the configuration directory (e.g. `~/.config/smartops/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the data directory (e.g. `~/.local/share/smartops/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    /// Path of the persistent key-value store holding the session.
    pub fn storage_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join(STORAGE_FILE))
    }
}
