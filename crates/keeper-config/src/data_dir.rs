//! Locating and creating the data directory.
//!
//! The data directory holds the task store, the contact store and the
//! optional `keeper.yaml`.

use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Directory used when nothing else names one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "KEEPER_DATA_DIR";

/// Name of the config file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "keeper.yaml";

/// Picks the data directory: `flag`, then `KEEPER_DATA_DIR`, then `data`.
///
/// An empty environment value counts as unset.
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

/// Path of the config file inside `data_dir`.
pub fn config_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Ensures `data_dir` exists, creating it and any parents.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if directory creation fails.
pub fn ensure_data_dir(data_dir: &Path) -> Result<PathBuf, ConfigError> {
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.to_path_buf())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
