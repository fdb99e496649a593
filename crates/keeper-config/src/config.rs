//! Configuration types and loading for the keeper assistant.
//!
//! The main entry point is [`KeeperConfig`]. Configuration is loaded with
//! [`load_config`] and saved with [`save_config`].

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_dir::{config_file_path, ensure_data_dir, resolve_data_dir};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment could not merge or extract the layered configuration.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The configuration file could not be read or written.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be serialized.
    #[error("failed to write config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Prefix of the environment variables read by [`load_config`].
pub const ENV_PREFIX: &str = "KEEPER_";

// ---------------------------------------------------------------------------
// Color mode
// ---------------------------------------------------------------------------

/// When to color terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and the environment allows it.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Returns the lowercase name used in `keeper.yaml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

// ---------------------------------------------------------------------------
// KeeperConfig
// ---------------------------------------------------------------------------

/// Settings for one keeper session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperConfig {
    /// Directory holding both store files and `keeper.yaml`.
    pub data_dir: PathBuf,

    /// Task store file, relative to `data_dir` unless absolute.
    pub task_file: PathBuf,

    /// Contact store file, relative to `data_dir` unless absolute.
    pub contact_file: PathBuf,

    /// When to color output.
    pub color: ColorMode,

    /// Move a corrupted store aside before starting with an empty list.
    pub quarantine_corrupted: bool,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            task_file: PathBuf::from("tasks.txt"),
            contact_file: PathBuf::from("contacts.txt"),
            color: ColorMode::Auto,
            quarantine_corrupted: true,
        }
    }
}

impl KeeperConfig {
    /// Path of the task store.
    pub fn task_path(&self) -> PathBuf {
        self.data_dir.join(&self.task_file)
    }

    /// Path of the contact store.
    pub fn contact_path(&self) -> PathBuf {
        self.data_dir.join(&self.contact_file)
    }

    /// Path of the config file inside the data directory.
    pub fn config_path(&self) -> PathBuf {
        config_file_path(&self.data_dir)
    }

    /// Checks the values figment cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        for (key, file) in [
            ("task_file", &self.task_file),
            ("contact_file", &self.contact_file),
        ] {
            if file.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_owned(),
                    reason: "must not be empty".to_owned(),
                });
            }
        }
        if self.task_path() == self.contact_path() {
            return Err(ConfigError::InvalidValue {
                key: "contact_file".to_owned(),
                reason: format!(
                    "tasks and contacts cannot share the file {}",
                    self.task_path().display()
                ),
            });
        }
        Ok(())
    }

    fn apply(&mut self, overrides: &Overrides) {
        if let Some(task_file) = &overrides.task_file {
            self.task_file = task_file.clone();
        }
        if let Some(contact_file) = &overrides.contact_file {
            self.contact_file = contact_file.clone();
        }
        if overrides.no_color {
            self.color = ColorMode::Never;
        }
    }
}

/// Values given on the command line. They win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub task_file: Option<PathBuf>,
    pub contact_file: Option<PathBuf>,
    pub no_color: bool,
}

/// Builds the layered figment for a data directory.
///
/// Layers, highest wins:
/// 1. `KEEPER_*` environment variables
/// 2. `<data_dir>/keeper.yaml`
/// 3. Built-in defaults
pub fn figment(data_dir: &Path) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(KeeperConfig::default()));

    let config_path = config_file_path(data_dir);
    if has_content(&config_path) {
        figment = figment.merge(Yaml::file(config_path));
    }

    figment.merge(Env::prefixed(ENV_PREFIX))
}

/// Loads the configuration, applying `overrides` last.
///
/// The data directory is resolved first (flag, then `KEEPER_DATA_DIR`, then
/// the default) because `keeper.yaml` lives inside it; a `data_dir` key in
/// that file is ignored.
pub fn load_config(overrides: &Overrides) -> Result<KeeperConfig> {
    let data_dir = resolve_data_dir(overrides.data_dir.as_deref());
    let mut config: KeeperConfig = figment(&data_dir).extract()?;
    config.data_dir = data_dir;
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

/// Writes `config` to `<data_dir>/keeper.yaml`, creating the directory.
///
/// `data_dir` itself is left out of the file.
pub fn save_config(config: &KeeperConfig) -> Result<PathBuf> {
    ensure_data_dir(&config.data_dir)?;

    let mut value = serde_yaml::to_value(config)?;
    if let serde_yaml::Value::Mapping(map) = &mut value {
        map.remove("data_dir");
    }
    let path = config.config_path();
    std::fs::write(&path, serde_yaml::to_string(&value)?)?;
    Ok(path)
}

/// An empty or whitespace-only file counts as absent.
fn has_content(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .map(|content| !content.trim().is_empty())
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
