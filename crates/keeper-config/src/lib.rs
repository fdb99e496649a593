//! Configuration for the keeper assistant.
//!
//! Settings are layered with figment: built-in defaults, then
//! `<data_dir>/keeper.yaml`, then `KEEPER_*` environment variables, then
//! command-line overrides.

pub mod config;
pub mod data_dir;

pub use config::{ColorMode, ConfigError, KeeperConfig, Overrides, load_config, save_config};
