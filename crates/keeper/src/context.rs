//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the resolved
//! configuration and the global output flags.

use anyhow::{Context, Result};
use keeper_config::{ColorMode, KeeperConfig, Overrides, load_config};
use keeper_ui::terminal::ColorChoice;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Layered configuration with command-line overrides applied.
    pub config: KeeperConfig,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Flags win over `KEEPER_*` variables, which win over `keeper.yaml`.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let overrides = Overrides {
            data_dir: global.data_dir.clone(),
            task_file: global.task_file.clone(),
            contact_file: global.contact_file.clone(),
            no_color: global.no_color,
        };
        let config = load_config(&overrides).context("could not load configuration")?;

        Ok(Self {
            config,
            json: global.json,
            quiet: global.quiet,
        })
    }

    /// The color choice to hand to the terminal layer.
    pub fn color_choice(&self) -> ColorChoice {
        match self.config.color {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}
