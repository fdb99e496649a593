//! `keeper config` -- show or write the resolved configuration.

use anyhow::{Context, Result};
use keeper_config::save_config;

use crate::cli::ConfigArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `keeper config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    let config = &ctx.config;

    if args.init {
        let path = save_config(config)
            .with_context(|| format!("failed to write {}", config.config_path().display()))?;
        if ctx.json {
            output_json(&serde_json::json!({ "written": path }))?;
        } else if !ctx.quiet {
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    if ctx.json {
        return output_json(config);
    }

    println!("data_dir = {}", config.data_dir.display());
    println!("task_file = {}", config.task_file.display());
    println!("contact_file = {}", config.contact_file.display());
    println!("color = {}", config.color.as_str());
    println!("quarantine_corrupted = {}", config.quarantine_corrupted);
    Ok(())
}
