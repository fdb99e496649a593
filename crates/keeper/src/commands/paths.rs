//! `keeper paths` -- show where the stores live.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `keeper paths` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let config = &ctx.config;
    if ctx.json {
        return output_json(&serde_json::json!({
            "data_dir": config.data_dir,
            "tasks": config.task_path(),
            "contacts": config.contact_path(),
            "config": config.config_path(),
        }));
    }

    println!("tasks:    {}", config.task_path().display());
    println!("contacts: {}", config.contact_path().display());
    if !ctx.quiet {
        println!("config:   {}", config.config_path().display());
    }
    Ok(())
}
