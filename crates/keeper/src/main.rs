//! `keeper` -- a grumpy command-line keeper of tasks and contacts.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and either
//! runs the interactive session or dispatches to a one-shot command.

mod cli;
mod commands;
mod context;
mod messages;
mod output;
mod session;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Filter used by `--verbose`.
const VERBOSE_FILTER: &str = "keeper=debug,keeper_storage=debug";

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    // Every mutating command has already been saved by the time the next
    // line is read.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| {
        keeper_ui::terminal::set_color_choice(ctx.color_choice());
        match &cli.command {
            Some(Commands::Exec(args)) => commands::exec::run(&ctx, args),
            Some(Commands::Paths) => commands::paths::run(&ctx),
            Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, args),
            Some(Commands::Completion(args)) => commands::completion::run(args),
            None => commands::repl::run(&ctx),
        }
    });

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "ok": false,
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries responses only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
