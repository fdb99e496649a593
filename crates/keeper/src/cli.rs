//! Clap CLI definitions for the `keeper` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// keeper -- a grumpy keeper of tasks and contacts.
///
/// Run without a subcommand for an interactive session. Type commands such
/// as `task todo read book` or `contact list`, and `bye` to leave.
#[derive(Parser, Debug)]
#[command(
    name = "keeper",
    about = "A grumpy keeper of tasks and contacts",
    long_about = "Manages to-dos, deadlines, events and contacts through a small command language, persisted to plain text files.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory holding the store files (default: $KEEPER_DATA_DIR or ./data).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Task store file, relative to the data directory unless absolute.
    #[arg(long = "tasks", global = true, value_name = "FILE")]
    pub task_file: Option<PathBuf>,

    /// Contact store file, relative to the data directory unless absolute.
    #[arg(long = "contacts", global = true, value_name = "FILE")]
    pub contact_file: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (welcome, farewell and prompt).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one command line and exit, e.g. `keeper exec task todo read book`.
    Exec(ExecArgs),

    /// Show where tasks and contacts are stored.
    Paths,

    /// Show or write the resolved configuration.
    Config(ConfigArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

/// Arguments for `keeper exec`.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// The command line, as separate words or one quoted string.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl ExecArgs {
    /// The words joined back into one input line.
    pub fn line(&self) -> String {
        self.words.join(" ")
    }
}

/// Arguments for `keeper config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the resolved configuration to `<data_dir>/keeper.yaml`.
    #[arg(long)]
    pub init: bool,
}

/// Arguments for `keeper completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
