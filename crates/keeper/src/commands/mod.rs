//! Command handlers, one module per subcommand.

pub mod completion;
pub mod config_cmd;
pub mod exec;
pub mod paths;
pub mod repl;
