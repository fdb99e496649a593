//! Output formatting helpers for the `keeper` CLI.
//!
//! Responses go to stdout. Errors and warnings go to stderr so that a
//! script reading stdout only sees what the command produced.

use std::io::{self, Write};

use keeper_core::KeeperError;
use keeper_ui::styles::{render_error_line, render_warning_line};
use serde::Serialize;

use crate::messages;
use crate::session::Response;

/// JSON shape of one executed command.
#[derive(Debug, Serialize)]
pub struct ResponseView {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ResponseView {
    pub fn from_result(result: &Result<Response, KeeperError>) -> Self {
        match result {
            Ok(response) => Self {
                ok: true,
                response: Some(response.text.clone()),
                error: None,
                warnings: response.warnings.iter().map(ToString::to_string).collect(),
            },
            Err(err) => Self {
                ok: false,
                response: None,
                error: Some(err.to_string()),
                warnings: Vec::new(),
            },
        }
    }
}

/// Print a value as pretty-printed JSON to stdout.
pub fn output_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    // Ignore broken pipe errors (e.g., piped to `head`)
    let _ = writeln!(handle, "{}", json);
    Ok(())
}

/// Prints a response and its warnings.
pub fn print_response(response: &Response) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", response.text);
    drop(handle);
    print_warnings(&response.warnings);
}

/// Prints storage warnings to stderr.
pub fn print_warnings(warnings: &[KeeperError]) {
    for warning in warnings {
        print_warning(&warning.to_string());
    }
}

pub fn print_warning(message: &str) {
    eprintln!("{}", render_warning_line(message));
}

/// Prints a command error to stderr.
pub fn print_error(err: &KeeperError) {
    eprintln!(
        "{}",
        render_error_line(&format!("{} {}", messages::ERROR_PREFIX, err))
    );
}
