//! Timestamp formats for user input, storage lines and display.

use chrono::NaiveDateTime;

use crate::error::{KeeperError, Result};

/// The input pattern shown to users in error messages.
pub const INPUT_PATTERN: &str = "d/M/yyyy HHmm";

/// Parse format. Day and month accept one or two digits.
const PARSE_FORMAT: &str = "%d/%m/%Y %H%M";

/// Storage lines are written zero-padded; [`PARSE_FORMAT`] reads them back.
const STORAGE_FORMAT: &str = "%d/%m/%Y %H%M";

/// Display form, e.g. `01 Jan 2026 12:00`.
const DISPLAY_FORMAT: &str = "%d %b %Y %H:%M";

/// Parses `d/M/yyyy HHmm` text, naming `field` in the error.
pub fn parse_timestamp(text: &str, field: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, PARSE_FORMAT)
        .map_err(|_| KeeperError::date_format(field, text))
}

/// Formats a timestamp for a storage line.
pub fn format_storage(ts: &NaiveDateTime) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

/// Formats a timestamp for display.
pub fn format_display(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}
