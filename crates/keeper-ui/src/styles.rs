//! Ayu color theme and styling functions for keeper output.
//!
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Only responses that need attention get color: errors are red, storage
//! warnings yellow. Listings stay in the standard text color.

use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

// General icons
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_FAIL: &str = "\u{2716}"; // ✖

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

fn paint(s: &str, rgb: (u8, u8, u8), enabled: bool) -> String {
    if enabled {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    paint(s, rgb, supports_color())
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

/// Renders text with warning (yellow) styling.
pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

/// Renders text with fail (red) styling.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text with accent (blue) styling.
pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

// ---------------------------------------------------------------------------
// Message renderers
// ---------------------------------------------------------------------------

/// `✖ message` in red.
pub fn render_error_line(message: &str) -> String {
    render_fail(&format!("{ICON_FAIL} {message}"))
}

/// `⚠ message` in yellow.
pub fn render_warning_line(message: &str) -> String {
    render_warn(&format!("{ICON_WARN} {message}"))
}
