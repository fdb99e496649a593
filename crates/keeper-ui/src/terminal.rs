//! Terminal detection utilities.

use std::env;
use std::sync::atomic::{AtomicU8, Ordering};

/// How color was requested, before looking at the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Decide from the environment and TTY status.
    #[default]
    Auto,
    /// Always emit ANSI colors.
    Always,
    /// Never emit ANSI colors.
    Never,
}

static COLOR_CHOICE: AtomicU8 = AtomicU8::new(0);

impl ColorChoice {
    fn to_u8(self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Always => 1,
            Self::Never => 2,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Always,
            2 => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Sets the process-wide color choice. Call once at startup.
pub fn set_color_choice(choice: ColorChoice) {
    COLOR_CHOICE.store(choice.to_u8(), Ordering::Relaxed);
}

/// Returns the process-wide color choice.
pub fn color_choice() -> ColorChoice {
    ColorChoice::from_u8(COLOR_CHOICE.load(Ordering::Relaxed))
}

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Returns `true` if stdin is connected to a terminal (TTY).
pub fn stdin_is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdin())
}

/// Determines if ANSI color codes should be used.
///
/// An explicit [`ColorChoice`] wins. Under [`ColorChoice::Auto`]:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    match color_choice() {
        ColorChoice::Always => return true,
        ColorChoice::Never => return false,
        ColorChoice::Auto => {}
    }

    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }

    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }

    is_tty()
}
