//! Terminal styling for the keeper assistant.
//!
//! Provides color detection and the small set of styles the session uses
//! for responses, warnings and errors.

pub mod styles;
pub mod terminal;
