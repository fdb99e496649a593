//! The capability every persisted record shares.

use crate::line::LineError;

/// A record that can be listed, searched and stored as one text line.
///
/// Implemented by [`Task`](crate::task::Task) and
/// [`Contact`](crate::contact::Contact).
pub trait Record: Clone + std::fmt::Debug {
    /// Singular noun used in messages ("task", "contact").
    const NOUN: &'static str;

    /// Message shown when a listing has nothing to show.
    const EMPTY_LISTING: &'static str;

    /// Human-readable one-line form.
    fn render(&self) -> String;

    /// Storage line form, without a trailing newline.
    fn to_line(&self) -> String;

    /// Rebuilds a record from a storage line.
    fn from_line(line: &str) -> Result<Self, LineError>;

    /// Case-insensitive substring match on the record's searchable text.
    ///
    /// `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool;
}
