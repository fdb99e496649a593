//! Error taxonomy for the keeper engine.
//!
//! Every failure the interpreter can hit is one of these variants. None of
//! them is fatal: the session loop renders the message and keeps reading.

use thiserror::Error;

use crate::datetime::INPUT_PATTERN;

/// Errors produced while parsing, executing or persisting a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeeperError {
    // ===== Grammar =====
    /// The first word is not a known category.
    #[error("unknown category \"{0}\": only 'task' and 'contact' exist")]
    UnknownCategory(String),

    /// A category was given without a command after it.
    #[error("'{category}' needs a command, e.g. '{category} list'")]
    MissingCommand { category: String },

    /// The command word is not valid for the category.
    #[error("unknown command \"{command}\" for '{category}' (try: {expected})")]
    UnknownCommand {
        category: String,
        command: String,
        expected: String,
    },

    // ===== Arguments =====
    /// A command that needs arguments was given none.
    #[error("'{command}' needs arguments. Format: {usage}")]
    MissingArguments { command: String, usage: String },

    /// The item number is not a positive whole number.
    #[error("\"{0}\" is not a valid item number, use a positive whole number")]
    InvalidIndex(String),

    /// A deadline without its ` /by ` tag.
    #[error("a deadline needs a ' /by ' tag. Format: deadline DESCRIPTION /by {}", INPUT_PATTERN)]
    MissingByTag,

    /// An event without ` /from ` and ` /to ` tags.
    #[error(
        "an event needs ' /from ' and ' /to ' tags. Format: event DESCRIPTION /from {} /to {}",
        INPUT_PATTERN,
        INPUT_PATTERN
    )]
    MissingEventTags,

    /// A timestamp that does not follow `d/M/yyyy HHmm`.
    #[error("invalid {field} date-time \"{value}\", use {}", INPUT_PATTERN)]
    InvalidDateFormat { field: String, value: String },

    /// An event that ends before it starts.
    #[error("an event cannot end before it starts")]
    InvalidDateRange,

    /// The `/name`, `/phone` and `/email` markers are missing or out of order.
    #[error("contact details are incomplete. Format: contact add /name NAME /phone PHONE /email EMAIL")]
    MissingContactTags,

    /// A contact field failed validation.
    #[error("invalid {field} \"{value}\": {reason}")]
    InvalidContactField {
        field: String,
        value: String,
        reason: String,
    },

    /// A record invariant was violated at construction time.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ===== Execution =====
    /// The 0-based `index` is outside the collection.
    #[error("{noun} {} does not exist, the list has {size} {noun}(s)", .index + 1)]
    IndexOutOfRange {
        noun: String,
        index: usize,
        size: usize,
    },

    /// Marking a done task or unmarking an undone one.
    #[error("task {} is already {state}", .index + 1)]
    AlreadyInState { index: usize, state: String },

    // ===== Storage =====
    /// A store file holds a line that is not a valid record.
    #[error("corrupted storage in {path} at line {line}: {reason}")]
    CorruptedStorage {
        path: String,
        line: usize,
        reason: String,
    },

    /// Reading or writing a store file failed.
    #[error("could not access {path}: {reason}")]
    StorageFailure { path: String, reason: String },
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, KeeperError>;

impl KeeperError {
    /// Creates a [`KeeperError::InvalidContactField`].
    pub fn contact_field(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidContactField {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`KeeperError::InvalidDateFormat`].
    pub fn date_format(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns `true` for grammar, argument and execution-time rejections.
    ///
    /// None of these ever mutate a collection.
    pub fn is_user_error(&self) -> bool {
        !self.is_storage_error()
    }

    /// Returns `true` for I/O and data-integrity failures.
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            Self::CorruptedStorage { .. } | Self::StorageFailure { .. }
        )
    }
}
