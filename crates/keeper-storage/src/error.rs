//! Storage error types.

use keeper_core::KeeperError;

/// Errors that can occur while reading or writing a store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying file could not be read, written or moved.
    #[error("could not access {path}: {source}")]
    Io {
        /// The store location.
        path: String,
        /// The I/O failure.
        source: std::io::Error,
    },

    /// A line in the store is not a valid record.
    #[error("corrupted storage in {path} at line {line}: {reason} (\"{content}\")")]
    Corrupted {
        /// The store location.
        path: String,
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
        /// Why the line was rejected.
        reason: String,
    },
}

/// Convenience alias used throughout the storage crate.
pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    // -- Constructors --------------------------------------------------------

    /// Creates a [`StorageError::Io`] for the given location.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    // -- Predicates ----------------------------------------------------------

    /// Returns `true` if this is a [`StorageError::Corrupted`].
    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::Corrupted { .. })
    }
}

impl From<StorageError> for KeeperError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io { path, source } => KeeperError::StorageFailure {
                path,
                reason: source.to_string(),
            },
            StorageError::Corrupted {
                path,
                line,
                content,
                reason,
            } => KeeperError::CorruptedStorage {
                path,
                line,
                reason: format!("{reason} (\"{content}\")"),
            },
        }
    }
}
