//! Storage backends for the keeper assistant.
//!
//! A [`LineStore`] reads and writes the raw lines of one named store; a
//! [`RecordStore`] turns those lines into a typed [`Collection`] and back.
//!
//! [`Collection`]: keeper_core::Collection

pub mod error;
pub mod file;
pub mod memory;
pub mod record_store;
pub mod traits;

// Re-exports for convenience.
pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record_store::{LoadOutcome, RecordStore};
pub use traits::LineStore;
