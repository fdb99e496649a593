//! [`RecordStore`] -- typed load/save on top of a [`LineStore`].

use std::marker::PhantomData;
use std::path::Path;

use keeper_core::line::{decode_all, encode_all};
use keeper_core::{Collection, KeeperError, Record};
use tracing::{debug, info, warn};

use crate::error::{Result, StorageError};
use crate::file::FileStore;
use crate::traits::LineStore;

/// Result of a load that never fails.
#[derive(Debug)]
pub struct LoadOutcome<R> {
    /// The loaded collection; empty if the load failed.
    pub collection: Collection<R>,
    /// Why the collection is empty, if the load failed.
    pub warning: Option<KeeperError>,
    /// Where a corrupted store was moved to, if it was.
    pub quarantined_to: Option<String>,
}

/// Persists one collection of `R` records through a line store.
pub struct RecordStore<R> {
    backend: Box<dyn LineStore>,
    _records: PhantomData<fn() -> R>,
}

impl<R: Record> RecordStore<R> {
    /// Wraps an existing line store.
    pub fn new(backend: impl LineStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            _records: PhantomData,
        }
    }

    /// Opens a file-backed store at `path`.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(FileStore::open(path)?))
    }

    /// Human-readable location of the backing store.
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Loads every record, aborting on the first corrupted line.
    ///
    /// A store that does not exist yet loads as an empty collection.
    pub fn load(&self) -> Result<Collection<R>> {
        let Some(lines) = self.backend.read_lines()? else {
            return Ok(Collection::new());
        };
        let records = decode_all::<R, _>(&lines).map_err(|e| StorageError::Corrupted {
            path: self.location(),
            line: e.line,
            content: e.content,
            reason: e.source.to_string(),
        })?;
        debug!(
            location = %self.location(),
            count = records.len(),
            "loaded {}s",
            R::NOUN
        );
        Ok(Collection::from_records(records))
    }

    /// Loads the collection, falling back to an empty one on any failure.
    ///
    /// With `quarantine` set, a corrupted store is moved aside so the next
    /// save does not overwrite the data that failed to load.
    pub fn load_or_recover(&self, quarantine: bool) -> LoadOutcome<R> {
        let err = match self.load() {
            Ok(collection) => {
                return LoadOutcome {
                    collection,
                    warning: None,
                    quarantined_to: None,
                };
            }
            Err(err) => err,
        };

        warn!(location = %self.location(), error = %err, "starting with an empty collection");
        let mut quarantined_to = None;
        if quarantine && err.is_corrupted() {
            match self.backend.quarantine() {
                Ok(moved) => quarantined_to = moved,
                Err(e) => warn!(error = %e, "could not move corrupted store aside"),
            }
        }
        LoadOutcome {
            collection: Collection::new(),
            warning: Some(err.into()),
            quarantined_to,
        }
    }

    /// Writes every record, replacing the store's contents.
    pub fn save(&self, collection: &Collection<R>) -> Result<()> {
        self.backend.write_lines(&encode_all(collection.all()))?;
        info!(
            location = %self.location(),
            count = collection.len(),
            "saved {}s",
            R::NOUN
        );
        Ok(())
    }
}
