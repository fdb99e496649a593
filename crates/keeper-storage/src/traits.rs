//! The raw line-store contract.

use crate::error::Result;

/// Reads and writes the raw lines of one named store.
///
/// Implementations know nothing about records; [`RecordStore`] layers the
/// line codec on top.
///
/// [`RecordStore`]: crate::record_store::RecordStore
pub trait LineStore {
    /// Human-readable location, used in messages and errors.
    fn location(&self) -> String;

    /// Reads every line. Returns `Ok(None)` if the store does not exist yet.
    fn read_lines(&self) -> Result<Option<Vec<String>>>;

    /// Replaces the store's contents with `lines`.
    fn write_lines(&self, lines: &[String]) -> Result<()>;

    /// Moves the current contents aside so a later write cannot clobber
    /// them. Returns where they went, or `None` if the backend keeps nothing.
    fn quarantine(&self) -> Result<Option<String>> {
        Ok(None)
    }
}
