//! [`MemoryStore`] -- in-memory backend, useful for tests.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use crate::error::{Result, StorageError};
use crate::traits::LineStore;

#[derive(Debug, Default)]
struct Inner {
    lines: RefCell<Option<Vec<String>>>,
    quarantined: RefCell<Option<Vec<String>>>,
    fail_writes: Cell<bool>,
}

/// A store that keeps its lines in memory.
///
/// Clones share the same contents, so a test can keep a handle for
/// inspection after handing the store to a [`RecordStore`].
///
/// [`RecordStore`]: crate::record_store::RecordStore
#[derive(Debug, Clone)]
pub struct MemoryStore {
    name: String,
    inner: Rc<Inner>,
}

impl MemoryStore {
    /// Creates a store that does not exist yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Rc::default(),
        }
    }

    /// Creates a store pre-filled with `lines`.
    pub fn with_lines<S: Into<String>>(
        name: impl Into<String>,
        lines: impl IntoIterator<Item = S>,
    ) -> Self {
        let store = Self::new(name);
        *store.inner.lines.borrow_mut() = Some(lines.into_iter().map(Into::into).collect());
        store
    }

    /// Current contents, or `None` if nothing was ever written.
    pub fn lines(&self) -> Option<Vec<String>> {
        self.inner.lines.borrow().clone()
    }

    /// Contents moved aside by the last quarantine.
    pub fn quarantined(&self) -> Option<Vec<String>> {
        self.inner.quarantined.borrow().clone()
    }

    /// Makes every following write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }
}

impl LineStore for MemoryStore {
    fn location(&self) -> String {
        format!("memory:{}", self.name)
    }

    fn read_lines(&self) -> Result<Option<Vec<String>>> {
        Ok(self.lines())
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        if self.inner.fail_writes.get() {
            return Err(StorageError::io(
                self.location(),
                io::Error::other("writes disabled"),
            ));
        }
        *self.inner.lines.borrow_mut() = Some(lines.to_vec());
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<String>> {
        let Some(lines) = self.inner.lines.borrow_mut().take() else {
            return Ok(None);
        };
        *self.inner.quarantined.borrow_mut() = Some(lines);
        Ok(Some(format!("{}.corrupted", self.location())))
    }
}
