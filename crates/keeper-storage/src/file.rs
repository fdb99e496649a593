//! [`FileStore`] -- plain-text file backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, StorageError};
use crate::traits::LineStore;

/// Suffix appended to a store file when it is moved aside.
pub const QUARANTINE_SUFFIX: &str = ".corrupted";

/// A store backed by one text file, one record per line.
///
/// Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens a store at `path`, creating its parent directory if missing.
    ///
    /// The file itself is not created until the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "opening file store");
        let store = Self { path };
        store.ensure_parent()?;
        Ok(store)
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the file is renamed to by [`LineStore::quarantine`].
    pub fn quarantine_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(QUARANTINE_SUFFIX);
        PathBuf::from(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::io(self.location(), source)
    }

    /// Splits raw file content into lines, rejecting any line that is not
    /// valid UTF-8 as corrupted.
    fn decode_lines(&self, bytes: &[u8]) -> Result<Vec<String>> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        body.split(|&b| b == b'\n')
            .enumerate()
            .map(|(i, raw)| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                String::from_utf8(raw.to_vec()).map_err(|_| StorageError::Corrupted {
                    path: self.location(),
                    line: i + 1,
                    content: String::from_utf8_lossy(raw).into_owned(),
                    reason: "line is not valid UTF-8".to_owned(),
                })
            })
            .collect()
    }
}

impl LineStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<Option<Vec<String>>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let lines = self.decode_lines(&bytes)?;
                debug!(path = ?self.path, count = lines.len(), "read store file");
                Ok(Some(lines))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "store file does not exist yet");
                Ok(None)
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write_lines(&self, lines: &[String]) -> Result<()> {
        self.ensure_parent()?;
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        debug!(path = ?self.path, count = lines.len(), "wrote store file");
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| self.io_error(e))?;
        info!(from = ?self.path, to = ?target, "moved corrupted store aside");
        Ok(Some(target.display().to_string()))
    }
}
