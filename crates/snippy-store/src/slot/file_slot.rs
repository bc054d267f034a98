use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use snippy_core::errors::Result as CoreResult;
use snippy_core::SnippetSlot;

use crate::errors::{invalid_key, io_error, not_utf8, Result};
use crate::slot::atomic::atomic_write;

/// Slot persisted as `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`
    ///
    /// Keys are restricted to a single path component.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !valid {
            return Err(invalid_key(key));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| not_utf8(&path)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read_slot", &path, e)),
        }
    }
}

impl SnippetSlot for FileSlot {
    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.read_raw(key)?)
    }

    fn write(&mut self, key: &str, payload: &str) -> CoreResult<()> {
        let path = self.path_for(key)?;
        atomic_write(&path, payload.as_bytes())?;
        tracing::trace!(op = "write_slot", path = %path.display(), bytes = payload.len());
        Ok(())
    }
}
