//! Durable storage slot abstraction
//!
//! A slot is a string-valued key/value location, the way browser local
//! storage is. The store serializes its whole collection into one key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::{ExError, ExErrorKind, Result};

/// Fixed key under which the collection is stored
pub const STORAGE_KEY: &str = "snippet-storage";

/// Durable key/value slot
pub trait SnippetSlot: Send {
    /// Read the raw payload stored under `key`, `None` if never written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the payload stored under `key`
    fn write(&mut self, key: &str, payload: &str) -> Result<()>;
}

/// In-process slot
///
/// Clones share the same entries, so a test can drop a store and reopen a
/// new one over a clone of the slot to simulate a restart.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with a raw payload under `key`
    pub fn with_entry(key: &str, payload: &str) -> Self {
        let slot = Self::new();
        if let Ok(mut entries) = slot.entries.lock() {
            entries.insert(key.to_string(), payload.to_string());
        }
        slot
    }

    /// Raw payload currently stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }
}

fn poisoned(op: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message("memory slot lock poisoned")
}

impl SnippetSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| poisoned("read_slot"))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned("write_slot"))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
