//! Snippy Store - durable local storage for the snippet collection
//!
//! Provides:
//! - `FileSlot`: one JSON file per slot key, written atomically
//! - `open_store`: rehydrate a `SnippetStore` from a data directory

pub mod errors;
pub mod slot;

use std::path::PathBuf;

use snippy_core::{ClockIdGenerator, IdGenerator, SnippetStore};

pub use errors::Result;
pub use slot::FileSlot;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = ".snippy";

/// Open the store kept under `data_dir` with clock-derived ids
///
/// Never fails: an absent or corrupt file yields an empty store.
pub fn open_store(data_dir: impl Into<PathBuf>) -> SnippetStore {
    open_store_with(data_dir, Box::new(ClockIdGenerator))
}

/// Open the store kept under `data_dir` with a caller-chosen id generator
pub fn open_store_with(data_dir: impl Into<PathBuf>, id_gen: Box<dyn IdGenerator>) -> SnippetStore {
    SnippetStore::open(Box::new(FileSlot::new(data_dir)), id_gen)
}
