//! Filesystem-backed slots
//!
//! - One `<key>.json` file per key under a data directory
//! - Atomic temp→rename writes

mod atomic;
mod file_slot;

pub use file_slot::FileSlot;
