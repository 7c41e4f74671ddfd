// src/store/mod.rs
//! # Persisted collection
//!
//! All captured records live under one key (`scoutData`) of a small
//! key/value store, as a single JSON array. Writers follow one discipline:
//! read the whole collection, compute in memory, write the whole collection.
//!
//! - `FileStore` keeps one `<key>.json` per key in a directory.
//! - `MemoryStore` is the in-process variant used by tests.
//! - `dedup` holds the "save only what's new" writer.

use serde_json::Value;

use crate::config::consts::STORAGE_KEY;
use crate::error::Result;
use crate::model::ScoutRecord;

mod dedup;
mod file;
mod memory;

pub use dedup::{is_duplicate, save_new, select_new, SaveOutcome};
pub use file::FileStore;
pub use memory::MemoryStore;

pub trait KvStore {
    /// Value under `key`, `None` if the key was never set (or was removed).
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Current collection; empty if nothing was ever saved.
pub fn load_collection(store: &dyn KvStore) -> Result<Vec<ScoutRecord>> {
    match store.get(STORAGE_KEY)? {
        Some(v) => Ok(serde_json::from_value(v)?),
        None => Ok(Vec::new()),
    }
}

pub fn save_collection(store: &mut dyn KvStore, records: &[ScoutRecord]) -> Result<()> {
    let v = serde_json::to_value(records)?;
    store.set(STORAGE_KEY, v)
}

pub fn clear_collection(store: &mut dyn KvStore) -> Result<()> {
    store.remove(STORAGE_KEY)
}
