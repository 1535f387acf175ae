//! High score stores
//!
//! - `MemoryStore`: in-process, for tests and headless runs
//! - `JsonFileStore`: native, small JSON document written via temp file
//! - `LocalStorageStore`: browser LocalStorage, plain integer string

use std::cell::Cell;
use std::rc::Rc;

use crate::error::StoreError;
use crate::highscores::HighScoreStore;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Volatile store; clones of [`MemoryStore::handle`] observe saves
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<Cell<Option<u64>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u64) -> Self {
        Self {
            value: Rc::new(Cell::new(Some(score))),
        }
    }

    /// Shared view of the stored value
    pub fn handle(&self) -> Rc<Cell<Option<u64>>> {
        Rc::clone(&self.value)
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        Ok(self.value.get())
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        self.value.set(Some(score));
        Ok(())
    }
}

/// Parse the plain-integer format the browser build stores
pub fn parse_score(raw: &str) -> Result<u64, StoreError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| StoreError::Malformed(raw.to_string()))
}
