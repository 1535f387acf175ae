//! Browser LocalStorage store

use web_sys::Storage;

use super::parse_score;
use crate::error::StoreError;
use crate::highscores::HighScoreStore;

/// Key shared with earlier browser builds
pub const STORAGE_KEY: &str = "dodge_high";

/// High score as a plain integer string under [`STORAGE_KEY`]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not accessible".into()))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load(&mut self) -> Result<Option<u64>, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => parse_score(&raw).map(Some),
            Ok(None) => Ok(None),
            Err(_) => Err(StoreError::Unavailable("LocalStorage read failed".into())),
        }
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(STORAGE_KEY, &score.to_string())
            .map_err(|_| StoreError::Unavailable("LocalStorage write failed".into()))
    }
}
