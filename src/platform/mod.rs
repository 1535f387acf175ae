//! Platform abstraction layer
//!
//! Picks the high score backend per target and, on wasm32, exposes the game
//! to a JavaScript host.

use crate::highscores::HighScoreStore;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Environment variable overriding the native high score file
#[cfg(not(target_arch = "wasm32"))]
pub const HIGHSCORE_PATH_ENV: &str = "NEON_DODGE_HIGHSCORE";

/// Default native high score file, relative to the working directory
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_HIGHSCORE_FILE: &str = "neon_dodge_high.json";

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn HighScoreStore> {
    Box::new(crate::persistence::LocalStorageStore)
}

/// JSON file, path from [`HIGHSCORE_PATH_ENV`] or [`DEFAULT_HIGHSCORE_FILE`]
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn HighScoreStore> {
    let path = std::env::var(HIGHSCORE_PATH_ENV)
        .unwrap_or_else(|_| DEFAULT_HIGHSCORE_FILE.to_string());
    log::info!("High scores stored at {}", path);
    Box::new(crate::persistence::JsonFileStore::new(path))
}
