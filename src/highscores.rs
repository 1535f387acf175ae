//! High score tracking
//!
//! The game decides *when* a new high score happened; a [`HighScoreStore`]
//! decides how it is kept. Store failures are logged and otherwise ignored
//! so a missing or broken backend never stops a run.

use crate::error::StoreError;

/// Key-value backend holding a single integer high score
pub trait HighScoreStore {
    /// Stored score, `None` if nothing has been saved yet
    fn load(&mut self) -> Result<Option<u64>, StoreError>;
    fn save(&mut self, score: u64) -> Result<(), StoreError>;
}

/// Best floored score so far plus the store that persists it
pub struct HighScore {
    best: u64,
    store: Box<dyn HighScoreStore>,
}

impl std::fmt::Debug for HighScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighScore").field("best", &self.best).finish()
    }
}

impl HighScore {
    /// Read the stored score; an unreadable store starts from 0
    pub fn load(mut store: Box<dyn HighScoreStore>) -> Self {
        let best = match store.load() {
            Ok(Some(score)) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("High score store unreadable, starting from 0: {}", e);
                0
            }
        };
        Self { best, store }
    }

    #[inline]
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Whether `score` would beat the current best
    #[inline]
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run's floored score. Returns true if it became the
    /// new best; persistence failures do not change that.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        match self.store.save(score) {
            Ok(()) => log::info!("New high score {} saved", score),
            Err(e) => log::warn!("New high score {} not persisted: {}", score, e),
        }
        true
    }
}
