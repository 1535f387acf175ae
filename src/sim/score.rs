//! Score accumulation and the difficulty curve
//!
//! The score is a real-valued accumulator; everything outside the
//! simulation (display, high score comparison, persistence) sees only the
//! floored integer from [`ScoreModel::floored`].

use serde::{Deserialize, Serialize};

use crate::consts::{
    BASE_SPAWN_INTERVAL, DIFFICULTY_RAMP_SECS, ITEM_BONUS, MIN_SPAWN_INTERVAL, PASS_BONUS,
    SPAWN_INTERVAL_SLOPE, SURVIVAL_SCORE_RATE,
};

/// Difficulty after `survival_time` seconds: `1 + t / 25`
#[inline]
pub fn difficulty_at(survival_time: f32) -> f32 {
    1.0 + survival_time / DIFFICULTY_RAMP_SECS
}

/// Obstacle spawn interval for a difficulty: `max(0.28, 0.9 - d * 0.14)`
#[inline]
pub fn spawn_interval(difficulty: f32) -> f32 {
    (BASE_SPAWN_INTERVAL - difficulty * SPAWN_INTERVAL_SLOPE).max(MIN_SPAWN_INTERVAL)
}

/// Run score and survival clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreModel {
    points: f32,
    survival_time: f32,
}

impl ScoreModel {
    /// Accrue survival time and its score
    pub fn survive(&mut self, dt: f32) {
        self.survival_time += dt;
        self.points += dt * SURVIVAL_SCORE_RATE;
    }

    /// Award the bonus for `count` obstacles leaving the field
    pub fn obstacles_passed(&mut self, count: u32) {
        self.points += count as f32 * PASS_BONUS;
    }

    pub fn item_collected(&mut self) {
        self.points += ITEM_BONUS;
    }

    /// Raw accumulator
    #[inline]
    pub fn points(&self) -> f32 {
        self.points
    }

    /// Integer score shown to the player and compared against the high score
    #[inline]
    pub fn floored(&self) -> u64 {
        self.points.max(0.0).floor() as u64
    }

    #[inline]
    pub fn survival_time(&self) -> f32 {
        self.survival_time
    }

    /// Recomputed on every call, never cached
    #[inline]
    pub fn difficulty(&self) -> f32 {
        difficulty_at(self.survival_time)
    }
}
