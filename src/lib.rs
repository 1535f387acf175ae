//! Neon Dodge - a falling-block dodge arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (spawning, kinematics, collisions, scoring)
//! - `game`: Owned game instance with the host-facing command surface
//! - `highscores`: High score tracking on top of a pluggable store
//! - `persistence`: High score stores (memory, JSON file, LocalStorage)
//! - `platform`: Browser/native host glue
//! - `config`: Field dimensions and capacities injected at construction

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use game::Game;
pub use highscores::{HighScore, HighScoreStore};

/// Gameplay constants
pub mod consts {
    /// Largest simulation step applied per tick (seconds)
    pub const MAX_DT: f32 = 0.05;

    /// Agent top horizontal speed (7.5 px/frame at 60 Hz)
    pub const AGENT_TOP_SPEED: f32 = 7.5 * 60.0;
    /// Velocity decay rate when no key is held
    pub const AGENT_FRICTION: f32 = 10.0;
    /// Pointer pursuit gain: desired velocity per pixel of offset
    pub const POINTER_GAIN: f32 = 10.0;
    /// Pointer pursuit blend rate
    pub const POINTER_BLEND: f32 = 12.0;

    /// Score per second survived
    pub const SURVIVAL_SCORE_RATE: f32 = 1.7;
    /// Score per obstacle leaving the bottom edge
    pub const PASS_BONUS: f32 = 0.6;
    /// Score per bonus item collected
    pub const ITEM_BONUS: f32 = 7.0;

    /// Seconds of survival per +1 difficulty
    pub const DIFFICULTY_RAMP_SECS: f32 = 25.0;
    pub const BASE_SPAWN_INTERVAL: f32 = 0.9;
    pub const SPAWN_INTERVAL_SLOPE: f32 = 0.14;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.28;
    pub const CLUSTER_CHANCE_SLOPE: f32 = 0.06;
    pub const MAX_CLUSTER_CHANCE: f32 = 0.35;

    /// Bonus item timer period (seconds)
    pub const ITEM_INTERVAL: f32 = 3.0;
    /// Probability an item actually spawns when the timer fires
    pub const ITEM_CHANCE: f32 = 0.6;
    /// Bonus item collision radius
    pub const ITEM_RADIUS: f32 = 8.0;
    /// Items spawn this far above the field
    pub const ITEM_SPAWN_Y: f32 = -30.0;

    /// Obstacles are removed this far below the field
    pub const OBSTACLE_EXIT_MARGIN: f32 = 50.0;
    /// Items are removed this far below the field
    pub const ITEM_EXIT_MARGIN: f32 = 20.0;

    /// Particle gravity (px/s²)
    pub const PARTICLE_GRAVITY: f32 = 60.0;
    pub const DEATH_BURST_COUNT: usize = 40;
    pub const DEATH_BURST_SPREAD: f32 = 220.0;
    pub const PICKUP_BURST_COUNT: usize = 24;
    pub const PICKUP_BURST_SPREAD: f32 = 160.0;

    /// Idle bob step period before the game starts (seconds)
    pub const IDLE_STEP_SECS: f32 = 0.03;
    pub const IDLE_PHASE_STEP: f32 = 0.04;
    pub const IDLE_AMPLITUDE: f32 = 0.6;
}

/// Clamp `v` into `[lo, hi]`; when `lo > hi`, `lo` wins
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}
