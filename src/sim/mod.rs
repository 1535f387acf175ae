//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Caller-driven, single-threaded, one `tick` per frame
//! - Randomness only through [`RandomSource`], so harnesses can script it
//! - Presentation reads state and per-tick [`GameEvent`]s

pub mod collision;
pub mod input;
pub mod particles;
pub mod rng;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{circle_circle_collide, circle_rect_collide};
pub use input::{Direction, InputMapper, InputMode};
pub use particles::{BurstColor, Particle, ParticlePool};
pub use rng::{RandomSource, ScriptedRng, entropy_rng, seeded_rng};
pub use score::{ScoreModel, difficulty_at, spawn_interval};
pub use spawner::{Spawner, cluster_chance};
pub use state::{Agent, BonusItem, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{effective_dt, idle, tick};
