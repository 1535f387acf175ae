//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::InputMapper;
use super::particles::ParticlePool;
use super::score::ScoreModel;
use super::spawner::Spawner;
use crate::clamp;
use crate::config::GameConfig;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; only the idle bob moves the agent
    NotStarted,
    /// Active gameplay
    Running,
    /// Simulation suspended, state readable
    Paused,
    /// Run ended by an obstacle hit
    Over,
}

/// The player-controlled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub pos: Vec2,
    pub radius: f32,
    /// Horizontal velocity (px/s)
    pub vel_x: f32,
}

impl Agent {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
            vel_x: 0.0,
        }
    }

    /// Keep the whole circle inside `[0, field_width]`
    #[inline]
    pub fn clamp_to_field(&mut self, field_width: f32) {
        self.pos.x = clamp(self.pos.x, self.radius, field_width - self.radius);
    }
}

/// A falling rectangle; touching it ends the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal center
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Downward speed (px/s)
    pub speed: f32,
    /// Presentation hue in degrees
    pub hue: u16,
}

impl Obstacle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }
}

/// A falling star worth bonus points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusItem {
    pub pos: Vec2,
    /// Downward speed (px/s)
    pub speed: f32,
}

/// Things that happened during a tick, for presentation to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Obstacles spawned this tick (`count > 1` for a cluster)
    ObstacleSpawned { count: u32 },
    ItemSpawned { x: f32 },
    /// An obstacle left the bottom edge unclaimed
    ObstaclePassed,
    ItemCollected { x: f32, y: f32 },
    /// Run over; `score` is the floored final score
    AgentDied { score: u64 },
    NewHighScore { score: u64 },
}

/// Idle bob before the first start
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct IdleBob {
    pub phase: f32,
    pub timer: f32,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub agent: Agent,
    /// Live obstacles, spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live bonus items, spawn order
    pub items: Vec<BonusItem>,
    pub particles: ParticlePool,
    pub score: ScoreModel,
    pub spawner: Spawner,
    pub input: InputMapper,
    pub idle: IdleBob,
    /// Events from the latest tick
    pub events: Vec<GameEvent>,
    pub field_width: f32,
    pub field_height: f32,
    /// Agent spawn point
    home: (f32, f32),
}

impl GameState {
    /// Fresh state on the title screen. `config` must already be validated.
    pub fn new(config: &GameConfig) -> Self {
        let home = config.agent_home();
        Self {
            phase: GamePhase::NotStarted,
            agent: Agent::new(home.0, home.1, config.agent_radius),
            obstacles: Vec::new(),
            items: Vec::new(),
            particles: ParticlePool::new(config.particle_capacity),
            score: ScoreModel::default(),
            spawner: Spawner::default(),
            input: InputMapper::default(),
            idle: IdleBob::default(),
            events: Vec::new(),
            field_width: config.field_width,
            field_height: config.field_height,
            home,
        }
    }

    /// Full reset of agent, input, entities, particles, timers and score.
    /// Held keys or pointers from the previous run are forgotten.
    pub fn reset(&mut self) {
        self.agent.pos = Vec2::new(self.home.0, self.home.1);
        self.agent.vel_x = 0.0;
        self.input = InputMapper::default();
        self.obstacles.clear();
        self.items.clear();
        self.particles.clear();
        self.score = ScoreModel::default();
        self.spawner.reset();
        self.events.clear();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Current difficulty, derived from survival time
    #[inline]
    pub fn difficulty(&self) -> f32 {
        self.score.difficulty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::InputMode;

    #[test]
    fn test_new_state_on_title() {
        let config = GameConfig::with_field(400.0, 600.0);
        let state = GameState::new(&config);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.agent.pos, Vec2::new(200.0, 510.0));
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_agent_clamp() {
        let mut agent = Agent::new(-50.0, 0.0, 20.0);
        agent.clamp_to_field(400.0);
        assert_eq!(agent.pos.x, 20.0);
        agent.pos.x = 999.0;
        agent.clamp_to_field(400.0);
        assert_eq!(agent.pos.x, 380.0);
    }

    #[test]
    fn test_reset_restores_home() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.agent.pos.x = 33.0;
        state.agent.vel_x = 120.0;
        state.input.set_pointer(50.0, true);
        state.items.push(BonusItem {
            pos: Vec2::ZERO,
            speed: 100.0,
        });
        state.reset();
        assert_eq!(state.agent.pos.x, config.field_width / 2.0);
        assert_eq!(state.agent.vel_x, 0.0);
        assert_eq!(state.input.mode, InputMode::default());
        assert!(state.items.is_empty());
    }
}
