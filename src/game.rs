//! Owned game instance
//!
//! Wraps the simulation state, its random source and the high score behind
//! the commands a host (browser page, headless runner) issues each frame.

use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::highscores::{HighScore, HighScoreStore};
use crate::sim::{
    self, Agent, BonusItem, Direction, GameEvent, GamePhase, GameState, Obstacle, ParticlePool,
    RandomSource,
};

/// Read-only view of the game after a tick
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub agent: Agent,
    pub obstacles: &'a [Obstacle],
    pub items: &'a [BonusItem],
    pub particles: &'a ParticlePool,
    /// Floored score
    pub score: u64,
    pub high_score: u64,
    pub phase: GamePhase,
    pub over: bool,
    pub paused: bool,
    /// Events produced by the latest tick
    pub events: &'a [GameEvent],
}

/// A complete game: simulation, randomness and high score
#[derive(Debug)]
pub struct Game<R: RandomSource = Pcg32> {
    config: GameConfig,
    state: GameState,
    rng: R,
    high_score: HighScore,
}

impl Game<Pcg32> {
    /// New game with an entropy-seeded generator
    pub fn new(config: GameConfig, store: Box<dyn HighScoreStore>) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, sim::entropy_rng())
    }

    /// New game with a reproducible generator
    pub fn with_seed(
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, sim::seeded_rng(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// New game on the title screen using `rng` for all randomness
    pub fn with_rng(
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(Self {
            config,
            state,
            rng,
            high_score: HighScore::load(store),
        })
    }

    /// Reset everything and begin a run. Valid from any phase.
    pub fn start(&mut self) {
        self.state.reset();
        self.state.phase = GamePhase::Running;
        log::info!("Run started");
    }

    /// Flip Running/Paused. Returns false (and does nothing) in other phases.
    pub fn toggle_pause(&mut self) -> bool {
        self.state.phase = match self.state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            phase => {
                log::debug!("Pause toggle ignored in {:?}", phase);
                return false;
            }
        };
        true
    }

    /// Discrete left/right control. Ignored once the run is over.
    pub fn set_discrete_input(&mut self, direction: Direction) {
        if self.state.phase == GamePhase::Over {
            return;
        }
        self.state.input.set_discrete(direction, &mut self.state.agent);
    }

    /// Pointer-follow control: `active` while the pointer is held.
    /// Ignored once the run is over.
    pub fn set_pointer_target(&mut self, x: f32, active: bool) {
        if self.state.phase == GamePhase::Over {
            return;
        }
        self.state.input.set_pointer(x, active);
    }

    /// Advance one frame and return the resulting snapshot
    pub fn tick(&mut self, dt: f32) -> Snapshot<'_> {
        sim::tick(&mut self.state, &mut self.rng, dt);

        let died = self.state.events.iter().find_map(|e| match e {
            GameEvent::AgentDied { score } => Some(*score),
            _ => None,
        });
        if let Some(score) = died {
            if self.high_score.record(score) {
                self.state.events.push(GameEvent::NewHighScore { score });
            }
        }

        self.snapshot()
    }

    /// Title-screen animation; call from a timer while not started
    pub fn idle(&mut self, dt: f32) {
        sim::idle(&mut self.state, dt);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let state = &self.state;
        Snapshot {
            agent: state.agent,
            obstacles: &state.obstacles,
            items: &state.items,
            particles: &state.particles,
            score: state.score.floored(),
            high_score: self.high_score.best(),
            phase: state.phase,
            over: state.phase == GamePhase::Over,
            paused: state.phase == GamePhase::Paused,
            events: &state.events,
        }
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Turn obstacle/star spawning on or off; survives restarts
    pub fn set_spawning(&mut self, enabled: bool) {
        self.state.spawner.enabled = enabled;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for harnesses that stage entities by hand
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn game() -> Game {
        Game::with_seed(GameConfig::default(), Box::new(MemoryStore::new()), 7).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Game::with_seed(
            GameConfig::with_field(-1.0, 100.0),
            Box::new(MemoryStore::new()),
            1,
        );
        assert!(matches!(result, Err(ConfigError::FieldWidth(_))));
    }

    #[test]
    fn test_phase_transitions() {
        let mut game = game();
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(!game.toggle_pause());
        game.start();
        assert_eq!(game.phase(), GamePhase::Running);
        assert!(game.toggle_pause());
        assert_eq!(game.phase(), GamePhase::Paused);
        assert!(game.tick(0.016).paused);
        assert!(game.toggle_pause());
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_paused_tick_keeps_score() {
        let mut game = game();
        game.set_spawning(false);
        game.start();
        for _ in 0..30 {
            game.tick(0.05);
        }
        let before = game.state().score;
        game.toggle_pause();
        for _ in 0..30 {
            game.tick(0.05);
        }
        assert_eq!(game.state().score, before);
    }

    #[test]
    fn test_input_frozen_when_over() {
        let mut game = game();
        game.start();
        game.state_mut().phase = GamePhase::Over;
        game.set_discrete_input(Direction::Right);
        assert_eq!(game.state().agent.vel_x, 0.0);
        game.set_pointer_target(10.0, true);
        assert_eq!(game.state().input.mode, sim::InputMode::default());
        assert!(!game.toggle_pause());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = game();
        game.start();
        let snap = game.tick(0.05);
        assert_eq!(snap.phase, GamePhase::Running);
        assert!(!snap.over && !snap.paused);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut game = game();
        game.start();
        let json = serde_json::to_string(&game.tick(0.05)).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
    }
}
