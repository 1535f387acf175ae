//! Neon Dodge entry point
//!
//! Native builds run a headless game driven by the autopilot and report the
//! result; the browser build is driven from JavaScript via `platform::web`.
//!
//! Usage: `neon-dodge [seconds] [config.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use neon_dodge::sim::{GameEvent, GamePhase};
    use neon_dodge::{ConfigError, Game, GameConfig, autopilot, platform};

    /// Simulated frame rate
    const FRAME_DT: f32 = 1.0 / 60.0;
    const DEFAULT_SECONDS: f32 = 60.0;

    pub fn run() -> Result<(), ConfigError> {
        let mut args = std::env::args().skip(1);
        let seconds = args
            .next()
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_SECONDS);
        let config = match args.next() {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        log::info!("Neon Dodge (native) starting: {:.0}s headless run", seconds);
        let mut game = Game::new(config, platform::default_store())?;
        game.start();

        let frames = (seconds / FRAME_DT).ceil() as u64;
        let mut stars = 0u32;
        for _ in 0..frames {
            match autopilot::steer(game.state()) {
                Some(x) => game.set_pointer_target(x, true),
                None => game.set_pointer_target(game.state().agent.pos.x, false),
            }
            let snapshot = game.tick(FRAME_DT);
            for event in snapshot.events {
                match event {
                    GameEvent::ItemCollected { .. } => stars += 1,
                    GameEvent::NewHighScore { score } => {
                        log::info!("New high score: {}", score)
                    }
                    _ => {}
                }
            }
            if snapshot.phase == GamePhase::Over {
                break;
            }
        }

        let state = game.state();
        println!(
            "{} after {:.1}s | score {} | stars {} | high score {}",
            if state.phase == GamePhase::Over {
                "Game over"
            } else {
                "Survived"
            },
            state.score.survival_time(),
            state.score.floored(),
            stars,
            game.high_score()
        );
        Ok(())
    }
}
