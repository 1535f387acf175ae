//! JavaScript bindings
//!
//! The page owns the canvas, the render loop and DOM events; it forwards
//! them here and draws from the JSON snapshot `tick` returns.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::sim::Direction;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
    }
    log::info!("Neon Dodge (web) loaded");
}

/// Game handle for the page
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    /// Attract mode: autopilot drives the agent
    demo: bool,
}

#[wasm_bindgen]
impl WebGame {
    /// Field size comes from the canvas
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebGame, JsValue> {
        let game = Game::new(
            GameConfig::with_field(width, height),
            super::default_store(),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { game, demo: false })
    }

    pub fn start(&mut self) {
        self.game.start();
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> bool {
        self.game.toggle_pause()
    }

    /// -1 left, 0 released, 1 right
    #[wasm_bindgen(js_name = setDiscreteInput)]
    pub fn set_discrete_input(&mut self, direction: i32) {
        self.game.set_discrete_input(Direction::from_axis(direction));
    }

    #[wasm_bindgen(js_name = setPointerTarget)]
    pub fn set_pointer_target(&mut self, x: f32, active: bool) {
        self.game.set_pointer_target(x, active);
    }

    #[wasm_bindgen(js_name = setDemo)]
    pub fn set_demo(&mut self, demo: bool) {
        self.demo = demo;
    }

    /// Advance one frame; returns the snapshot as JSON
    pub fn tick(&mut self, dt: f32) -> Result<String, JsValue> {
        if self.demo {
            if let Some(x) = crate::autopilot::steer(self.game.state()) {
                self.game.set_pointer_target(x, true);
            }
        }
        let snapshot = self.game.tick(dt);
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Title-screen bob, driven from a ~30 ms interval
    pub fn idle(&mut self, dt: f32) {
        self.game.idle(dt);
    }

    #[wasm_bindgen(js_name = highScore)]
    pub fn high_score(&self) -> f64 {
        self.game.high_score() as f64
    }
}
