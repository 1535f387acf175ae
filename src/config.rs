//! Game configuration
//!
//! Field dimensions are injected here rather than hard-coded, so the
//! simulation is independent of any particular canvas size.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Live particle cap
pub const DEFAULT_PARTICLE_CAPACITY: usize = 1200;

/// Construction-time configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield width (px)
    pub field_width: f32,
    /// Playfield height (px)
    pub field_height: f32,
    /// Agent collision radius
    pub agent_radius: f32,
    /// Distance from the bottom edge to the agent's center
    pub agent_baseline: f32,
    /// Maximum live particles
    pub particle_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 480.0,
            field_height: 720.0,
            agent_radius: 20.0,
            agent_baseline: 90.0,
            particle_capacity: DEFAULT_PARTICLE_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Config for a field of the given size, other values default
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Reject configurations the simulation cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_width.is_finite() && self.field_width > 0.0) {
            return Err(ConfigError::FieldWidth(self.field_width));
        }
        if !(self.field_height.is_finite() && self.field_height > 0.0) {
            return Err(ConfigError::FieldHeight(self.field_height));
        }
        if !(self.agent_radius.is_finite() && self.agent_radius > 0.0) {
            return Err(ConfigError::AgentRadius(self.agent_radius));
        }
        let diameter = self.agent_radius * 2.0;
        if diameter > self.field_width {
            return Err(ConfigError::AgentTooWide {
                diameter,
                width: self.field_width,
            });
        }
        if !(self.agent_baseline.is_finite()
            && self.agent_baseline >= 0.0
            && self.agent_baseline <= self.field_height)
        {
            return Err(ConfigError::AgentBaseline {
                baseline: self.agent_baseline,
                height: self.field_height,
            });
        }
        if self.particle_capacity == 0 {
            return Err(ConfigError::ParticleCapacity);
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Agent spawn position
    pub fn agent_home(&self) -> (f32, f32) {
        (
            self.field_width / 2.0,
            self.field_height - self.agent_baseline,
        )
    }
}
