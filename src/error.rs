//! Error types

use thiserror::Error;

/// Invalid game configuration, rejected at construction
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field width must be positive and finite, got {0}")]
    FieldWidth(f32),
    #[error("field height must be positive and finite, got {0}")]
    FieldHeight(f32),
    #[error("agent radius must be positive and finite, got {0}")]
    AgentRadius(f32),
    #[error("agent diameter {diameter} does not fit in field width {width}")]
    AgentTooWide { diameter: f32, width: f32 },
    #[error("agent baseline {baseline} puts the agent outside field height {height}")]
    AgentBaseline { baseline: f32, height: f32 },
    #[error("particle capacity must be at least 1")]
    ParticleCapacity,
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// High score store failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is malformed: {0}")]
    Malformed(String),
    #[error("store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
