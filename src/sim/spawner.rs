//! Obstacle and bonus item spawning
//!
//! Obstacles spawn on a timer whose period shrinks with difficulty; at
//! higher difficulty some spawns become clusters of 2-3 faster obstacles.
//! Stars spawn on an independent fixed timer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::score::spawn_interval;
use super::state::{BonusItem, GameEvent, Obstacle};
use crate::clamp;
use crate::consts::{CLUSTER_CHANCE_SLOPE, ITEM_CHANCE, ITEM_INTERVAL, ITEM_SPAWN_Y, MAX_CLUSTER_CHANCE};

/// Horizontal jitter of each cluster member around the shared base x
const CLUSTER_JITTER: f32 = 140.0;
/// Cluster base x keeps this far from either edge
const CLUSTER_EDGE_MARGIN: f32 = 120.0;
/// Stars spawn at least this far from either edge
const ITEM_EDGE_MARGIN: f32 = 30.0;

/// Probability that an obstacle spawn is a cluster: `min(0.35, d * 0.06)`
#[inline]
pub fn cluster_chance(difficulty: f32) -> f32 {
    (difficulty * CLUSTER_CHANCE_SLOPE).min(MAX_CLUSTER_CHANCE)
}

/// Spawn timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub obstacle_timer: f32,
    pub item_timer: f32,
    /// When false, timers run but nothing spawns
    pub enabled: bool,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            obstacle_timer: 0.0,
            item_timer: 0.0,
            enabled: true,
        }
    }
}

impl Spawner {
    /// Zero both timers; `enabled` is kept
    pub fn reset(&mut self) {
        self.obstacle_timer = 0.0;
        self.item_timer = 0.0;
    }

    /// Advance timers by `dt` and spawn whatever is due
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        rng: &mut impl RandomSource,
        difficulty: f32,
        dt: f32,
        field_width: f32,
        obstacles: &mut Vec<Obstacle>,
        items: &mut Vec<BonusItem>,
        events: &mut Vec<GameEvent>,
    ) {
        self.obstacle_timer += dt;
        if self.obstacle_timer > spawn_interval(difficulty) {
            self.obstacle_timer = 0.0;
            if self.enabled {
                let count = if rng.chance(cluster_chance(difficulty)) {
                    spawn_cluster(rng, difficulty, field_width, obstacles)
                } else {
                    obstacles.push(spawn_obstacle(rng, difficulty, field_width));
                    1
                };
                log::debug!("Spawned {count} obstacle(s) at difficulty {difficulty:.2}");
                events.push(GameEvent::ObstacleSpawned { count });
            }
        }

        self.item_timer += dt;
        if self.item_timer > ITEM_INTERVAL {
            self.item_timer = 0.0;
            if self.enabled && rng.chance(ITEM_CHANCE) {
                let item = spawn_item(rng, field_width);
                events.push(GameEvent::ItemSpawned { x: item.pos.x });
                items.push(item);
            }
        }
    }
}

/// Random obstacle size, clamped so it is never empty and never wider
/// than the field
fn obstacle_size(rng: &mut impl RandomSource, field_width: f32) -> (f32, f32) {
    let width = clamp(rng.uniform(30.0, 120.0).floor(), 1.0, field_width);
    let height = rng.uniform(18.0, 40.0).floor().max(1.0);
    (width, height)
}

fn obstacle_hue(rng: &mut impl RandomSource) -> u16 {
    rng.uniform(150.0, 320.0).floor() as u16
}

/// A single obstacle placed uniformly across the field
pub fn spawn_obstacle(rng: &mut impl RandomSource, difficulty: f32, field_width: f32) -> Obstacle {
    let (width, height) = obstacle_size(rng, field_width);
    let half = width / 2.0;
    let x = clamp(rng.uniform(half, field_width - half), half, field_width - half);
    let speed = rng.uniform(140.0, 250.0) * difficulty;
    Obstacle {
        x,
        y: -height,
        width,
        height,
        speed,
        hue: obstacle_hue(rng),
    }
}

/// 2-3 obstacles around a shared base x, each with its own speed boost.
/// Returns how many were pushed.
pub fn spawn_cluster(
    rng: &mut impl RandomSource,
    difficulty: f32,
    field_width: f32,
    out: &mut Vec<Obstacle>,
) -> u32 {
    let count = (rng.uniform(2.0, 4.0).floor() as u32).clamp(2, 3);
    let base_x = rng.uniform(CLUSTER_EDGE_MARGIN, field_width - CLUSTER_EDGE_MARGIN);
    for _ in 0..count {
        let (width, height) = obstacle_size(rng, field_width);
        let half = width / 2.0;
        let x = clamp(
            base_x + rng.uniform(-CLUSTER_JITTER, CLUSTER_JITTER),
            half,
            field_width - half,
        );
        let speed = rng.uniform(140.0, 250.0) * difficulty * rng.uniform(0.9, 1.4);
        out.push(Obstacle {
            x,
            y: -height,
            width,
            height,
            speed,
            hue: obstacle_hue(rng),
        });
    }
    count
}

/// A star somewhere across the top
pub fn spawn_item(rng: &mut impl RandomSource, field_width: f32) -> BonusItem {
    let x = rng.uniform(ITEM_EDGE_MARGIN, field_width - ITEM_EDGE_MARGIN);
    let speed = rng.uniform(120.0, 180.0);
    BonusItem {
        pos: Vec2::new(x, ITEM_SPAWN_Y),
        speed,
    }
}
