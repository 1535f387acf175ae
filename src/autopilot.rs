//! Demo autopilot
//!
//! Picks a pointer-follow target for attract mode and headless runs: the
//! lane with the most clearance from obstacles about to reach the agent,
//! or the nearest star when the current lane is already safe.

use crate::sim::{GameState, Obstacle};

/// Seconds of look-ahead when judging which obstacles are dangerous
const HORIZON_SECS: f32 = 1.1;
/// Candidate lane spacing (px)
const LANE_STEP: f32 = 8.0;
/// Clearance cost per pixel of travel, so the agent does not jitter
const TRAVEL_PENALTY: f32 = 0.05;

/// Horizontal band an obstacle blocks for the agent's center
fn blocked_band(o: &Obstacle, radius: f32) -> (f32, f32) {
    (o.left() - radius, o.left() + o.width + radius)
}

/// Distance from `x` to the nearest blocked band, negative inside one
fn clearance(x: f32, bands: &[(f32, f32)]) -> f32 {
    bands
        .iter()
        .map(|&(lo, hi)| {
            if x < lo {
                lo - x
            } else if x > hi {
                x - hi
            } else {
                -(x - lo).min(hi - x)
            }
        })
        .fold(f32::INFINITY, f32::min)
}

/// Target x for pointer-follow, or `None` to hold still
pub fn steer(state: &GameState) -> Option<f32> {
    let agent = &state.agent;
    let top = agent.pos.y - agent.radius;

    let bands: Vec<(f32, f32)> = state
        .obstacles
        .iter()
        .filter(|o| {
            let gap = top - (o.y + o.height);
            let passed = o.y > agent.pos.y + agent.radius;
            !passed && (gap <= 0.0 || gap / o.speed.max(1.0) < HORIZON_SECS)
        })
        .map(|o| blocked_band(o, agent.radius))
        .collect();

    let here = clearance(agent.pos.x, &bands);
    if here > agent.radius {
        // Safe where we are: go for the closest reachable star
        let star = state
            .items
            .iter()
            .filter(|s| s.pos.y < agent.pos.y && clearance(s.pos.x, &bands) > 0.0)
            .min_by(|a, b| {
                let da = (a.pos.x - agent.pos.x).abs();
                let db = (b.pos.x - agent.pos.x).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });
        return star.map(|s| s.pos.x);
    }

    let lo = agent.radius;
    let hi = state.field_width - agent.radius;
    let mut best: Option<(f32, f32)> = None;
    let mut x = lo;
    while x <= hi {
        let score = clearance(x, &bands).min(state.field_width)
            - (x - agent.pos.x).abs() * TRAVEL_PENALTY;
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((x, score));
        }
        x += LANE_STEP;
    }
    best.map(|(x, _)| x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::BonusItem;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(&GameConfig::with_field(400.0, 600.0))
    }

    #[test]
    fn test_empty_field_holds() {
        assert_eq!(steer(&state()), None);
    }

    #[test]
    fn test_dodges_incoming_block() {
        let mut state = state();
        let agent = state.agent.pos;
        state.obstacles.push(Obstacle {
            x: agent.x,
            y: agent.y - 150.0,
            width: 100.0,
            height: 30.0,
            speed: 300.0,
            hue: 200,
        });
        let target = steer(&state).unwrap();
        assert!((target - agent.x).abs() > 70.0);
    }

    #[test]
    fn test_collects_star_when_safe() {
        let mut state = state();
        state.items.push(BonusItem {
            pos: Vec2::new(80.0, 100.0),
            speed: 150.0,
        });
        assert_eq!(steer(&state), Some(80.0));
    }
}
