//! Per-frame simulation step
//!
//! One call advances the run by a clamped delta: score and difficulty,
//! spawning, agent movement, obstacle and star movement with collisions,
//! then particles.

use super::collision::{agent_hits_item, agent_hits_obstacle};
use super::particles::BurstColor;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// The delta actually applied for a requested `dt`: at most [`MAX_DT`],
/// and zero for negative or NaN input
#[inline]
pub fn effective_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(MAX_DT)
    }
}

/// Advance the run by one frame. Outside `Running` only the event list is
/// cleared.
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource, dt: f32) {
    state.events.clear();
    if !state.is_running() {
        return;
    }
    let dt = effective_dt(dt);
    if dt == 0.0 {
        return;
    }

    state.score.survive(dt);
    let difficulty = state.difficulty();

    state.spawner.update(
        rng,
        difficulty,
        dt,
        state.field_width,
        &mut state.obstacles,
        &mut state.items,
        &mut state.events,
    );

    state.input.drive(&mut state.agent, dt, state.field_width);

    update_obstacles(state, rng, dt);
    if state.is_running() {
        update_items(state, rng, dt);
    }

    state.particles.advance(dt);
}

/// Move obstacles; award passes, end the run on the first hit
fn update_obstacles(state: &mut GameState, rng: &mut impl RandomSource, dt: f32) {
    let exit_y = state.field_height + OBSTACLE_EXIT_MARGIN;
    let agent = state.agent;
    let mut passed = 0u32;
    let mut hit = false;

    state.obstacles.retain_mut(|o| {
        o.y += o.speed * dt;
        if o.y > exit_y {
            passed += 1;
            return false;
        }
        if !hit && agent_hits_obstacle(&agent, o) {
            hit = true;
            return false;
        }
        true
    });

    if passed > 0 {
        state.score.obstacles_passed(passed);
        state
            .events
            .extend(std::iter::repeat_n(GameEvent::ObstaclePassed, passed as usize));
    }

    if hit {
        state.phase = GamePhase::Over;
        state.particles.emit(
            rng,
            agent.pos,
            BurstColor::Death,
            DEATH_BURST_COUNT,
            DEATH_BURST_SPREAD,
        );
        let score = state.score.floored();
        log::info!(
            "Game over: score {} after {:.1}s",
            score,
            state.score.survival_time()
        );
        state.events.push(GameEvent::AgentDied { score });
    }
}

/// Move stars; collect the ones touching the agent
fn update_items(state: &mut GameState, rng: &mut impl RandomSource, dt: f32) {
    let exit_y = state.field_height + ITEM_EXIT_MARGIN;
    let agent = state.agent;
    let mut collected = Vec::new();

    state.items.retain_mut(|item| {
        item.pos.y += item.speed * dt;
        if item.pos.y > exit_y {
            return false;
        }
        if agent_hits_item(&agent, item) {
            collected.push(item.pos);
            return false;
        }
        true
    });

    for pos in collected {
        state.score.item_collected();
        state.particles.emit(
            rng,
            pos,
            BurstColor::Pickup,
            PICKUP_BURST_COUNT,
            PICKUP_BURST_SPREAD,
        );
        state.events.push(GameEvent::ItemCollected { x: pos.x, y: pos.y });
    }
}

/// Title-screen bob: a fixed-rate nudge of agent x while the game has not
/// started. Touches nothing else.
pub fn idle(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::NotStarted || !dt.is_finite() || dt <= 0.0 {
        return;
    }
    // Bound catch-up after a long stall
    state.idle.timer = (state.idle.timer + dt).min(1.0);
    while state.idle.timer >= IDLE_STEP_SECS {
        state.idle.timer -= IDLE_STEP_SECS;
        state.idle.phase += IDLE_PHASE_STEP;
        state.agent.pos.x += state.idle.phase.sin() * IDLE_AMPLITUDE;
        state.agent.clamp_to_field(state.field_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::input::Direction;
    use crate::sim::rng::{ScriptedRng, seeded_rng};
    use crate::sim::state::{BonusItem, Obstacle};
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new(&GameConfig::with_field(400.0, 600.0));
        state.phase = GamePhase::Running;
        state.spawner.enabled = false;
        state
    }

    #[test]
    fn test_effective_dt() {
        assert_eq!(effective_dt(0.016), 0.016);
        assert_eq!(effective_dt(0.05), 0.05);
        assert_eq!(effective_dt(0.2), MAX_DT);
        assert_eq!(effective_dt(-1.0), 0.0);
        assert_eq!(effective_dt(f32::NAN), 0.0);
        assert_eq!(effective_dt(f32::INFINITY), MAX_DT);
    }

    #[test]
    fn test_large_dt_clamped() {
        let mut state = running_state();
        let mut rng = seeded_rng(1);
        tick(&mut state, &mut rng, 3.0);
        assert_eq!(state.score.survival_time(), MAX_DT);
    }

    #[test]
    fn test_not_running_is_noop() {
        let mut rng = seeded_rng(1);
        for phase in [GamePhase::NotStarted, GamePhase::Paused, GamePhase::Over] {
            let mut state = running_state();
            state.phase = phase;
            state.obstacles.push(Obstacle {
                x: 100.0,
                y: 10.0,
                width: 40.0,
                height: 20.0,
                speed: 200.0,
                hue: 180,
            });
            tick(&mut state, &mut rng, 0.016);
            assert_eq!(state.obstacles[0].y, 10.0);
            assert_eq!(state.score.points(), 0.0);
        }
    }

    #[test]
    fn test_obstacle_exit_awards_pass_bonus() {
        let mut state = running_state();
        let mut rng = seeded_rng(1);
        state.obstacles.push(Obstacle {
            x: 50.0,
            y: 649.0,
            width: 40.0,
            height: 20.0,
            speed: 100.0,
            hue: 180,
        });
        tick(&mut state, &mut rng, 0.05);
        assert!(state.obstacles.is_empty());
        assert!((state.score.points() - (0.05 * 1.7 + 0.6)).abs() < 1e-5);
        assert!(state.events.contains(&GameEvent::ObstaclePassed));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_hit_ends_run_once() {
        let mut state = running_state();
        let mut rng = seeded_rng(2);
        let agent = state.agent.pos;
        let block = Obstacle {
            x: agent.x,
            y: agent.y - 10.0,
            width: 40.0,
            height: 20.0,
            speed: 0.0,
            hue: 200,
        };
        state.obstacles.push(block);
        state.obstacles.push(block);
        state.items.push(BonusItem {
            pos: agent,
            speed: 0.0,
        });
        tick(&mut state, &mut rng, 0.016);

        assert_eq!(state.phase, GamePhase::Over);
        // One burst, one obstacle consumed, star left alone
        assert_eq!(state.particles.len(), DEATH_BURST_COUNT);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.items.len(), 1);
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::AgentDied { score: 0 })
        ));
    }

    #[test]
    fn test_item_collection() {
        let mut state = running_state();
        let mut rng = seeded_rng(3);
        state.items.push(BonusItem {
            pos: state.agent.pos,
            speed: 150.0,
        });
        tick(&mut state, &mut rng, 0.02);
        assert!(state.items.is_empty());
        assert!((state.score.points() - (7.0 + 0.02 * 1.7)).abs() < 1e-5);
        assert_eq!(state.particles.len(), PICKUP_BURST_COUNT);
    }

    #[test]
    fn test_item_falls_out() {
        let mut state = running_state();
        let mut rng = seeded_rng(3);
        state.items.push(BonusItem {
            pos: Vec2::new(30.0, 619.0),
            speed: 150.0,
        });
        tick(&mut state, &mut rng, 0.02);
        assert!(state.items.is_empty());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_agent_moves_with_input() {
        let mut state = running_state();
        let mut rng = ScriptedRng::constant(0.5);
        let start_x = state.agent.pos.x;
        state.input.set_discrete(Direction::Right, &mut state.agent);
        tick(&mut state, &mut rng, 0.05);
        assert!((state.agent.pos.x - (start_x + AGENT_TOP_SPEED * 0.05)).abs() < 1e-3);
    }

    #[test]
    fn test_idle_only_before_start() {
        let mut state = GameState::new(&GameConfig::default());
        let x0 = state.agent.pos.x;
        idle(&mut state, 0.3);
        assert_ne!(state.agent.pos.x, x0);
        assert_eq!(state.score.points(), 0.0);

        let mut running = running_state();
        let x1 = running.agent.pos.x;
        idle(&mut running, 0.3);
        assert_eq!(running.agent.pos.x, x1);
    }
}
