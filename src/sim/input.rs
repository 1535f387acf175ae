//! Input to agent velocity
//!
//! Two explicit modes: discrete left/right keys, or pointer-follow toward a
//! target x while a pointer is held. The host switches modes through
//! distinct commands; nothing is inferred from event order.

use serde::{Deserialize, Serialize};

use super::state::Agent;
use crate::clamp;
use crate::consts::{AGENT_FRICTION, AGENT_TOP_SPEED, POINTER_BLEND, POINTER_GAIN};

/// Held horizontal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    None,
    Right,
}

impl Direction {
    /// From an axis value; only the sign matters
    pub fn from_axis(axis: i32) -> Self {
        match axis.signum() {
            -1 => Direction::Left,
            1 => Direction::Right,
            _ => Direction::None,
        }
    }

    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::None => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// Active control scheme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputMode {
    /// Keyboard-style: full speed while held, glide to a stop otherwise
    Discrete { direction: Direction },
    /// Eased pursuit of a pointer x
    Pointer { target_x: f32 },
}

impl Default for InputMode {
    fn default() -> Self {
        InputMode::Discrete {
            direction: Direction::None,
        }
    }
}

/// Maps the active input mode onto agent velocity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputMapper {
    pub mode: InputMode,
}

impl InputMapper {
    /// Key down/up. Pressing snaps velocity to top speed; releasing zeroes it.
    pub fn set_discrete(&mut self, direction: Direction, agent: &mut Agent) {
        self.mode = InputMode::Discrete { direction };
        agent.vel_x = direction.sign() * AGENT_TOP_SPEED;
    }

    /// Pointer held at `x`, or released. Release falls back to discrete
    /// mode with no key held so residual velocity glides out.
    pub fn set_pointer(&mut self, x: f32, active: bool) {
        if active {
            self.mode = InputMode::Pointer { target_x: x };
        } else if matches!(self.mode, InputMode::Pointer { .. }) {
            self.mode = InputMode::default();
        }
    }

    /// Update agent velocity for this tick, clamped to top speed
    pub fn steer(&self, agent: &mut Agent, dt: f32) {
        match self.mode {
            InputMode::Pointer { target_x } => {
                let desired = (target_x - agent.pos.x) * POINTER_GAIN;
                agent.vel_x += (desired - agent.vel_x) * (dt * POINTER_BLEND).min(1.0);
            }
            InputMode::Discrete {
                direction: Direction::None,
            } => {
                agent.vel_x *= 1.0 - (dt * AGENT_FRICTION).min(1.0);
            }
            InputMode::Discrete { direction } => {
                agent.vel_x = direction.sign() * AGENT_TOP_SPEED;
            }
        }
        agent.vel_x = clamp(agent.vel_x, -AGENT_TOP_SPEED, AGENT_TOP_SPEED);
    }

    /// Velocity step then position integration, kept on-field
    pub fn drive(&self, agent: &mut Agent, dt: f32, field_width: f32) {
        self.steer(agent, dt);
        agent.pos.x += agent.vel_x * dt;
        agent.clamp_to_field(field_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> Agent {
        Agent::new(200.0, 500.0, 20.0)
    }

    #[test]
    fn test_key_down_snaps_and_key_up_zeroes() {
        let mut mapper = InputMapper::default();
        let mut agent = agent();
        mapper.set_discrete(Direction::Right, &mut agent);
        assert_eq!(agent.vel_x, AGENT_TOP_SPEED);
        mapper.steer(&mut agent, 0.016);
        assert_eq!(agent.vel_x, AGENT_TOP_SPEED);
        mapper.set_discrete(Direction::None, &mut agent);
        assert_eq!(agent.vel_x, 0.0);
    }

    #[test]
    fn test_glide_decays() {
        let mapper = InputMapper::default();
        let mut agent = agent();
        agent.vel_x = 100.0;
        mapper.steer(&mut agent, 0.05);
        assert!((agent.vel_x - 50.0).abs() < 1e-4);
        // dt*10 >= 1 stops dead
        mapper.steer(&mut agent, 0.2);
        assert_eq!(agent.vel_x, 0.0);
    }

    #[test]
    fn test_pointer_pursuit() {
        let mut mapper = InputMapper::default();
        let mut agent = agent();
        mapper.set_pointer(210.0, true);
        // desired = 100, blend = 0.6
        mapper.steer(&mut agent, 0.05);
        assert!((agent.vel_x - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_velocity_clamped() {
        let mut mapper = InputMapper::default();
        let mut agent = agent();
        mapper.set_pointer(10_000.0, true);
        mapper.steer(&mut agent, 0.1);
        assert_eq!(agent.vel_x, AGENT_TOP_SPEED);
    }

    #[test]
    fn test_pointer_release_glides() {
        let mut mapper = InputMapper::default();
        let mut agent = agent();
        mapper.set_pointer(300.0, true);
        mapper.steer(&mut agent, 0.05);
        let v = agent.vel_x;
        mapper.set_pointer(300.0, false);
        assert_eq!(mapper.mode, InputMode::default());
        mapper.steer(&mut agent, 0.05);
        assert!(agent.vel_x > 0.0 && agent.vel_x < v);
    }

    #[test]
    fn test_pointer_move_without_press_ignored() {
        let mut mapper = InputMapper::default();
        mapper.set_pointer(50.0, false);
        assert_eq!(mapper.mode, InputMode::default());
    }

    #[test]
    fn test_drive_stays_on_field() {
        let mut mapper = InputMapper::default();
        let mut agent = agent();
        mapper.set_discrete(Direction::Left, &mut agent);
        for _ in 0..100 {
            mapper.drive(&mut agent, 0.05, 400.0);
        }
        assert_eq!(agent.pos.x, 20.0);
    }

    #[test]
    fn test_from_axis() {
        assert_eq!(Direction::from_axis(-5), Direction::Left);
        assert_eq!(Direction::from_axis(0), Direction::None);
        assert_eq!(Direction::from_axis(1), Direction::Right);
    }
}
