//! Decorative particle bursts
//!
//! Particles never affect gameplay. The pool is a fixed-capacity ring
//! buffer: emitting into a full pool evicts the oldest particle.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::PARTICLE_GRAVITY;

/// Burst palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstColor {
    /// Red-orange, agent destroyed
    Death,
    /// Gold, star collected
    Pickup,
}

impl BurstColor {
    /// Straight RGBA
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            BurstColor::Death => [1.0, 80.0 / 255.0, 60.0 / 255.0, 0.95],
            BurstColor::Pickup => [1.0, 220.0 / 255.0, 80.0 / 255.0, 0.95],
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
    /// Reference lifetime for fading
    pub max_life: f32,
    pub size: f32,
    pub color: BurstColor,
}

impl Particle {
    /// Fade factor in `[0, 1]`
    pub fn alpha(&self) -> f32 {
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Bounded particle pool, oldest first
#[derive(Debug, Clone, Serialize)]
pub struct ParticlePool {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Spawn `count` particles at `origin`, scattered in all directions at
    /// speeds in `[40, spread)`
    pub fn emit(
        &mut self,
        rng: &mut impl RandomSource,
        origin: Vec2,
        color: BurstColor,
        count: usize,
        spread: f32,
    ) {
        if self.capacity == 0 {
            return;
        }
        for _ in 0..count {
            let angle = rng.uniform(0.0, std::f32::consts::TAU);
            let speed = rng.uniform(40.0, spread);
            let particle = Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                life: rng.uniform(0.3, 0.9),
                max_life: rng.uniform(0.4, 1.0),
                size: rng.uniform(1.5, 5.0),
                color,
            };
            if self.particles.len() == self.capacity {
                self.particles.pop_front();
            }
            self.particles.push_back(particle);
        }
    }

    /// Integrate motion and gravity, drop expired particles
    pub fn advance(&mut self, dt: f32) {
        self.particles.retain_mut(|p| {
            p.life -= dt;
            p.pos += p.vel * dt;
            p.vel.y += PARTICLE_GRAVITY * dt;
            p.life > 0.0
        });
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRng, seeded_rng};

    #[test]
    fn test_emit_count_and_origin() {
        let mut pool = ParticlePool::new(100);
        let mut rng = seeded_rng(1);
        pool.emit(&mut rng, Vec2::new(10.0, 20.0), BurstColor::Pickup, 24, 160.0);
        assert_eq!(pool.len(), 24);
        for p in pool.iter() {
            assert_eq!(p.pos, Vec2::new(10.0, 20.0));
            let speed = p.vel.length();
            assert!(speed >= 40.0 - 1e-3 && speed < 160.0 + 1e-3);
            assert!(p.life >= 0.3 && p.life < 0.9);
        }
    }

    #[test]
    fn test_advance_applies_gravity() {
        let mut pool = ParticlePool::new(8);
        // angle 0, speed 40, life 0.3
        let mut rng = ScriptedRng::new([0.0, 0.0, 0.0, 0.0, 0.0]);
        pool.emit(&mut rng, Vec2::ZERO, BurstColor::Death, 1, 220.0);
        pool.advance(0.1);
        let p = pool.iter().next().unwrap();
        assert!((p.pos.x - 4.0).abs() < 1e-4);
        assert!((p.vel.y - 6.0).abs() < 1e-4);
        assert!((p.life - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_expired_removed() {
        let mut pool = ParticlePool::new(64);
        let mut rng = seeded_rng(3);
        pool.emit(&mut rng, Vec2::ZERO, BurstColor::Death, 40, 220.0);
        pool.advance(0.95);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut pool = ParticlePool::new(50);
        let mut rng = seeded_rng(9);
        pool.emit(&mut rng, Vec2::new(1.0, 1.0), BurstColor::Death, 40, 220.0);
        pool.emit(&mut rng, Vec2::new(2.0, 2.0), BurstColor::Pickup, 24, 160.0);
        assert_eq!(pool.len(), 50);
        // 14 of the first burst were evicted; the newest burst is intact
        let first_burst = pool.iter().filter(|p| p.color == BurstColor::Death).count();
        assert_eq!(first_burst, 26);
        assert_eq!(pool.iter().last().map(|p| p.color), Some(BurstColor::Pickup));
    }
}
