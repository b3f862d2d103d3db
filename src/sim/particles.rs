//! Death burst particles
//!
//! Purely visual. Positions are world space like everything else drawable.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// A single fading particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, fading toward 0
    pub life: f32,
    /// Ticks survived
    pub age: u32,
}

/// Ticks a fresh particle lives when it loses `decay_per_tick` life per tick
pub fn lifetime_ticks(decay_per_tick: f32) -> u32 {
    (1.0 / decay_per_tick).ceil() as u32
}

/// Bag of live particles
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` particles at `origin` with random velocities
    ///
    /// Truncated so the bag never exceeds `settings.max_particles()`.
    pub fn spawn_burst<R: Rng>(
        &mut self,
        origin: Vec2,
        count: usize,
        settings: &Settings,
        rng: &mut R,
    ) {
        let room = settings.max_particles().saturating_sub(self.particles.len());
        let count = count.min(room);
        let speed = settings.particle_speed;

        self.particles.reserve(count);
        for _ in 0..count {
            let vel = if speed > 0.0 {
                Vec2::new(
                    rng.random_range(-speed..speed),
                    rng.random_range(-speed..speed),
                )
            } else {
                Vec2::ZERO
            };
            self.particles.push(Particle {
                pos: origin,
                vel,
                life: 1.0,
                age: 0,
            });
        }
    }

    /// Move and fade every particle, dropping the dead ones
    ///
    /// Removal counts whole ticks so a particle never outlives
    /// [`lifetime_ticks`], whatever the rounding in `life`.
    pub fn tick(&mut self, dt: f32, settings: &Settings) {
        let decay = settings.particle_decay * dt;
        let lifetime = lifetime_ticks(decay);
        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel * dt;
            particle.age += 1;
            particle.life = (1.0 - particle.age as f32 * decay).max(f32::MIN_POSITIVE);
        }
        self.particles.retain(|p| p.age < lifetime);
    }

    /// Shift every particle left by `offset` (world origin moved)
    pub fn rebase(&mut self, offset: f32) {
        for particle in self.particles.iter_mut() {
            particle.pos.x -= offset;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
