//! The player cube
//!
//! Screen space, y grows downward. The cube's x never changes on screen;
//! the world scrolls past it instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Settings;

/// Snap an angle to the nearest quarter turn, normalized to [0, 360)
#[inline]
pub fn snap_rotation(degrees: f32) -> f32 {
    ((degrees / 90.0).round() * 90.0).rem_euclid(360.0)
}

/// Top edge for a box of `size` resting on `ground_y`
///
/// `ground_y - size` can round so that adding `size` back lands past the
/// ground. Nudge the top up (toward smaller y) until `top + size <= ground_y`.
pub fn resting_top(ground_y: f32, size: f32) -> f32 {
    let mut top = ground_y - size;
    while top + size > ground_y {
        top -= ulp(top).max(ulp(ground_y));
    }
    top
}

/// Gap to the next representable value above `|x|`
fn ulp(x: f32) -> f32 {
    let x = x.abs();
    f32::from_bits(x.to_bits() + 1) - x
}

/// Kinematic body for the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub vel_y: f32,
    /// Degrees, free-running while airborne
    pub rotation: f32,
    pub alive: bool,
    /// Side of the square
    pub size: f32,
}

impl Body {
    pub fn new(settings: &Settings) -> Self {
        let mut body = Self {
            pos: Vec2::ZERO,
            vel_y: 0.0,
            rotation: 0.0,
            alive: true,
            size: settings.player_size,
        };
        body.reset(settings);
        body
    }

    /// Back to the spawn point, at rest on the ground
    pub fn reset(&mut self, settings: &Settings) {
        self.size = settings.player_size;
        self.pos = Vec2::new(settings.spawn_x, resting_top(settings.ground_y, self.size));
        self.vel_y = 0.0;
        self.rotation = 0.0;
        self.alive = true;
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// On the ground, or close enough to absorb one step of slack
    pub fn is_grounded(&self, settings: &Settings) -> bool {
        self.bottom() >= settings.ground_y - settings.jump_tolerance
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_rect(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Apply gravity for one step and resolve ground contact
    pub fn integrate(&mut self, dt: f32, settings: &Settings) {
        if !self.alive {
            return;
        }

        self.vel_y += settings.gravity * dt;
        self.pos.y += self.vel_y * dt;

        if self.bottom() > settings.ground_y {
            self.pos.y = resting_top(settings.ground_y, self.size);
            self.vel_y = 0.0;
            self.rotation = snap_rotation(self.rotation);
        } else {
            self.rotation += settings.spin_rate * dt;
        }
    }

    /// Jump if grounded. Returns whether the impulse was applied.
    pub fn try_jump(&mut self, settings: &Settings) -> bool {
        if !self.alive || !self.is_grounded(settings) {
            return false;
        }
        self.vel_y = settings.jump_velocity;
        true
    }
}
