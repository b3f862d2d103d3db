//! Game tunables
//!
//! Defaults come from [`crate::consts`]. A JSON document can override any
//! subset of fields; everything is validated once, before a loop is built.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating [`Settings`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON was malformed
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value violates a construction-time precondition
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

/// Runtime tunables for one game loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Fixed physics step (seconds)
    pub step: f32,
    /// Upper bound on a single frame's wall-clock delta (seconds)
    pub max_frame_dt: f32,
    /// Death to next attempt, in real time (seconds)
    pub respawn_delay: f64,

    // === World ===
    pub ground_y: f32,

    // === Player ===
    pub player_size: f32,
    pub spawn_x: f32,
    pub player_speed: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub jump_tolerance: f32,
    /// Degrees per second while airborne
    pub spin_rate: f32,
    pub hitbox_padding: f32,

    // === Obstacles ===
    pub obstacle_count: usize,
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub first_obstacle_x: f32,
    pub min_spacing: f32,
    pub spacing_jitter: f32,
    pub prune_margin: f32,

    // === Particles ===
    /// Particle effects on/off (reduced effects)
    pub particles: bool,
    pub burst_count: usize,
    pub particle_speed: f32,
    pub particle_decay: f32,
    pub particle_cap: usize,

    // === Demo ===
    pub autopilot_lookahead: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step: SIM_DT,
            max_frame_dt: MAX_FRAME_DT,
            respawn_delay: RESPAWN_DELAY,

            ground_y: GROUND_Y,

            player_size: PLAYER_SIZE,
            spawn_x: PLAYER_SPAWN_X,
            player_speed: PLAYER_SPEED,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            jump_tolerance: JUMP_TOLERANCE,
            spin_rate: SPIN_RATE,
            hitbox_padding: HITBOX_PADDING,

            obstacle_count: OBSTACLE_COUNT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            first_obstacle_x: FIRST_OBSTACLE_X,
            min_spacing: OBSTACLE_MIN_SPACING,
            spacing_jitter: OBSTACLE_SPACING_JITTER,
            prune_margin: PRUNE_MARGIN,

            particles: true,
            burst_count: BURST_COUNT,
            particle_speed: PARTICLE_SPEED,
            particle_decay: PARTICLE_DECAY,
            particle_cap: MAX_PARTICLES,

            autopilot_lookahead: AUTOPILOT_LOOKAHEAD,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Effective particle cap (respects the particles toggle)
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.particle_cap
        }
    }

    /// Check every construction-time precondition
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(invalid("step", "must be a positive number of seconds"));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt >= self.step) {
            return Err(invalid("max_frame_dt", "must be at least one step"));
        }
        if !(self.respawn_delay.is_finite() && self.respawn_delay >= 0.0) {
            return Err(invalid("respawn_delay", "must be zero or positive"));
        }
        if !(self.player_size.is_finite() && self.player_size > 0.0) {
            return Err(invalid("player_size", "must be positive"));
        }
        if !self.ground_y.is_finite() {
            return Err(invalid("ground_y", "must be finite"));
        }
        if !self.spawn_x.is_finite() {
            return Err(invalid("spawn_x", "must be finite"));
        }
        if !(self.obstacle_width.is_finite()
            && self.obstacle_height.is_finite()
            && self.obstacle_width > 0.0
            && self.obstacle_height > 0.0)
        {
            return Err(invalid("obstacle_width", "obstacles must have positive size"));
        }
        let smallest = self
            .player_size
            .min(self.obstacle_width)
            .min(self.obstacle_height);
        if !(self.hitbox_padding.is_finite()
            && self.hitbox_padding >= 0.0
            && self.hitbox_padding * 2.0 < smallest)
        {
            return Err(invalid(
                "hitbox_padding",
                "must be non-negative and less than half the smallest box",
            ));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(invalid("gravity", "must pull downward (positive)"));
        }
        if !(self.jump_velocity.is_finite() && self.jump_velocity < 0.0) {
            return Err(invalid("jump_velocity", "must point upward (negative)"));
        }
        if !(self.jump_tolerance.is_finite() && self.jump_tolerance >= 0.0) {
            return Err(invalid("jump_tolerance", "must be non-negative"));
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(invalid("player_speed", "must be non-negative"));
        }
        if !self.spin_rate.is_finite() {
            return Err(invalid("spin_rate", "must be finite"));
        }
        if !self.first_obstacle_x.is_finite() {
            return Err(invalid("first_obstacle_x", "must be finite"));
        }
        if !(self.min_spacing.is_finite() && self.min_spacing > self.obstacle_width) {
            return Err(invalid("min_spacing", "must exceed obstacle_width"));
        }
        if !(self.spacing_jitter.is_finite() && self.spacing_jitter >= 0.0) {
            return Err(invalid("spacing_jitter", "must be non-negative"));
        }
        if !(self.prune_margin.is_finite() && self.prune_margin >= 0.0) {
            return Err(invalid("prune_margin", "must be non-negative"));
        }
        if !(self.particle_decay.is_finite() && self.particle_decay > 0.0) {
            return Err(invalid("particle_decay", "must be positive"));
        }
        if !(self.particle_speed.is_finite() && self.particle_speed >= 0.0) {
            return Err(invalid("particle_speed", "must be non-negative"));
        }
        if !(self.autopilot_lookahead.is_finite() && self.autopilot_lookahead >= 0.0) {
            return Err(invalid("autopilot_lookahead", "must be non-negative"));
        }
        Ok(())
    }
}
