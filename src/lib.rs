//! Cube Dash - An auto-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body physics, obstacles, particles, collisions)
//! - `driver`: Fixed timestep frame loop and respawn scheduling
//! - `renderer`: Read-only frame snapshots for an external drawing sink
//! - `settings`: Data-driven tunables with JSON loading

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{FrameReport, GameLoop};
pub use renderer::{FrameSnapshot, NullRenderer, Renderer};
pub use settings::{ConfigError, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Largest wall-clock delta accepted per frame (stall/tab-switch guard)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ground line (screen y, pixels from top)
    pub const GROUND_Y: f32 = 320.0;

    /// Player cube
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    /// Horizontal scroll speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 300.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 2400.0;
    /// Jump impulse, negative is up (pixels/s)
    pub const JUMP_VELOCITY: f32 = -720.0;
    /// Slack above the ground within which a jump is still accepted
    pub const JUMP_TOLERANCE: f32 = 2.0;
    /// Airborne spin (degrees/s)
    pub const SPIN_RATE: f32 = 360.0;

    /// Hitbox shrink on every side
    pub const HITBOX_PADDING: f32 = 5.0;

    /// Obstacle field
    pub const OBSTACLE_COUNT: usize = 40;
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 30.0;
    pub const FIRST_OBSTACLE_X: f32 = 800.0;
    pub const OBSTACLE_MIN_SPACING: f32 = 300.0;
    pub const OBSTACLE_SPACING_JITTER: f32 = 200.0;
    /// Obstacles further left than this (screen x) are gone for good
    pub const PRUNE_MARGIN: f32 = 100.0;

    /// Death burst
    pub const BURST_COUNT: usize = 24;
    pub const PARTICLE_SPEED: f32 = 240.0;
    /// Life lost per second (life starts at 1.0)
    pub const PARTICLE_DECAY: f32 = 2.0;
    pub const MAX_PARTICLES: usize = 256;

    /// Real-time delay between death and the next attempt (seconds)
    pub const RESPAWN_DELAY: f64 = 1.0;

    /// Autopilot jumps when the next spike is this close to the cube's front edge
    pub const AUTOPILOT_LOOKAHEAD: f32 = 60.0;
}

/// Convert a world-space x into screen space for the given scroll distance.
///
/// Every drawable goes through this: obstacles, the player, particles.
#[inline]
pub fn world_to_screen(world_x: f32, scroll_distance: f32) -> f32 {
    world_x - scroll_distance
}

/// Inverse of [`world_to_screen`]
#[inline]
pub fn screen_to_world(screen_x: f32, scroll_distance: f32) -> f32 {
    screen_x + scroll_distance
}
