//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod obstacles;
pub mod particles;
pub mod state;
pub mod tick;

pub use body::{Body, snap_rotation};
pub use collision::{Aabb, padded_overlap};
pub use obstacles::{Obstacle, ObstacleField};
pub use particles::{Particle, ParticleSystem, lifetime_ticks};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
