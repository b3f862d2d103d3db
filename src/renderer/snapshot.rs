//! Read-only view of one frame, all positions in screen space

use glam::Vec2;
use serde::Serialize;

use super::shapes;
use crate::sim::{GamePhase, GameState};
use crate::world_to_screen;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyView {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    /// Degrees
    pub rotation: f32,
    /// Hidden while the burst plays
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleView {
    /// Top-left corner of the spike's bounding box
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl BodyView {
    /// Rotated outline, clockwise from top-left
    pub fn corners(&self) -> [Vec2; 4] {
        shapes::cube_corners(self)
    }
}

impl ObstacleView {
    pub fn outline(&self) -> [Vec2; 3] {
        shapes::spike_triangle(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub opacity: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub body: BodyView,
    pub obstacles: Vec<ObstacleView>,
    pub particles: Vec<ParticleView>,
    pub ground_y: f32,
    /// For background parallax
    pub scroll_distance: f32,
    pub attempts: u32,
    pub best_distance: f32,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let scroll = state.scroll_distance;

        // The cube's screen x is fixed; still route it through world space
        let body_world_x = crate::screen_to_world(state.body.pos.x, scroll);
        let body = BodyView {
            pos: Vec2::new(world_to_screen(body_world_x, scroll), state.body.pos.y),
            size: state.body.size,
            rotation: state.body.rotation,
            visible: state.body.alive,
        };

        let obstacles = state
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                pos: Vec2::new(world_to_screen(o.world_x, scroll), o.y),
                width: o.width,
                height: o.height,
            })
            .collect();

        let particles = state
            .particles
            .iter()
            .map(|p| ParticleView {
                pos: Vec2::new(world_to_screen(p.pos.x, scroll), p.pos.y),
                opacity: p.life.clamp(0.0, 1.0),
            })
            .collect();

        Self {
            phase: state.phase,
            body,
            obstacles,
            particles,
            ground_y: state.settings.ground_y,
            scroll_distance: scroll,
            attempts: state.attempts,
            best_distance: state.best_distance,
        }
    }
}
