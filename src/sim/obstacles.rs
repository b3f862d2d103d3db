//! Ground spikes, placed once per attempt in world space

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::settings::Settings;
use crate::world_to_screen;

/// A triangular spike anchored to the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub world_x: f32,
    /// Top edge (screen space)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn screen_x(&self, scroll_distance: f32) -> f32 {
        world_to_screen(self.world_x, scroll_distance)
    }

    /// Bounding box of the spike at the current scroll
    pub fn aabb(&self, scroll_distance: f32) -> Aabb {
        Aabb::from_rect(
            self.screen_x(scroll_distance),
            self.y,
            self.width,
            self.height,
        )
    }
}

/// Ordered (by world x) sequence of live obstacles
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field with `count` freshly spaced spikes
    ///
    /// Spacing is `min_spacing + jitter` from the previous spike, so no two
    /// spikes overlap as long as `min_spacing > obstacle_width`.
    pub fn generate<R: Rng>(&mut self, count: usize, settings: &Settings, rng: &mut R) {
        self.obstacles.clear();
        self.obstacles.reserve(count);

        let y = settings.ground_y - settings.obstacle_height;
        let mut x = settings.first_obstacle_x;
        for i in 0..count {
            if i > 0 {
                x += settings.min_spacing;
            }
            x += jitter(rng, settings.spacing_jitter);
            self.obstacles.push(Obstacle {
                world_x: x,
                y,
                width: settings.obstacle_width,
                height: settings.obstacle_height,
            });
        }

        log::debug!(
            "Generated {} obstacles spanning {:.0}..{:.0}",
            count,
            self.obstacles.first().map_or(0.0, |o| o.world_x),
            self.obstacles.last().map_or(0.0, |o| o.world_x),
        );
    }

    /// Drop every spike that has scrolled permanently off the left edge
    pub fn prune(&mut self, scroll_distance: f32, settings: &Settings) {
        let threshold = -settings.prune_margin;
        self.obstacles
            .retain(|o| o.screen_x(scroll_distance) >= threshold);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Add a spike by hand (level scripting and tests)
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}

fn jitter<R: Rng>(rng: &mut R, range: f32) -> f32 {
    if range > 0.0 {
        rng.random_range(0.0..range)
    } else {
        0.0
    }
}
