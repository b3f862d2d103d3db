//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one step. Called repeatedly by the loop
//! driver with a constant `dt`.

use super::collision::padded_overlap;
use super::state::{GamePhase, GameState};

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, dt: f32) {
    if !dt.is_finite() || dt <= 0.0 {
        log::trace!("Rejected tick with dt {}", dt);
        return;
    }

    // Burst keeps animating in the menu and while dying
    if state.phase != GamePhase::Playing {
        state.particles.tick(dt, &state.settings);
        return;
    }

    state.time_ticks += 1;

    state.body.integrate(dt, &state.settings);
    state.scroll_distance += state.settings.player_speed * dt;

    // Test against this tick's scroll before anything is pruned
    let scroll = state.scroll_distance;
    let padding = state.settings.hitbox_padding;
    let body_box = state.body.aabb();
    let hit = state
        .obstacles
        .iter()
        .any(|o| padded_overlap(&body_box, &o.aabb(scroll), padding));
    if hit {
        state.die();
    }

    state.obstacles.prune(scroll, &state.settings);
    state.particles.tick(dt, &state.settings);
}
