//! Idle/demo mode: decide when the cube should jump on its own

use super::state::{GamePhase, GameState};

/// True when the next spike ahead is inside the look-ahead window and a
/// jump would be accepted
pub fn should_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing || !state.body.is_grounded(&state.settings) {
        return false;
    }

    let front = state.body.pos.x + state.body.size;
    let scroll = state.scroll_distance;
    state
        .obstacles
        .iter()
        .map(|o| o.screen_x(scroll) - front)
        .filter(|gap| *gap >= 0.0)
        .reduce(f32::min)
        .is_some_and(|gap| gap < state.settings.autopilot_lookahead)
}
