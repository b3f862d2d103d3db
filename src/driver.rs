//! Frame loop driver
//!
//! Converts display-rate frame callbacks into fixed-size simulation steps,
//! schedules the real-time respawn delay, and renders once per frame.

use crate::renderer::{FrameSnapshot, Renderer};
use crate::settings::{ConfigError, Settings};
use crate::sim::{GameEvent, GameState, autopilot, tick};

/// One-shot respawn scheduled at death, keyed to the run it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RespawnTimer {
    /// Wall-clock time (seconds) at which it fires
    pub due_at: f64,
    pub generation: u64,
}

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameReport {
    /// Wall-clock delta actually fed to the accumulator (after clamping)
    pub delta: f32,
    /// Simulation steps run this frame
    pub steps: u32,
    /// Unsimulated time carried into the next frame
    pub accumulator: f32,
    /// A new attempt began this frame
    pub respawned: bool,
}

/// Owns the game state and drives it from frame callbacks
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    accumulator: f32,
    last_time: Option<f64>,
    pending_respawn: Option<RespawnTimer>,
    autopilot: bool,
}

impl GameLoop {
    /// Build a loop from validated settings
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self::build(settings, seed))
    }

    /// Loop with default tunables
    pub fn with_defaults(seed: u64) -> Self {
        Self::build(Settings::default(), seed)
    }

    fn build(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(settings, seed),
            accumulator: 0.0,
            last_time: None,
            pending_respawn: None,
            autopilot: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Display readout only
    pub fn attempts(&self) -> u32 {
        self.state.attempts
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn pending_respawn(&self) -> Option<RespawnTimer> {
        self.pending_respawn
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Menu to game
    pub fn start(&mut self) {
        self.state.start();
        self.accumulator = 0.0;
        self.pending_respawn = None;
    }

    /// Game to menu
    pub fn stop(&mut self) {
        self.state.stop();
        self.accumulator = 0.0;
        self.pending_respawn = None;
    }

    /// Edge-triggered jump request, applied immediately
    pub fn jump(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.state.body.try_jump(&self.state.settings)
    }

    /// Run one display frame at wall-clock time `now` (seconds)
    pub fn frame<R: Renderer + ?Sized>(&mut self, now: f64, renderer: &mut R) -> FrameReport {
        let delta = self.frame_delta(now);
        self.accumulator += delta;

        let step = self.state.settings.step;
        let mut steps = 0;
        while self.accumulator >= step {
            if self.autopilot && autopilot::should_jump(&self.state) {
                self.jump();
            }
            tick(&mut self.state, step);
            self.accumulator -= step;
            steps += 1;
        }

        for event in self.state.drain_events() {
            match event {
                GameEvent::Died { generation, .. } => {
                    self.pending_respawn = Some(RespawnTimer {
                        due_at: now + self.state.settings.respawn_delay,
                        generation,
                    });
                }
                GameEvent::Respawned { .. } => {}
            }
        }

        let mut respawned = false;
        if let Some(timer) = self.pending_respawn {
            if now >= timer.due_at {
                self.pending_respawn = None;
                respawned = self.state.respawn(timer.generation);
                // Respawn's own event needs no reaction
                self.state.drain_events();
            }
        }

        renderer.render(&FrameSnapshot::capture(&self.state));

        FrameReport {
            delta,
            steps,
            accumulator: self.accumulator,
            respawned,
        }
    }

    fn frame_delta(&mut self, now: f64) -> f32 {
        let raw = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        if !raw.is_finite() || raw < 0.0 {
            return 0.0;
        }
        let max = self.state.settings.max_frame_dt;
        if raw > max {
            log::warn!("Frame took {:.3}s, clamping to {:.3}s", raw, max);
            return max;
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::NullRenderer;
    use crate::sim::GamePhase;
    use proptest::prelude::*;

    /// Exactly representable so step counts are exact
    const STEP: f32 = 1.0 / 64.0;

    fn exact_settings() -> Settings {
        Settings {
            step: STEP,
            ..Default::default()
        }
    }

    fn started(settings: Settings) -> GameLoop {
        let mut game = GameLoop::new(settings, 7).unwrap();
        game.start();
        game
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = Settings {
            step: -1.0,
            ..Default::default()
        };
        assert!(GameLoop::new(settings, 1).is_err());
    }

    #[test]
    fn test_first_frame_runs_no_steps() {
        let mut game = started(exact_settings());
        let report = game.frame(10.0, &mut NullRenderer);
        assert_eq!(report.steps, 0);
        assert_eq!(report.delta, 0.0);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut game = started(exact_settings());
        game.frame(1.0, &mut NullRenderer);

        let report = game.frame(1.0 + 3.0 * STEP as f64 + 0.01, &mut NullRenderer);
        assert_eq!(report.steps, 3);
        assert!((report.accumulator - 0.01).abs() < 1.0e-5);

        // 0.01 + 0.01 crosses one step
        let report = game.frame(1.0 + 3.0 * STEP as f64 + 0.02, &mut NullRenderer);
        assert_eq!(report.steps, 1);
        assert!((report.accumulator - (0.02 - STEP)).abs() < 1.0e-5);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut game = started(exact_settings());
        game.frame(0.0, &mut NullRenderer);
        let report = game.frame(5.0, &mut NullRenderer);
        assert_eq!(report.delta, game.settings().max_frame_dt);
        assert_eq!(report.steps, (0.1 / STEP as f64).floor() as u32);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut game = started(exact_settings());
        game.frame(2.0, &mut NullRenderer);
        let report = game.frame(1.0, &mut NullRenderer);
        assert_eq!(report.delta, 0.0);
        assert_eq!(report.steps, 0);
    }

    #[test]
    fn test_renders_once_per_frame_after_steps() {
        let mut game = started(exact_settings());
        game.frame(0.0, &mut NullRenderer);

        let mut frames = Vec::new();
        let mut record = |frame: &FrameSnapshot| frames.push(frame.scroll_distance);
        game.frame(4.0 * STEP as f64, &mut record);

        assert_eq!(frames.len(), 1);
        let speed = game.settings().player_speed;
        assert!((frames[0] - 4.0 * STEP * speed).abs() < 1.0e-3);
    }

    #[test]
    fn test_jump_only_while_running() {
        let mut game = GameLoop::with_defaults(1);
        assert!(!game.jump());
        game.start();
        assert!(game.jump());
        assert_eq!(game.state().body.vel_y, game.settings().jump_velocity);
        // Mid-air, still the same frame
        game.frame(0.0, &mut NullRenderer);
        game.frame(0.05, &mut NullRenderer);
        assert!(!game.jump());
    }

    #[test]
    fn test_respawn_waits_for_real_time() {
        let mut game = started(exact_settings());
        game.frame(0.0, &mut NullRenderer);
        game.state.die();

        let report = game.frame(STEP as f64, &mut NullRenderer);
        assert!(!report.respawned);
        let timer = game.pending_respawn().expect("timer scheduled");
        assert_eq!(timer.due_at, STEP as f64 + game.settings().respawn_delay);

        // Many frames, still inside the delay
        let mut now = STEP as f64;
        while now + 0.05 < timer.due_at {
            now += 0.05;
            assert!(!game.frame(now, &mut NullRenderer).respawned);
            assert_eq!(game.state().phase, GamePhase::Dying);
        }

        let report = game.frame(timer.due_at, &mut NullRenderer);
        assert!(report.respawned);
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert!(game.pending_respawn().is_none());
    }

    #[test]
    fn test_stop_cancels_respawn() {
        let mut game = started(exact_settings());
        game.frame(0.0, &mut NullRenderer);
        game.state.die();
        game.frame(0.1, &mut NullRenderer);
        assert!(game.pending_respawn().is_some());

        game.stop();
        assert!(game.pending_respawn().is_none());
        game.frame(5.0, &mut NullRenderer);
        assert_eq!(game.state().phase, GamePhase::Menu);
        assert_eq!(game.attempts(), 0);
    }

    proptest! {
        #[test]
        fn prop_accumulator_drain(k in 0u32..=5, remainder in 0.0005f32..0.015) {
            let mut game = started(exact_settings());
            game.frame(0.0, &mut NullRenderer);

            let delta = k as f64 * STEP as f64 + remainder as f64;
            let report = game.frame(delta, &mut NullRenderer);
            prop_assert_eq!(report.steps, k);
            prop_assert!((report.accumulator - remainder).abs() < 1.0e-5);
            prop_assert!(report.accumulator < STEP);
        }
    }
}
