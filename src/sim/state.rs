//! Game state and the death/respawn state machine
//!
//! Everything the simulation touches lives in [`GameState`]; there are no
//! module-level singletons.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::obstacles::ObstacleField;
use super::particles::ParticleSystem;
use crate::settings::Settings;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not running (menu is up)
    Menu,
    /// Cube alive, world scrolling
    Playing,
    /// Burst in flight, cube hidden, waiting for the respawn timer
    Dying,
}

/// Things the loop driver must react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The cube hit a spike during run `generation`
    Died { generation: u64, distance: f32 },
    /// A new attempt began; `attempts` is the updated counter
    Respawned { attempts: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub body: Body,
    pub obstacles: ObstacleField,
    pub particles: ParticleSystem,
    /// Distance scrolled in the current attempt
    pub scroll_distance: f32,
    /// Attempts started after a death (display only)
    pub attempts: u32,
    /// Furthest distance reached this session
    pub best_distance: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Bumped on every run start; stale respawn timers carry an old value
    generation: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state sitting in the menu
    pub fn new(settings: Settings, seed: u64) -> Self {
        let body = Body::new(&settings);
        Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            body,
            obstacles: ObstacleField::new(),
            particles: ParticleSystem::new(),
            scroll_distance: 0.0,
            attempts: 0,
            best_distance: 0.0,
            time_ticks: 0,
            generation: 0,
            events: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase != GamePhase::Menu
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Menu to game: fresh body, fresh field, zero scroll
    pub fn start(&mut self) {
        self.attempts = 0;
        self.particles.clear();
        self.begin_attempt();
        log::info!("Run started (seed {})", self.seed);
    }

    /// Back to the menu. Any pending respawn goes stale.
    pub fn stop(&mut self) {
        if self.phase == GamePhase::Menu {
            return;
        }
        self.generation += 1;
        self.phase = GamePhase::Menu;
        log::info!("Exited to menu after {} attempts", self.attempts);
    }

    /// Kill the cube. Ignored unless currently playing with a live body.
    pub fn die(&mut self) {
        if self.phase != GamePhase::Playing || !self.body.alive {
            return;
        }

        self.body.alive = false;
        self.phase = GamePhase::Dying;
        self.best_distance = self.best_distance.max(self.scroll_distance);

        let origin = self.body_world_center();
        let count = self.settings.burst_count;
        self.particles
            .spawn_burst(origin, count, &self.settings, &mut self.rng);

        log::info!(
            "Died at distance {:.0} (attempt {})",
            self.scroll_distance,
            self.attempts + 1
        );
        self.events.push(GameEvent::Died {
            generation: self.generation,
            distance: self.scroll_distance,
        });
    }

    /// Start the next attempt if `generation` still matches this run
    ///
    /// Returns false (and does nothing) for stale or duplicate timers.
    pub fn respawn(&mut self, generation: u64) -> bool {
        if self.phase != GamePhase::Dying || generation != self.generation {
            log::trace!(
                "Ignoring respawn for generation {} (current {}, {:?})",
                generation,
                self.generation,
                self.phase
            );
            return false;
        }

        self.attempts += 1;
        // Keep the burst where it was drawn once scroll returns to zero
        self.particles.rebase(self.scroll_distance);
        self.begin_attempt();

        log::info!("Attempt {}", self.attempts + 1);
        self.events.push(GameEvent::Respawned {
            attempts: self.attempts,
        });
        true
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Player's centre in world space
    pub fn body_world_center(&self) -> glam::Vec2 {
        let center = self.body.center();
        glam::Vec2::new(
            crate::screen_to_world(center.x, self.scroll_distance),
            center.y,
        )
    }

    fn begin_attempt(&mut self) {
        self.generation += 1;
        self.body.reset(&self.settings);
        self.scroll_distance = 0.0;
        let count = self.settings.obstacle_count;
        self.obstacles.generate(count, &self.settings, &mut self.rng);
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameState {
        let mut state = GameState::new(Settings::default(), 12345);
        state.start();
        state
    }

    #[test]
    fn test_new_state_in_menu() {
        let state = GameState::new(Settings::default(), 1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(!state.is_running());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_start_enters_playing() {
        let state = playing();
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.is_running());
        assert!(state.body.alive);
        assert_eq!(state.scroll_distance, 0.0);
        assert_eq!(state.obstacles.len(), state.settings.obstacle_count);
    }

    #[test]
    fn test_die_is_idempotent() {
        let mut state = playing();
        state.scroll_distance = 123.0;
        state.die();
        state.die();
        state.die();

        assert_eq!(state.phase, GamePhase::Dying);
        assert!(!state.body.alive);
        assert_eq!(state.particles.len(), state.settings.burst_count);
        assert_eq!(state.best_distance, 123.0);

        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::Died { distance, .. } if distance == 123.0));
    }

    #[test]
    fn test_die_ignored_in_menu() {
        let mut state = GameState::new(Settings::default(), 1);
        state.die();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.particles.is_empty());
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_respawn_resets_attempt() {
        let mut state = playing();
        state.scroll_distance = 500.0;
        state.obstacles.clear();
        state.die();
        let generation = match state.drain_events()[0] {
            GameEvent::Died { generation, .. } => generation,
            other => panic!("unexpected event {:?}", other),
        };

        assert!(state.respawn(generation));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.attempts, 1);
        assert_eq!(state.scroll_distance, 0.0);
        assert!(state.body.alive);
        assert_eq!(state.obstacles.len(), state.settings.obstacle_count);
        // Burst survives the respawn
        assert_eq!(state.particles.len(), state.settings.burst_count);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Respawned { attempts: 1 }]
        );
    }

    #[test]
    fn test_respawn_twice_only_counts_once() {
        let mut state = playing();
        state.die();
        let generation = state.generation();
        assert!(state.respawn(generation));
        assert!(!state.respawn(generation));
        assert_eq!(state.attempts, 1);
    }

    #[test]
    fn test_stale_timer_after_restart() {
        let mut state = playing();
        state.die();
        let stale = state.generation();

        // Player bails to the menu and starts over before the timer fires
        state.stop();
        state.start();
        assert!(!state.respawn(stale));
        assert_eq!(state.attempts, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_particles_keep_screen_position_across_respawn() {
        let mut state = playing();
        state.scroll_distance = 800.0;
        state.die();
        let before: Vec<f32> = state
            .particles
            .iter()
            .map(|p| crate::world_to_screen(p.pos.x, state.scroll_distance))
            .collect();

        assert!(state.respawn(state.generation()));
        let after: Vec<f32> = state
            .particles
            .iter()
            .map(|p| crate::world_to_screen(p.pos.x, state.scroll_distance))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_burst_origin_is_body_center() {
        let mut state = playing();
        state.scroll_distance = 250.0;
        state.die();
        let expected = state.body_world_center();
        assert!(state.particles.iter().all(|p| p.pos == expected));
        assert_eq!(
            crate::world_to_screen(expected.x, state.scroll_distance),
            state.body.center().x
        );
    }
}
