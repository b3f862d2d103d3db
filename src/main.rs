//! Cube Dash entry point
//!
//! Native builds run the simulation headless against a synthetic clock.
//! Drawing and input wiring live with the embedding frontend.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;
    use serde::Serialize;

    use cube_dash::{ConfigError, FrameSnapshot, GameLoop, Renderer, Settings};

    #[derive(Parser, Debug)]
    #[command(name = "cube-dash")]
    #[command(author, version, about = "Headless Cube Dash simulation", long_about = None)]
    pub struct Cli {
        /// Seconds of wall-clock time to simulate
        #[arg(short, long, default_value = "30")]
        seconds: f64,

        /// Display frame rate to emulate
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Run seed (obstacle layout and particle spread)
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Settings JSON overriding the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Let the demo autopilot jump
        #[arg(long)]
        autopilot: bool,

        /// Print a JSON summary when done
        #[arg(long)]
        summary: bool,
    }

    /// Logs a line per second of frames instead of drawing
    struct LogRenderer {
        frames: u64,
        every: u64,
    }

    impl Renderer for LogRenderer {
        fn render(&mut self, frame: &FrameSnapshot) {
            self.frames += 1;
            if self.frames % self.every == 0 {
                log::debug!(
                    "frame {}: {:?} distance {:.0}, {} spikes, {} particles",
                    self.frames,
                    frame.phase,
                    frame.scroll_distance,
                    frame.obstacles.len(),
                    frame.particles.len()
                );
                if frame.body.visible {
                    let [top_left, ..] = frame.body.corners();
                    log::trace!("cube corner at ({:.1}, {:.1})", top_left.x, top_left.y);
                }
                if let Some(spike) = frame.obstacles.iter().find(|o| o.pos.x >= 0.0) {
                    let [_, apex, _] = spike.outline();
                    log::trace!("next spike apex at ({:.1}, {:.1})", apex.x, apex.y);
                }
            }
        }
    }

    #[derive(Serialize)]
    struct Summary {
        seed: u64,
        frames: u64,
        seconds: f64,
        attempts: u32,
        best_distance: f32,
        final_distance: f32,
    }

    pub fn run(cli: Cli) -> Result<(), ConfigError> {
        let settings = match &cli.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let mut game = GameLoop::new(settings, cli.seed)?;
        game.set_autopilot(cli.autopilot);
        game.start();

        let fps = cli.fps.max(1);
        let mut renderer = LogRenderer {
            frames: 0,
            every: fps as u64,
        };
        let total_frames = (cli.seconds.max(0.0) * fps as f64).round() as u64;
        for i in 0..=total_frames {
            let now = i as f64 / fps as f64;
            game.frame(now, &mut renderer);
        }

        let state = game.state();
        log::info!(
            "Simulated {:.1}s: {} attempts, best distance {:.0}",
            cli.seconds,
            state.attempts,
            state.best_distance.max(state.scroll_distance)
        );

        if cli.summary {
            let summary = Summary {
                seed: cli.seed,
                frames: renderer.frames,
                seconds: cli.seconds,
                attempts: state.attempts,
                best_distance: state.best_distance.max(state.scroll_distance),
                final_distance: state.scroll_distance,
            };
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Failed to encode summary: {}", e),
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Cube Dash (native) starting...");

    let cli = headless::Cli::parse();
    if let Err(e) = headless::run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Frontends embed the library directly
}
