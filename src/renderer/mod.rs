//! Rendering seam
//!
//! Drawing itself happens outside this crate. The loop driver hands a
//! read-only [`FrameSnapshot`] to a [`Renderer`] once per frame, after all
//! physics steps for that frame have run.

pub mod shapes;
pub mod snapshot;

pub use snapshot::{BodyView, FrameSnapshot, ObstacleView, ParticleView};

/// Sink for finished frames. Nothing it does feeds back into the simulation.
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot);
}

/// Discards every frame (headless runs, tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameSnapshot) {}
}

impl<F: FnMut(&FrameSnapshot)> Renderer for F {
    fn render(&mut self, frame: &FrameSnapshot) {
        self(frame)
    }
}
