//! Frame clock for the window loop.
//!
//! Produces the per-frame delta and total time that feed [`Frame`]. Uses
//! `std::time::Instant`, so the window loop is the only caller; tests build
//! frames with fixed deltas instead.

use std::time::Instant;

use embedded_graphics::geometry::Size;

use crate::frame::{Frame, Input};

pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, last: now }
    }

    /// Advance the clock and build the frame context for this iteration.
    pub fn tick(
        &mut self,
        viewport: Size,
        input: Input,
    ) -> Frame {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        Frame::new(delta, now.duration_since(self.start).as_secs_f32())
            .with_viewport(viewport)
            .with_input(input)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
