//! Width-relative rescaling of visual scale and movement speed.
//!
//! Screens author their logo scale and speed against [`REFERENCE_WIDTH`].
//! When the viewport changes size both values follow the width ratio, so a
//! logo covers the same fraction of the window at any size.
//!
//! Values are always derived from the authored base values rather than
//! multiplied in place. Repeated resizes therefore never accumulate rounding
//! error, and returning to a previous width restores the previous values
//! exactly.

use embedded_graphics::geometry::Size;

use crate::config::{DEFAULT_VIEWPORT, REFERENCE_WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct ViewportScale {
    base_scale: f32,
    base_speed: f32,
    last_viewport: Size,
    scale: f32,
    speed: f32,
}

impl ViewportScale {
    /// Base values apply at the default viewport.
    pub fn new(
        base_scale: f32,
        base_speed: f32,
    ) -> Self {
        let mut this = Self {
            base_scale,
            base_speed,
            last_viewport: DEFAULT_VIEWPORT,
            scale: base_scale,
            speed: base_speed,
        };
        this.recompute(DEFAULT_VIEWPORT.width);
        this
    }

    /// Track the current viewport. Returns `true` if the values changed.
    ///
    /// Zero-sized viewports (minimized window) are ignored.
    pub fn apply(
        &mut self,
        viewport: Size,
    ) -> bool {
        if viewport == self.last_viewport || viewport.width == 0 || viewport.height == 0 {
            return false;
        }
        log::debug!(
            "viewport {}x{} -> {}x{}",
            self.last_viewport.width,
            self.last_viewport.height,
            viewport.width,
            viewport.height
        );
        self.last_viewport = viewport;
        self.recompute(viewport.width);
        true
    }

    fn recompute(
        &mut self,
        width: u32,
    ) {
        let factor = width as f32 / REFERENCE_WIDTH as f32;
        self.scale = self.base_scale * factor;
        self.speed = self.base_speed * factor;
    }

    #[inline]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub const fn speed(&self) -> f32 {
        self.speed
    }
}
