//! Idle screen: the logo drifting around the window and bouncing off the edges.

use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::Screen;
use crate::colors::LUMON_BLUE;
use crate::frame::Frame;
use crate::image_display::ImageDisplay;
use crate::viewport::ViewportScale;

/// Logo scale at the reference width.
const BASE_SCALE: f32 = 0.4;

/// Drift speed in pixels per second at the reference width.
const BASE_SPEED: f32 = 120.0;

pub struct IdleScreen {
    images: Rc<ImageDisplay>,
    logo: String,
    /// Top-left corner of the logo in viewport pixels.
    position: (f32, f32),
    /// Unit direction signs, flipped on bounce.
    direction: (f32, f32),
    viewport: ViewportScale,
}

impl IdleScreen {
    pub fn new(
        images: Rc<ImageDisplay>,
        logo: &str,
    ) -> Self {
        Self {
            images,
            logo: logo.to_owned(),
            position: (0.0, 0.0),
            direction: (1.0, 1.0),
            viewport: ViewportScale::new(BASE_SCALE, BASE_SPEED),
        }
    }

    #[inline]
    pub const fn position(&self) -> (f32, f32) {
        self.position
    }

    #[inline]
    pub const fn speed(&self) -> f32 {
        self.viewport.speed()
    }
}

/// Move one axis and reflect it off `[0, max]`. Returns the new (position, direction).
fn bounce(
    position: f32,
    direction: f32,
    step: f32,
    max: f32,
) -> (f32, f32) {
    if max <= 0.0 {
        return (0.0, direction);
    }
    let next = position + direction * step;
    if next < 0.0 {
        (0.0, direction.abs())
    } else if next > max {
        (max, -direction.abs())
    } else {
        (next, direction)
    }
}

impl Screen for IdleScreen {
    fn update(
        &mut self,
        frame: &Frame,
    ) {
        self.viewport.apply(frame.viewport);

        let logo = self.images.scaled_size(&self.logo, self.viewport.scale());
        let max_x = frame.viewport.width as f32 - logo.width as f32;
        let max_y = frame.viewport.height as f32 - logo.height as f32;
        let step = self.viewport.speed() * frame.delta;

        let (x, dx) = bounce(self.position.0, self.direction.0, step, max_x);
        let (y, dy) = bounce(self.position.1, self.direction.1, step, max_y);
        self.position = (x, y);
        self.direction = (dx, dy);
    }

    fn draw<D>(
        &self,
        target: &mut D,
        _frame: &Frame,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let top_left = Point::new(self.position.0 as i32, self.position.1 as i32);
        self.images.draw(target, &self.logo, top_left, self.viewport.scale(), LUMON_BLUE);
    }
}
