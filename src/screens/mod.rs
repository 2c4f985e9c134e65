//! Screens driven by the [`UiManager`](crate::ui::UiManager).
//!
//! # Screens
//!
//! 1. **Boot Sequence** ([`boot`]): typed boot log, logo, folder name prompt
//! 2. **Numbers Panel** ([`numbers`]): digit grid, load animation, settings
//! 3. **Idle Screen** ([`idle`]): bouncing logo screensaver
//!
//! Each screen implements [`Screen`]. The manager owns them concretely and
//! picks one per frame from its [`UiState`](crate::ui::UiState) tag, so the
//! generic `draw` never needs dynamic dispatch.

pub mod boot;
pub mod idle;
pub mod numbers;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;

pub use boot::{BootSequence, BootState};
pub use idle::IdleScreen;
pub use numbers::{NumbersPanel, PanelSettings};

use crate::frame::Frame;

/// Uniform per-frame capability set of every screen.
pub trait Screen {
    /// One-time setup after the window exists (fonts, initial content).
    fn init(&mut self) {}

    /// Advance timers and react to input.
    fn update(
        &mut self,
        frame: &Frame,
    );

    /// Render into `target`, whose bounding box is the screen's window.
    fn draw<D>(
        &self,
        target: &mut D,
        frame: &Frame,
    ) where
        D: DrawTarget<Color = Rgb565>;
}
