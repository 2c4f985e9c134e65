//! Per-frame context handed to every screen.
//!
//! The window loop polls events once per frame and folds them into an
//! [`Input`]. Screens never see backend events directly, which keeps them
//! testable without a window.

use embedded_graphics::geometry::Size;

use crate::config::DEFAULT_VIEWPORT;

/// Arrow-key navigation inside the settings window.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettingsNav {
    Up,
    Down,
    Left,
    Right,
}

/// Actions polled this frame. Each flag is an edge (pressed this frame).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Input {
    /// `Tab`: show/hide the settings overlay.
    pub toggle_settings: bool,
    /// `I`: switch between idle screen and numbers panel.
    pub toggle_idle: bool,
    /// Left mouse button went down.
    pub left_click: bool,
    pub settings_nav: Option<SettingsNav>,
}

impl Input {
    /// True if nothing happened this frame.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Timing, viewport and input for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the loop started. Drives blinking and jiggle.
    pub time: f32,
    pub viewport: Size,
    pub input: Input,
}

impl Frame {
    /// A frame with no input on the default viewport.
    pub const fn new(delta: f32, time: f32) -> Self {
        Self {
            delta,
            time,
            viewport: DEFAULT_VIEWPORT,
            input: Input {
                toggle_settings: false,
                toggle_idle: false,
                left_click: false,
                settings_nav: None,
            },
        }
    }

    #[must_use]
    pub const fn with_viewport(mut self, viewport: Size) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub const fn with_input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }
}
