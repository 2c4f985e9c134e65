//! Top-level screen switching and the settings overlay.
//!
//! Press `I` to switch between the idle screen and the numbers panel, `Tab`
//! to show the settings window. The boot sequence runs once at startup and
//! hands over to the numbers panel when it ends.
//!
//! # States
//!
//! - [`UiState::BootSequence`]: initial, left only forward
//! - [`UiState::NumberPanel`]: digit grid
//! - [`UiState::Idle`]: bouncing logo, a click returns to the panel

use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{BLACK, LUMON_BLUE, SETTINGS_BG};
use crate::config::{SETTINGS_WIDTH_RATIO, Settings};
use crate::error::AssetError;
use crate::frame::Frame;
use crate::image_display::ImageDisplay;
use crate::screens::{BootSequence, BootState, IdleScreen, NumbersPanel, Screen};
use crate::widgets::{draw_window_frame, fill_rect};

/// Screen shown in the main window.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum UiState {
    Idle,
    NumberPanel,
    #[default]
    BootSequence,
}

impl UiState {
    /// Target of the idle key: idle goes back to the panel, anything else idles.
    #[inline]
    pub const fn toggle_idle(self) -> Self {
        match self {
            Self::Idle => Self::NumberPanel,
            Self::NumberPanel | Self::BootSequence => Self::Idle,
        }
    }
}

pub struct UiManager {
    boot: BootSequence,
    idle: IdleScreen,
    numbers: NumbersPanel,
    state: UiState,
    settings_mode: bool,
}

impl UiManager {
    /// Build all screens around one shared image collaborator.
    ///
    /// Fails if the boot text cannot be loaded.
    pub fn new(settings: &Settings) -> Result<Self, AssetError> {
        let images = Rc::new(ImageDisplay::new(&settings.asset_dir));
        let boot = BootSequence::new(Rc::clone(&images), settings)?;
        Ok(Self::with_boot(images, boot, settings))
    }

    /// Build around an already constructed boot sequence.
    pub fn with_boot(
        images: Rc<ImageDisplay>,
        boot: BootSequence,
        settings: &Settings,
    ) -> Self {
        Self {
            idle: IdleScreen::new(Rc::clone(&images), &settings.logo),
            numbers: NumbersPanel::new(images, &settings.folder_name, &settings.logo),
            boot,
            state: UiState::default(),
            settings_mode: false,
        }
    }

    /// Numbers panel first, then the boot font.
    pub fn init(&mut self) {
        self.numbers.init();
        self.boot.init();
    }

    #[inline]
    pub const fn state(&self) -> UiState {
        self.state
    }

    #[inline]
    pub const fn settings_mode(&self) -> bool {
        self.settings_mode
    }

    #[inline]
    pub const fn numbers(&self) -> &NumbersPanel {
        &self.numbers
    }

    #[inline]
    pub const fn boot(&self) -> &BootSequence {
        &self.boot
    }

    fn enter(
        &mut self,
        next: UiState,
    ) {
        if next != self.state {
            log::info!("{:?} -> {next:?}", self.state);
            self.state = next;
        }
    }

    /// Handle this frame's input, then advance the active screen.
    pub fn update(
        &mut self,
        frame: &Frame,
    ) {
        let input = frame.input;

        if input.toggle_settings {
            self.settings_mode = !self.settings_mode;
            log::debug!("Settings window {}", if self.settings_mode { "shown" } else { "hidden" });
        }
        if input.toggle_idle {
            self.enter(self.state.toggle_idle());
        }
        if self.settings_mode
            && let Some(nav) = input.settings_nav
        {
            self.numbers.adjust_setting(nav);
        }

        match self.state {
            UiState::Idle => {
                self.idle.update(frame);
                if input.left_click {
                    self.enter(UiState::NumberPanel);
                    self.numbers.trigger_load_animation();
                }
            }
            UiState::NumberPanel => self.numbers.update(frame),
            UiState::BootSequence => {
                self.boot.update(frame);
                if self.boot.state() == BootState::EndState {
                    self.enter(UiState::NumberPanel);
                }
            }
        }
    }

    /// Clear the viewport, draw the active screen and the settings window on top.
    pub fn draw<D>(
        &self,
        target: &mut D,
        frame: &Frame,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        fill_rect(target, Point::zero(), frame.viewport, BLACK);

        match self.state {
            UiState::Idle => self.idle.draw(target, frame),
            UiState::NumberPanel => self.numbers.draw(target, frame),
            UiState::BootSequence => self.boot.draw(target, frame),
        }

        if self.settings_mode {
            let width = (frame.viewport.width as f32 * SETTINGS_WIDTH_RATIO) as u32;
            let area = Rectangle::new(Point::zero(), Size::new(width, frame.viewport.height));
            draw_window_frame(target, area, SETTINGS_BG, LUMON_BLUE);
            self.numbers.draw_settings(&mut target.cropped(&area));
        }
    }
}
