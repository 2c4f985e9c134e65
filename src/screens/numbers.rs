//! Numbers panel: header, jiggling digit grid and the settings it exposes.
//!
//! The grid content is pseudo-random and regenerated whenever its size
//! changes. A load animation reveals rows top to bottom after the panel is
//! entered from the idle screen.

use core::fmt::Write;
use std::rc::Rc;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::Screen;
use crate::animations::{jiggle_offset, row_visible};
use crate::colors::LUMON_BLUE_DIM;
use crate::frame::{Frame, SettingsNav};
use crate::image_display::ImageDisplay;
use crate::styles::{CENTERED, DIGIT_STYLE, HEADER_STYLE, HINT_STYLE, SETTINGS_STYLE};
use crate::widgets::{HEADER_HEIGHT, draw_header, draw_text};

/// Duration of the row-by-row reveal.
pub const LOAD_ANIMATION_SECS: f32 = 1.5;

/// Space kept free under the grid for the footer logo.
const FOOTER_HEIGHT: u32 = 40;

const FOOTER_LOGO_SCALE: f32 = 0.08;

const RNG_SEED: u32 = 0x4D44_5221;

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

// =============================================================================
// Settings
// =============================================================================

/// One adjustable entry in the settings window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SettingField {
    #[default]
    Columns,
    Rows,
    Jiggle,
}

impl SettingField {
    const ALL: [Self; 3] = [Self::Columns, Self::Rows, Self::Jiggle];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Columns => "Columns",
            Self::Rows => "Rows",
            Self::Jiggle => "Jiggle",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Columns => Self::Rows,
            Self::Rows => Self::Jiggle,
            Self::Jiggle => Self::Columns,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Columns => Self::Jiggle,
            Self::Rows => Self::Columns,
            Self::Jiggle => Self::Rows,
        }
    }
}

/// Grid shape and motion, adjustable from the settings window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSettings {
    pub columns: u8,
    pub rows: u8,
    pub jiggle: u8,
}

impl PanelSettings {
    pub const COLUMNS: (u8, u8) = (4, 24);
    pub const ROWS: (u8, u8) = (2, 12);
    pub const JIGGLE: (u8, u8) = (0, 5);

    pub const DEFAULT: Self = Self {
        columns: 12,
        rows: 6,
        jiggle: 1,
    };

    pub const fn get(
        &self,
        field: SettingField,
    ) -> u8 {
        match field {
            SettingField::Columns => self.columns,
            SettingField::Rows => self.rows,
            SettingField::Jiggle => self.jiggle,
        }
    }

    /// Move `field` one step up or down, clamped to its range.
    /// Returns true if the value changed.
    pub fn step(
        &mut self,
        field: SettingField,
        increase: bool,
    ) -> bool {
        let ((min, max), value) = match field {
            SettingField::Columns => (Self::COLUMNS, &mut self.columns),
            SettingField::Rows => (Self::ROWS, &mut self.rows),
            SettingField::Jiggle => (Self::JIGGLE, &mut self.jiggle),
        };
        let next = if increase {
            value.saturating_add(1).min(max)
        } else {
            value.saturating_sub(1).max(min)
        };
        let changed = next != *value;
        *value = next;
        changed
    }

    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Panel
// =============================================================================

pub struct NumbersPanel {
    images: Rc<ImageDisplay>,
    folder_name: String<64>,
    logo: std::string::String,
    settings: PanelSettings,
    selected: SettingField,
    digits: Vec<u8>,
    rng: u32,
    /// Jiggle clock, seconds since the panel was created.
    time: f32,
    /// Reveal progress 0.0-1.0 while the load animation runs.
    load_progress: Option<f32>,
    load_count: u32,
}

impl NumbersPanel {
    pub fn new(
        images: Rc<ImageDisplay>,
        folder_name: &str,
        logo: &str,
    ) -> Self {
        let mut name = String::new();
        for c in folder_name.chars() {
            if name.push(c).is_err() {
                log::warn!("Folder name truncated to {} bytes", name.len());
                break;
            }
        }
        Self {
            images,
            folder_name: name,
            logo: logo.to_owned(),
            settings: PanelSettings::DEFAULT,
            selected: SettingField::default(),
            digits: Vec::new(),
            rng: RNG_SEED,
            time: 0.0,
            load_progress: None,
            load_count: 0,
        }
    }

    /// Restart the row-by-row reveal.
    pub fn trigger_load_animation(&mut self) {
        self.load_progress = Some(0.0);
        self.load_count += 1;
        log::debug!("Load animation #{}", self.load_count);
    }

    #[inline]
    pub const fn load_animation_count(&self) -> u32 {
        self.load_count
    }

    #[inline]
    pub const fn is_loading(&self) -> bool {
        self.load_progress.is_some()
    }

    #[inline]
    pub const fn settings(&self) -> PanelSettings {
        self.settings
    }

    #[inline]
    pub const fn selected(&self) -> SettingField {
        self.selected
    }

    /// Rows shown this frame; all of them unless the load animation runs.
    pub fn visible_rows(&self) -> usize {
        let rows = self.settings.rows as usize;
        let progress = self.load_progress.unwrap_or(1.0);
        (0..rows).take_while(|&row| row_visible(progress, row, rows)).count()
    }

    /// Share of the grid loaded, shown in the header.
    pub fn percent_complete(&self) -> u8 {
        (self.load_progress.unwrap_or(1.0).clamp(0.0, 1.0) * 100.0) as u8
    }

    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Apply one settings navigation step.
    pub fn adjust_setting(
        &mut self,
        nav: SettingsNav,
    ) {
        match nav {
            SettingsNav::Up => self.selected = self.selected.prev(),
            SettingsNav::Down => self.selected = self.selected.next(),
            SettingsNav::Left | SettingsNav::Right => {
                let field = self.selected;
                if self.settings.step(field, nav == SettingsNav::Right) {
                    log::debug!("{} -> {}", field.label(), self.settings.get(field));
                    if field != SettingField::Jiggle {
                        self.regenerate();
                    }
                }
            }
        }
    }

    /// Settings list with a marker on the selected entry.
    pub fn draw_settings<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_text(target, "Settings", Point::new(12, 10), HEADER_STYLE);

        for (i, field) in SettingField::ALL.into_iter().enumerate() {
            let mut line: String<32> = String::new();
            let marker = if field == self.selected { '>' } else { ' ' };
            let _ = write!(line, "{marker} {:<8}{:>3}", field.label(), self.settings.get(field));
            draw_text(target, &line, Point::new(12, 44 + 22 * i as i32), SETTINGS_STYLE);
        }

        let height = target.bounding_box().size.height as i32;
        draw_text(target, "Up/Down select  Left/Right change", Point::new(12, height - 20), HINT_STYLE);
    }

    fn regenerate(&mut self) {
        let count = self.settings.cell_count();
        self.digits.clear();
        self.digits.reserve(count);
        for _ in 0..count {
            self.digits.push((xorshift32(&mut self.rng) % 10) as u8);
        }
    }
}

/// Marsaglia xorshift, 32-bit state.
fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

impl Screen for NumbersPanel {
    fn init(&mut self) {
        self.regenerate();
        log::info!(
            "Numbers panel {}x{} for {}",
            self.settings.columns,
            self.settings.rows,
            self.folder_name
        );
    }

    fn update(
        &mut self,
        frame: &Frame,
    ) {
        self.time += frame.delta;

        if let Some(progress) = self.load_progress.as_mut() {
            *progress += frame.delta / LOAD_ANIMATION_SECS;
            if *progress >= 1.0 {
                self.load_progress = None;
            }
        }
    }

    fn draw<D>(
        &self,
        target: &mut D,
        _frame: &Frame,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let size = target.bounding_box().size;
        draw_header(target, size.width, &self.folder_name, self.percent_complete());

        let columns = self.settings.columns as usize;
        let rows = i32::from(self.settings.rows);
        let grid_height = size.height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
        let cell_w = size.width as i32 / columns as i32;
        let cell_h = grid_height as i32 / rows;

        for row in 0..self.visible_rows() {
            for col in 0..columns {
                let index = row * columns + col;
                let Some(&digit) = self.digits.get(index) else {
                    return;
                };
                let (dx, dy) = jiggle_offset(self.time, index, self.settings.jiggle);
                let center = Point::new(
                    col as i32 * cell_w + cell_w / 2 + dx,
                    HEADER_HEIGHT as i32 + row as i32 * cell_h + cell_h / 2 + dy,
                );
                Text::with_text_style(DIGITS[digit as usize], center, DIGIT_STYLE, CENTERED)
                    .draw(target)
                    .ok();
            }
        }

        let logo = self.images.scaled_size(&self.logo, FOOTER_LOGO_SCALE);
        let footer = Point::new(
            (size.width as i32 - logo.width as i32) / 2,
            size.height as i32 - (FOOTER_HEIGHT as i32 + logo.height as i32) / 2,
        );
        self.images.draw(target, &self.logo, footer, FOOTER_LOGO_SCALE, LUMON_BLUE_DIM);
    }
}
