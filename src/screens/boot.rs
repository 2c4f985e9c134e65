//! Boot sequence: typed boot log, logo, folder name prompt.
//!
//! # Stages
//!
//! ```text
//! Text ──all lines typed──> Logo ──5 s──> FolderName ──typed + 2 s──> EndState
//! ```
//!
//! 1. **Text**: lines from the boot text asset appear one character per
//!    `time_per_letter`. Finished lines stay on screen; the active line shows
//!    its typed prefix. A line of `n` characters takes `n + 1` ticks, giving a
//!    short pause before the next line starts.
//! 2. **Logo**: the logo image, centered and scaled, for `logo_duration`.
//! 3. **FolderName**: `> ` plus the folder name, typed at the slower
//!    `folder_time_per_letter`. When complete, a block cursor blinks for
//!    `folder_wait` seconds.
//! 4. **EndState**: terminal, draws nothing. The manager switches away.
//!
//! All timing uses accumulators reset on stage entry, so each stage lasts the
//! same wall time at any frame rate. Stages only move forward.
//!
//! # Resizing
//!
//! The logo scale and the `speed` value follow the viewport width through
//! [`ViewportScale`].

use std::path::PathBuf;
use std::rc::Rc;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::Screen;
use crate::animations::{char_prefix, cursor_visible, take_ticks};
use crate::assets::{load_font_or_fallback, load_text_lines};
use crate::colors::LUMON_BLUE;
use crate::config::{BootTiming, Settings};
use crate::error::AssetError;
use crate::frame::Frame;
use crate::image_display::ImageDisplay;
use crate::styles::FALLBACK_FONT;
use crate::viewport::ViewportScale;
use crate::widgets::{draw_text, fill_rect};

// =============================================================================
// Layout Constants
// =============================================================================

/// Left edge of all boot text.
const TEXT_X: i32 = 20;

/// Top of the first text line.
const TEXT_Y: i32 = 50;

/// Vertical distance between text lines.
const LINE_SPACING: i32 = 30;

/// Gap between the end of the folder name and the cursor.
const CURSOR_GAP: i32 = 5;

const CURSOR_SIZE: Size = Size::new(10, 20);

/// Full on/off cycle of the cursor, seconds.
const CURSOR_BLINK_PERIOD: f32 = 1.0;

/// Logo scale at the reference width.
const BASE_SCALE: f32 = 0.5;

/// Secondary speed value at the reference width.
const BASE_SPEED: f32 = 0.5;

/// Prompt shown before the folder name.
const PROMPT: &str = "> ";

// =============================================================================
// Boot State
// =============================================================================

/// Stage of the boot sequence. Ordered: later stages compare greater.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub enum BootState {
    #[default]
    Text,
    Logo,
    FolderName,
    EndState,
}

// =============================================================================
// Boot Sequence
// =============================================================================

pub struct BootSequence {
    images: Rc<ImageDisplay>,
    lines: Vec<String>,
    folder_name: String,
    logo: String,
    font_path: PathBuf,
    font: &'static MonoFont<'static>,
    timing: BootTiming,

    state: BootState,
    /// Line being typed in the Text stage.
    line_index: usize,
    /// Characters typed on the active line (Text) or of the folder name (FolderName).
    line_progress: usize,
    /// Time not yet converted into typed characters.
    letter_accumulator: f32,
    logo_accumulator: f32,
    wait_accumulator: f32,

    viewport: ViewportScale,
}

impl BootSequence {
    /// Load the boot text from the asset directory.
    ///
    /// Fails if the boot text cannot be read: there is nothing to show
    /// without it.
    pub fn new(
        images: Rc<ImageDisplay>,
        settings: &Settings,
    ) -> Result<Self, AssetError> {
        let lines = load_text_lines(&settings.asset_path(&settings.boot_text))?;
        log::debug!("boot text: {} lines", lines.len());
        Ok(Self::with_lines(images, lines, settings))
    }

    /// Build from already loaded lines.
    pub fn with_lines(
        images: Rc<ImageDisplay>,
        lines: Vec<String>,
        settings: &Settings,
    ) -> Self {
        Self {
            images,
            lines,
            folder_name: settings.folder_name.clone(),
            logo: settings.logo.clone(),
            font_path: settings.asset_path(&settings.font_atlas),
            font: FALLBACK_FONT,
            timing: settings.timing,
            state: BootState::Text,
            line_index: 0,
            line_progress: 0,
            letter_accumulator: 0.0,
            logo_accumulator: 0.0,
            wait_accumulator: 0.0,
            viewport: ViewportScale::new(BASE_SCALE, BASE_SPEED),
        }
    }

    #[inline]
    pub const fn state(&self) -> BootState {
        self.state
    }

    #[inline]
    pub const fn scale(&self) -> f32 {
        self.viewport.scale()
    }

    #[inline]
    pub const fn speed(&self) -> f32 {
        self.viewport.speed()
    }

    /// Characters of `line` currently shown in the Text stage.
    pub fn revealed_chars(
        &self,
        line: usize,
    ) -> usize {
        let Some(text) = self.lines.get(line) else {
            return 0;
        };
        let len = text.chars().count();
        match line.cmp(&self.line_index) {
            core::cmp::Ordering::Less => len,
            core::cmp::Ordering::Equal => self.line_progress.min(len),
            core::cmp::Ordering::Greater => 0,
        }
    }

    /// Characters of the folder name currently shown.
    pub fn revealed_folder_chars(&self) -> usize {
        match self.state {
            BootState::Text | BootState::Logo => 0,
            BootState::FolderName | BootState::EndState => {
                self.line_progress.min(self.folder_name.chars().count())
            }
        }
    }

    /// Move forward to `next` and reset the per-stage timers.
    fn enter(
        &mut self,
        next: BootState,
    ) {
        debug_assert!(next > self.state, "boot sequence cannot go back");
        log::debug!("boot: {:?} -> {next:?}", self.state);
        self.state = next;
        // EndState keeps the typed folder name on record
        if next != BootState::EndState {
            self.line_progress = 0;
        }
        self.letter_accumulator = 0.0;
        self.logo_accumulator = 0.0;
        self.wait_accumulator = 0.0;
    }

    fn update_text(
        &mut self,
        delta: f32,
    ) {
        self.letter_accumulator += delta;
        let ticks = take_ticks(&mut self.letter_accumulator, self.timing.time_per_letter);

        for _ in 0..ticks {
            let Some(line) = self.lines.get(self.line_index) else {
                break;
            };
            self.line_progress += 1;
            if self.line_progress > line.chars().count() {
                self.line_index += 1;
                self.line_progress = 0;
            }
        }

        if self.line_index >= self.lines.len() {
            self.enter(BootState::Logo);
        }
    }

    fn update_logo(
        &mut self,
        delta: f32,
    ) {
        self.logo_accumulator += delta;
        if self.logo_accumulator >= self.timing.logo_duration {
            self.enter(BootState::FolderName);
        }
    }

    fn update_folder_name(
        &mut self,
        delta: f32,
    ) {
        let len = self.folder_name.chars().count();
        if self.line_progress < len {
            self.letter_accumulator += delta;
            let ticks = take_ticks(&mut self.letter_accumulator, self.timing.folder_time_per_letter);
            self.line_progress = (self.line_progress + ticks).min(len);
        } else {
            self.wait_accumulator += delta;
            if self.wait_accumulator >= self.timing.folder_wait {
                self.enter(BootState::EndState);
            }
        }
    }

    fn text_style(&self) -> MonoTextStyle<'static, Rgb565> {
        MonoTextStyle::new(self.font, LUMON_BLUE)
    }

    fn draw_text_state<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = self.text_style();
        for (i, line) in self.lines.iter().enumerate().take(self.line_index + 1) {
            let shown = char_prefix(line, self.revealed_chars(i));
            let y = TEXT_Y + i as i32 * LINE_SPACING;
            draw_text(target, shown, Point::new(TEXT_X, y), style);
        }
    }

    fn draw_logo_state<D>(
        &self,
        target: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let window = target.bounding_box().size;
        let logo = self.images.scaled_size(&self.logo, self.scale());
        let top_left = Point::new(
            (window.width as i32 - logo.width as i32) / 2,
            (window.height as i32 - logo.height as i32) / 2,
        );
        self.images.draw(target, &self.logo, top_left, self.scale(), LUMON_BLUE);
    }

    fn draw_folder_name_state<D>(
        &self,
        target: &mut D,
        time: f32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut prompt = String::with_capacity(PROMPT.len() + self.folder_name.len());
        prompt.push_str(PROMPT);
        prompt.push_str(char_prefix(&self.folder_name, self.revealed_folder_chars()));

        let end = draw_text(target, &prompt, Point::new(TEXT_X, TEXT_Y), self.text_style());

        if cursor_visible(time, CURSOR_BLINK_PERIOD) {
            fill_rect(target, Point::new(end.x + CURSOR_GAP, TEXT_Y), CURSOR_SIZE, LUMON_BLUE);
        }
    }
}

impl Screen for BootSequence {
    /// Load the terminal font, falling back to the built-in one.
    fn init(&mut self) {
        self.font = load_font_or_fallback(&self.font_path);
    }

    fn update(
        &mut self,
        frame: &Frame,
    ) {
        self.viewport.apply(frame.viewport);

        match self.state {
            BootState::Text => self.update_text(frame.delta),
            BootState::Logo => self.update_logo(frame.delta),
            BootState::FolderName => self.update_folder_name(frame.delta),
            BootState::EndState => {}
        }
    }

    fn draw<D>(
        &self,
        target: &mut D,
        frame: &Frame,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        match self.state {
            BootState::Text => self.draw_text_state(target),
            BootState::Logo => self.draw_logo_state(target),
            BootState::FolderName => self.draw_folder_name_state(target, frame.time),
            BootState::EndState => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::primitives::Rectangle;
    use image::{Rgba, RgbaImage};

    use super::*;

    /// Exactly representable intervals so accumulator math is exact.
    const TEST_TIMING: BootTiming = BootTiming {
        time_per_letter: 0.125,
        folder_time_per_letter: 0.25,
        logo_duration: 5.0,
        folder_wait: 2.0,
    };

    fn settings() -> Settings {
        Settings {
            timing: TEST_TIMING,
            folder_name: "Cold".to_owned(),
            ..Settings::default()
        }
    }

    fn boot(lines: &[&str]) -> BootSequence {
        let images = Rc::new(ImageDisplay::new("/nonexistent"));
        images.insert("lumon-logo.png", RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 255])));
        BootSequence::with_lines(images, lines.iter().map(|s| (*s).to_owned()).collect(), &settings())
    }

    fn run(
        boot: &mut BootSequence,
        frames: usize,
        delta: f32,
    ) {
        for _ in 0..frames {
            boot.update(&Frame::new(delta, 0.0));
        }
    }

    /// Run until the state changes, returning the number of frames taken.
    fn frames_until_leaving(
        boot: &mut BootSequence,
        state: BootState,
        delta: f32,
    ) -> usize {
        let mut frames = 0;
        while boot.state() == state {
            boot.update(&Frame::new(delta, 0.0));
            frames += 1;
            assert!(frames < 100_000, "stuck in {state:?}");
        }
        frames
    }

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        display
    }

    // -------------------------------------------------------------------------
    // Text Stage
    // -------------------------------------------------------------------------

    #[test]
    fn test_starts_in_text() {
        let boot = boot(&["hello"]);
        assert_eq!(boot.state(), BootState::Text);
        assert_eq!(boot.revealed_chars(0), 0);
    }

    #[test]
    fn test_revealed_chars_follow_elapsed_time() {
        let mut boot = boot(&["MACRODATA"]);
        // floor(elapsed / interval), clamped to the line length (9)
        for frame in 1..=9 {
            boot.update(&Frame::new(0.125, 0.0));
            assert_eq!(boot.revealed_chars(0), frame);
        }
    }

    #[test]
    fn test_revealed_chars_independent_of_frame_split() {
        let mut coarse = boot(&["REFINEMENT"]);
        let mut fine = boot(&["REFINEMENT"]);

        run(&mut coarse, 1, 0.75); // 6 intervals in one frame
        run(&mut fine, 12, 0.0625); // same time in 12 frames

        assert_eq!(coarse.revealed_chars(0), 6);
        assert_eq!(fine.revealed_chars(0), 6);
    }

    #[test]
    fn test_completed_lines_shown_in_full() {
        let mut boot = boot(&["abc", "defgh"]);
        // "abc" takes 4 ticks (3 chars + pause), then 2 chars of "defgh"
        run(&mut boot, 6, 0.125);

        assert_eq!(boot.revealed_chars(0), 3);
        assert_eq!(boot.revealed_chars(1), 2);
    }

    #[test]
    fn test_text_to_logo_when_all_lines_typed() {
        let mut boot = boot(&["ab", "c"]);
        // "ab" = 3 ticks, "c" = 2 ticks
        run(&mut boot, 4, 0.125);
        assert_eq!(boot.state(), BootState::Text);
        run(&mut boot, 1, 0.125);
        assert_eq!(boot.state(), BootState::Logo);
    }

    #[test]
    fn test_empty_text_goes_straight_to_logo() {
        let mut boot = boot(&[]);
        boot.update(&Frame::new(0.0, 0.0));
        assert_eq!(boot.state(), BootState::Logo);
    }

    #[test]
    fn test_missing_boot_text_is_error() {
        let images = Rc::new(ImageDisplay::new("/nonexistent"));
        let settings = Settings::default().with_asset_dir("/nonexistent");
        assert!(BootSequence::new(images, &settings).is_err());
    }

    // -------------------------------------------------------------------------
    // Logo Stage
    // -------------------------------------------------------------------------

    #[test]
    fn test_logo_duration_independent_of_frame_rate() {
        for (delta, expected_frames) in [(0.25, 20), (0.5, 10), (0.125, 40), (1.0, 5)] {
            let mut boot = boot(&[]);
            boot.update(&Frame::new(0.0, 0.0));
            assert_eq!(boot.state(), BootState::Logo);

            let frames = frames_until_leaving(&mut boot, BootState::Logo, delta);
            assert_eq!(frames, expected_frames, "delta {delta}");
            assert_eq!(frames as f32 * delta, TEST_TIMING.logo_duration);
        }
    }

    #[test]
    fn test_logo_resets_reveal_counter() {
        let mut boot = boot(&["abc"]);
        run(&mut boot, 4, 0.125);
        assert_eq!(boot.state(), BootState::Logo);
        frames_until_leaving(&mut boot, BootState::Logo, 0.5);

        assert_eq!(boot.state(), BootState::FolderName);
        assert_eq!(boot.revealed_folder_chars(), 0);
    }

    // -------------------------------------------------------------------------
    // Folder Name Stage
    // -------------------------------------------------------------------------

    #[test]
    fn test_folder_name_typed_then_waits() {
        let mut boot = boot(&[]);
        boot.update(&Frame::new(0.0, 0.0));
        frames_until_leaving(&mut boot, BootState::Logo, 1.0);

        // "Cold" at 0.25 s per letter
        run(&mut boot, 3, 0.25);
        assert_eq!(boot.revealed_folder_chars(), 3);
        run(&mut boot, 1, 0.25);
        assert_eq!(boot.revealed_folder_chars(), 4);

        // Then a 2 s wait
        run(&mut boot, 7, 0.25);
        assert_eq!(boot.state(), BootState::FolderName);
        run(&mut boot, 1, 0.25);
        assert_eq!(boot.state(), BootState::EndState);
    }

    #[test]
    fn test_folder_reveal_clamped_on_long_frame() {
        let mut boot = boot(&[]);
        boot.update(&Frame::new(0.0, 0.0));
        frames_until_leaving(&mut boot, BootState::Logo, 1.0);

        boot.update(&Frame::new(10.0, 0.0));
        assert_eq!(boot.revealed_folder_chars(), 4, "Never more than the name length");
    }

    // -------------------------------------------------------------------------
    // Monotonic Progression
    // -------------------------------------------------------------------------

    #[test]
    fn test_states_never_regress() {
        for delta in [0.016, 0.1, 0.3, 2.5] {
            let mut boot = boot(&["first line", "second"]);
            let mut seen = vec![boot.state()];
            for _ in 0..2000 {
                let before = boot.state();
                boot.update(&Frame::new(delta, 0.0));
                assert!(boot.state() >= before, "{:?} -> {:?}", before, boot.state());
                if seen.last() != Some(&boot.state()) {
                    seen.push(boot.state());
                }
            }
            assert_eq!(
                seen,
                vec![BootState::Text, BootState::Logo, BootState::FolderName, BootState::EndState],
                "delta {delta}"
            );
        }
    }

    #[test]
    fn test_end_state_keeps_folder_name() {
        let mut boot = boot(&[]);
        run(&mut boot, 100, 1.0);
        assert_eq!(boot.state(), BootState::EndState);
        assert_eq!(boot.revealed_folder_chars(), 4);
    }

    #[test]
    fn test_huge_delta_finishes_text() {
        let mut boot = boot(&["abc", "defg"]);
        boot.update(&Frame::new(300_000.0, 0.0));
        assert_eq!(boot.state(), BootState::Logo);
    }

    #[test]
    fn test_end_state_is_terminal() {
        let mut boot = boot(&[]);
        run(&mut boot, 100, 1.0);
        assert_eq!(boot.state(), BootState::EndState);
        run(&mut boot, 100, 1.0);
        assert_eq!(boot.state(), BootState::EndState);
    }

    // -------------------------------------------------------------------------
    // Resizing
    // -------------------------------------------------------------------------

    #[test]
    fn test_resize_scales_and_restores() {
        let mut boot = boot(&["x"]);
        assert_eq!(boot.scale(), 0.5);
        assert_eq!(boot.speed(), 0.5);

        boot.update(&Frame::new(0.0, 0.0).with_viewport(Size::new(640, 360)));
        assert_eq!(boot.scale(), 0.25);
        assert_eq!(boot.speed(), 0.25);

        boot.update(&Frame::new(0.0, 0.0).with_viewport(Size::new(1280, 720)));
        assert_eq!(boot.scale(), 0.5);
        assert_eq!(boot.speed(), 0.5);
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_logo_is_centered() {
        let mut boot = boot(&[]);
        boot.update(&Frame::new(0.0, 0.0));
        assert_eq!(boot.state(), BootState::Logo);
        let mut display = mock();

        boot.draw(&mut display, &Frame::new(0.0, 0.0));

        // 40x20 logo at scale 0.5 -> 20x10, centered in 64x64
        assert_eq!(display.affected_area(), Rectangle::new(Point::new(22, 27), Size::new(20, 10)));
    }

    #[test]
    fn test_cursor_blinks() {
        let mut boot = boot(&[]);
        boot.update(&Frame::new(0.0, 0.0));
        frames_until_leaving(&mut boot, BootState::Logo, 1.0);
        run(&mut boot, 4, 0.25);

        // Shift the scene so the end of the prompt and the cursor land on the mock display
        let draw_at = |time: f32| {
            let mut display = mock();
            boot.draw(&mut display.translated(Point::new(-60, -45)), &Frame::new(0.0, time));
            display
        };

        let on = draw_at(0.25);
        let off = draw_at(0.75);
        assert_ne!(on.affected_area(), off.affected_area(), "Cursor should toggle the drawn area");
    }

    #[test]
    fn test_end_state_draws_nothing() {
        let mut boot = boot(&[]);
        run(&mut boot, 100, 1.0);
        let mut display = mock();
        boot.draw(&mut display, &Frame::new(0.0, 0.25));
        assert_eq!(display.affected_area(), Rectangle::zero());
    }
}
