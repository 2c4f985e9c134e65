//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! Screens lay text out the way the terminal did: positions are the top-left
//! corner of the text, not the baseline. [`TOP_LEFT`] encodes that once.
//!
//! # Dynamic Fonts
//!
//! The boot font is chosen at runtime (atlas or fallback), so the boot screen
//! builds `MonoTextStyle::new(font, LUMON_BLUE)` itself. Everything else uses
//! the const styles below.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{LUMON_BLUE, LUMON_BLUE_DIM};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Left-aligned, anchored at the top edge of the glyph box.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).baseline(Baseline::Top).build();

/// Centered on both axes. Used for grid digits.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Terminal font used when the font atlas cannot be loaded.
pub const FALLBACK_FONT: &MonoFont<'static> = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Grid digits on the numbers panel.
pub const DIGIT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, LUMON_BLUE);

/// Header text on the numbers panel.
pub const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, LUMON_BLUE);

/// Settings window entries.
pub const SETTINGS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, LUMON_BLUE);

/// Small dim hint text (key bindings).
pub const HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LUMON_BLUE_DIM);
