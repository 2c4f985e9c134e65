//! Color constants for the MDR shell.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! Custom colors are converted from their 8-bit RGB design values by
//! dropping the low bits (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Background of every screen.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// The terminal blue used for text, cursor and logo tint.
/// RGB888 (157, 227, 235) -> RGB565 (19, 56, 29).
pub const LUMON_BLUE: Rgb565 = Rgb565::new(19, 56, 29);

/// Dimmed terminal blue for dividers and the settings window border.
/// RGB888 (78, 113, 117) -> RGB565 (9, 28, 14).
pub const LUMON_BLUE_DIM: Rgb565 = Rgb565::new(9, 28, 14);

/// Near-black navy fill of the settings window.
/// RGB888 (16, 24, 32) -> RGB565 (2, 6, 4).
pub const SETTINGS_BG: Rgb565 = Rgb565::new(2, 6, 4);
