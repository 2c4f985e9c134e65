//! Numbers panel header bar and divider lines.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ Cold Harbor                        42% Complete│  outlined title box
//! └───────────────────────────────────────────────┘
//! ═════════════════════════════════════════════════  double divider
//!   7  3  9  0  1 ...                                grid starts below
//! ```
//!
//! Layout follows the viewport width; heights are fixed.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use heapless::String;

use super::primitives::{draw_text, draw_window_frame};
use crate::colors::{BLACK, LUMON_BLUE, LUMON_BLUE_DIM};
use crate::styles::HEADER_STYLE;

/// Outer margin around the header box.
const HEADER_MARGIN: i32 = 20;

/// Height of the outlined title box.
const HEADER_BOX_HEIGHT: u32 = 44;

/// Gap between the title box and the first divider line.
const DIVIDER_GAP: i32 = 10;

/// Spacing of the double divider lines.
const DIVIDER_SPACING: i32 = 4;

/// Total vertical space taken by the header, grid content starts below this.
pub const HEADER_HEIGHT: u32 = (HEADER_MARGIN + HEADER_BOX_HEIGHT as i32 + DIVIDER_GAP + DIVIDER_SPACING) as u32 + 10;

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(LUMON_BLUE_DIM, 1);

/// Right-aligned, top-anchored, for the completion counter.
const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

/// Draw the header box with the folder name and a completion percentage.
pub fn draw_header<D>(
    target: &mut D,
    width: u32,
    folder_name: &str,
    percent_complete: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let box_width = width.saturating_sub(2 * HEADER_MARGIN as u32);
    if box_width == 0 {
        return;
    }
    let area = Rectangle::new(
        Point::new(HEADER_MARGIN, HEADER_MARGIN),
        Size::new(box_width, HEADER_BOX_HEIGHT),
    );
    draw_window_frame(target, area, BLACK, LUMON_BLUE);

    let text_y = HEADER_MARGIN + 11;
    draw_text(target, folder_name, Point::new(HEADER_MARGIN + 12, text_y), HEADER_STYLE);

    let mut complete: String<24> = String::new();
    let _ = write!(complete, "{percent_complete}% Complete");
    Text::with_text_style(
        &complete,
        Point::new(HEADER_MARGIN + box_width as i32 - 12, text_y),
        HEADER_STYLE,
        TOP_RIGHT,
    )
    .draw(target)
    .ok();

    draw_dividers(target, width);
}

/// Double horizontal rule between the header and the grid.
pub fn draw_dividers<D>(
    target: &mut D,
    width: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let y = HEADER_MARGIN + HEADER_BOX_HEIGHT as i32 + DIVIDER_GAP;
    let right = width as i32 - 1;
    for dy in [0, DIVIDER_SPACING] {
        Line::new(Point::new(0, y + dy), Point::new(right, y + dy))
            .into_styled(DIVIDER_STYLE)
            .draw(target)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    #[test]
    fn test_header_height_below_dividers() {
        let lowest_divider = HEADER_MARGIN + HEADER_BOX_HEIGHT as i32 + DIVIDER_GAP + DIVIDER_SPACING;
        assert!(HEADER_HEIGHT as i32 > lowest_divider, "Grid must start below the dividers");
    }

    #[test]
    fn test_header_too_narrow_draws_nothing() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        draw_header(&mut display, 40, "Cold Harbor", 0);
        assert_eq!(display.affected_area(), Rectangle::zero());
    }
}
