//! Low-level drawing primitives shared across screens.
//!
//! All functions are generic over the draw target, so screens can render into
//! the simulator window, a cropped sub-window, or a `MockDisplay` in tests.
//! Draw errors are ignored (`.ok()`): the simulator target is infallible and
//! a failed frame is simply redrawn on the next one.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::Text;

use crate::styles::TOP_LEFT;

/// Fill a rectangle with a solid color.
pub fn fill_rect<D>(
    target: &mut D,
    top_left: Point,
    size: Size,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(top_left, size)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
        .ok();
}

/// Fill a rectangle and outline it with a 1px border inside its edge.
pub fn draw_window_frame<D>(
    target: &mut D,
    area: Rectangle,
    fill: Rgb565,
    border: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyleBuilder::new()
        .fill_color(fill)
        .stroke_color(border)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    area.into_styled(style).draw(target).ok();
}

/// Draw text with its top-left corner at `top_left`.
///
/// Returns the position right after the last character, which is where a
/// text cursor belongs.
pub fn draw_text<D>(
    target: &mut D,
    text: &str,
    top_left: Point,
    style: MonoTextStyle<'_, Rgb565>,
) -> Point
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, top_left, style, TOP_LEFT)
        .draw(target)
        .unwrap_or(top_left)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::colors::LUMON_BLUE;

    fn mock() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);
        display.set_allow_overdraw(true);
        display
    }

    #[test]
    fn test_draw_text_returns_end_position() {
        let mut display = mock();
        let style = MonoTextStyle::new(&FONT_6X10, LUMON_BLUE);

        let end = draw_text(&mut display, "> Cold", Point::new(2, 3), style);

        assert_eq!(end.x, 2 + 6 * 6, "Six 6px-wide characters");
    }

    #[test]
    fn test_draw_text_empty() {
        let mut display = mock();
        let style = MonoTextStyle::new(&FONT_6X10, LUMON_BLUE);

        let end = draw_text(&mut display, "", Point::new(5, 5), style);

        assert_eq!(end.x, 5);
        assert_eq!(display.affected_area(), Rectangle::zero());
    }

    #[test]
    fn test_fill_rect() {
        let mut display = mock();
        fill_rect(&mut display, Point::new(1, 2), Size::new(3, 4), LUMON_BLUE);
        assert_eq!(display.affected_area(), Rectangle::new(Point::new(1, 2), Size::new(3, 4)));
    }

    #[test]
    fn test_window_frame_covers_area() {
        let mut display = mock();
        let area = Rectangle::new(Point::new(0, 0), Size::new(10, 10));
        draw_window_frame(&mut display, area, Rgb565::BLACK, LUMON_BLUE);
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(LUMON_BLUE));
        assert_eq!(display.get_pixel(Point::new(5, 5)), Some(Rgb565::BLACK));
    }
}
