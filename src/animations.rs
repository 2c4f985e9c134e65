//! Animation helpers shared by the screens.
//!
//! - **Typewriter reveal**: accumulators drained in fixed ticks, plus a
//!   char-safe prefix for drawing partially revealed text
//! - **Cursor blink**: square-wave visibility from total time
//! - **Digit jiggle**: sine-based offsets for the numbers grid
//! - **Row cascade**: which grid rows are visible during the load animation
//!
//! # Accumulators
//!
//! Timed events use a running total of frame time rather than frame counts:
//! ```text
//! acc += delta
//! while acc >= interval { acc -= interval; tick() }
//! ```
//! A stage therefore lasts the same wall time at 30 FPS and at 144 FPS.

// =============================================================================
// Jiggle Constants
// =============================================================================

/// Maximum jiggle offset in pixels at jiggle level 1.
const JIGGLE_AMPLITUDE: f32 = 2.0;

/// Jiggle oscillation speed in radians per second.
const JIGGLE_FREQUENCY: f32 = 3.0;

/// Phase offset between neighbouring digits so the grid does not move in lockstep.
const JIGGLE_PHASE_STEP: f32 = 1.7;

// =============================================================================
// Typewriter Reveal
// =============================================================================

/// Drain whole `interval`s from `accumulator` and return how many fit.
///
/// The remainder stays in the accumulator for the next frame. A
/// non-positive interval drains everything as a single tick.
pub fn take_ticks(
    accumulator: &mut f32,
    interval: f32,
) -> usize {
    if interval <= 0.0 {
        *accumulator = 0.0;
        return 1;
    }
    let ticks = (*accumulator / interval).floor();
    if ticks < 1.0 {
        return 0;
    }
    *accumulator = (*accumulator - ticks * interval).max(0.0);
    ticks as usize
}

/// First `chars` characters of `text` (UTF-8 aware, clamped to the length).
pub fn char_prefix(
    text: &str,
    chars: usize,
) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

// =============================================================================
// Cursor Blink
// =============================================================================

/// Block cursor visibility: on for the first half of each `period`.
#[inline]
pub fn cursor_visible(
    time: f32,
    period: f32,
) -> bool {
    time.rem_euclid(period) < period * 0.5
}

// =============================================================================
// Digit Jiggle
// =============================================================================

/// Pixel offset `(dx, dy)` for the digit at `index`.
///
/// `level` scales the amplitude; level 0 keeps the grid still.
pub fn jiggle_offset(
    time: f32,
    index: usize,
    level: u8,
) -> (i32, i32) {
    if level == 0 {
        return (0, 0);
    }
    let amplitude = JIGGLE_AMPLITUDE * f32::from(level);
    let phase = time * JIGGLE_FREQUENCY + index as f32 * JIGGLE_PHASE_STEP;
    ((phase.sin() * amplitude) as i32, ((phase * 1.3).cos() * amplitude) as i32)
}

// =============================================================================
// Row Cascade
// =============================================================================

/// Whether `row` of `rows` is shown at load-animation `progress` (0.0-1.0).
///
/// Rows appear top to bottom at evenly spaced points of the animation.
pub fn row_visible(
    progress: f32,
    row: usize,
    rows: usize,
) -> bool {
    if rows == 0 {
        return false;
    }
    progress >= row as f32 / rows as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_ticks_keeps_remainder() {
        let mut acc = 0.875;
        assert_eq!(take_ticks(&mut acc, 0.25), 3);
        assert_eq!(acc, 0.125);
    }

    #[test]
    fn test_take_ticks_below_interval() {
        let mut acc = 0.1;
        assert_eq!(take_ticks(&mut acc, 0.25), 0);
        assert_eq!(acc, 0.1);
    }

    #[test]
    fn test_take_ticks_huge_accumulator() {
        // Far beyond the point where subtracting the interval changes the value
        let mut acc = 300_000.0;
        let ticks = take_ticks(&mut acc, 0.01);
        assert!(ticks.abs_diff(30_000_000) <= 2, "Got {ticks} ticks");
        assert!((0.0..0.01).contains(&acc), "Remainder {acc} out of range");
    }

    #[test]
    fn test_take_ticks_zero_interval() {
        let mut acc = 3.0;
        assert_eq!(take_ticks(&mut acc, 0.0), 1);
        assert_eq!(acc, 0.0);
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("Cold Harbor", 0), "");
        assert_eq!(char_prefix("Cold Harbor", 4), "Cold");
        assert_eq!(char_prefix("Cold Harbor", 99), "Cold Harbor");
    }

    #[test]
    fn test_char_prefix_multibyte() {
        // Must not split inside a multi-byte character
        assert_eq!(char_prefix("Kier Eagan \u{2022} Lumon", 12), "Kier Eagan \u{2022}");
    }

    #[test]
    fn test_cursor_blink() {
        assert!(cursor_visible(0.0, 1.0));
        assert!(cursor_visible(0.25, 1.0));
        assert!(!cursor_visible(0.5, 1.0));
        assert!(!cursor_visible(0.75, 1.0));
        assert!(cursor_visible(3.125, 1.0));
    }

    #[test]
    fn test_jiggle_level_zero() {
        for i in 0..100 {
            assert_eq!(jiggle_offset(i as f32 * 0.1, i, 0), (0, 0));
        }
    }

    #[test]
    fn test_jiggle_bounded() {
        for i in 0..1000 {
            let (dx, dy) = jiggle_offset(i as f32 * 0.016, i, 3);
            let bound = (JIGGLE_AMPLITUDE * 3.0) as i32;
            assert!(dx.abs() <= bound && dy.abs() <= bound, "Frame {i}: ({dx}, {dy}) exceeds {bound}");
        }
    }

    #[test]
    fn test_row_cascade() {
        assert!(row_visible(0.0, 0, 4), "First row shows immediately");
        assert!(!row_visible(0.0, 1, 4));
        assert!(row_visible(0.5, 2, 4));
        assert!(!row_visible(0.5, 3, 4));
        assert!(row_visible(1.0, 3, 4));
        assert!(!row_visible(1.0, 0, 0));
    }
}
