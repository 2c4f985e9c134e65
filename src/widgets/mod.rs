//! Reusable drawing components.
//!
//! - [`primitives`]: rectangles, framed windows and top-left anchored text
//! - [`header`]: numbers panel title box and dividers
//!
//! Screens compose these; none of them hold state.

pub mod header;
pub mod primitives;

pub use header::{HEADER_HEIGHT, draw_header};
pub use primitives::{draw_text, draw_window_frame, fill_rect};
