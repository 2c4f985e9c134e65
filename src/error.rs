//! Asset loading errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The atlas cannot be split into a 16x6 grid of equally sized glyphs.
    #[error("font atlas {} is {width}x{height}, expected a 16x6 glyph grid", .path.display())]
    FontAtlas { path: PathBuf, width: u32, height: u32 },
}
