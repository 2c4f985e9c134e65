//! Static asset loading: boot text and font glyph atlas.
//!
//! # Boot Text
//!
//! Plain text, one display line per file line. The boot sequence cannot run
//! without it, so a read failure is returned to the caller.
//!
//! # Font Atlas
//!
//! `embedded-graphics` renders bitmap fonts only, so the terminal font ships
//! as a PNG glyph sheet rather than a TTF:
//!
//! ```text
//! 16 columns x 6 rows = 96 cells, printable ASCII 0x20..=0x7E in order
//! ┌──┬──┬──┬─ ─┬──┐
//! │  │! │" │ … │/ │   row 0: 0x20..=0x2F
//! ├──┼──┼──┼─ ─┼──┤
//! │0 │1 │2 │ … │? │   row 1: 0x30..=0x3F
//! └──┴──┴──┴─ ─┴──┘   ...
//! ```
//!
//! Pixels that are both bright and opaque become glyph pixels. The packed
//! 1 bpp data is leaked once at startup so the resulting font is `'static`,
//! like the built-in `ProFont` fonts it stands in for.

use std::fs;
use std::path::Path;

use embedded_graphics::geometry::Size;
use embedded_graphics::image::ImageRaw;
use embedded_graphics::mono_font::mapping::ASCII;
use embedded_graphics::mono_font::{DecorationDimensions, MonoFont};
use image::RgbaImage;

use crate::error::AssetError;
use crate::styles::FALLBACK_FONT;

/// Glyph columns in the atlas.
const ATLAS_COLUMNS: u32 = 16;

/// Glyph rows in the atlas (96 cells for 95 printable characters).
const ATLAS_ROWS: u32 = 6;

/// Minimum channel value (and alpha) for an atlas pixel to count as set.
const GLYPH_THRESHOLD: u8 = 128;

// =============================================================================
// Boot Text
// =============================================================================

/// Read the boot text file into display lines.
pub fn load_text_lines(path: &Path) -> Result<Vec<String>, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

// =============================================================================
// Font Atlas
// =============================================================================

/// Load a glyph atlas from disk and turn it into a `'static` mono font.
pub fn load_font_atlas(path: &Path) -> Result<&'static MonoFont<'static>, AssetError> {
    let atlas = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    font_from_atlas(&atlas).ok_or_else(|| AssetError::FontAtlas {
        path: path.to_path_buf(),
        width: atlas.width(),
        height: atlas.height(),
    })
}

/// Load the atlas, or log the failure and fall back to the built-in font.
pub fn load_font_or_fallback(path: &Path) -> &'static MonoFont<'static> {
    match load_font_atlas(path) {
        Ok(font) => {
            log::info!("loaded font atlas {}", path.display());
            font
        }
        Err(e) => {
            log::error!("{e}, falling back to default font");
            FALLBACK_FONT
        }
    }
}

/// Build a font from an in-memory atlas. `None` if it is not a 16x6 grid.
pub fn font_from_atlas(atlas: &RgbaImage) -> Option<&'static MonoFont<'static>> {
    let (width, height) = atlas.dimensions();
    if width == 0 || height == 0 || width % ATLAS_COLUMNS != 0 || height % ATLAS_ROWS != 0 {
        return None;
    }
    let glyph = Size::new(width / ATLAS_COLUMNS, height / ATLAS_ROWS);

    let data: &'static [u8] = Box::leak(pack_1bpp(atlas).into_boxed_slice());
    let font = MonoFont {
        image: ImageRaw::new(data, width),
        glyph_mapping: &ASCII,
        character_size: glyph,
        character_spacing: 0,
        baseline: glyph.height.saturating_sub(glyph.height / 5 + 1),
        underline: DecorationDimensions::new(glyph.height.saturating_sub(glyph.height / 5), 1),
        strikethrough: DecorationDimensions::new(glyph.height / 2, 1),
    };
    Some(Box::leak(Box::new(font)))
}

/// Threshold to 1 bpp, rows padded to whole bytes, MSB first.
fn pack_1bpp(atlas: &RgbaImage) -> Vec<u8> {
    let (width, height) = atlas.dimensions();
    let stride = width.div_ceil(8) as usize;
    let mut data = vec![0u8; stride * height as usize];

    for (x, y, pixel) in atlas.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let bright = r.max(g).max(b) >= GLYPH_THRESHOLD;
        if bright && a >= GLYPH_THRESHOLD {
            data[y as usize * stride + (x / 8) as usize] |= 0x80 >> (x % 8);
        }
    }
    data
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use image::Rgba;

    use super::*;

    #[test]
    fn test_missing_text_is_error() {
        let err = load_text_lines(Path::new("/nonexistent/boot.txt")).unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
        assert!(err.to_string().contains("boot.txt"));
    }

    #[test]
    fn test_missing_font_falls_back() {
        let font = load_font_or_fallback(Path::new("/nonexistent/font.png"));
        assert_eq!(
            font.character_size, FALLBACK_FONT.character_size,
            "Missing atlas should yield the fallback font"
        );
    }

    #[test]
    fn test_missing_font_error_kind() {
        let err = load_font_atlas(&PathBuf::from("/nonexistent/font.png")).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_atlas_wrong_grid_rejected() {
        let atlas = RgbaImage::new(17, 12);
        assert!(font_from_atlas(&atlas).is_none());
        assert!(font_from_atlas(&RgbaImage::new(0, 0)).is_none());
    }

    #[test]
    fn test_atlas_glyph_size() {
        let atlas = RgbaImage::new(16 * 8, 6 * 10);
        let font = font_from_atlas(&atlas).unwrap();
        assert_eq!(font.character_size, Size::new(8, 10));
        assert!(font.baseline < 10);
    }

    #[test]
    fn test_pack_1bpp_threshold() {
        let mut atlas = RgbaImage::new(10, 2);
        atlas.put_pixel(0, 0, Rgba([255, 255, 255, 255])); // set
        atlas.put_pixel(9, 0, Rgba([200, 0, 0, 255])); // set (bright red)
        atlas.put_pixel(1, 1, Rgba([255, 255, 255, 10])); // transparent, not set
        atlas.put_pixel(2, 1, Rgba([40, 40, 40, 255])); // dark, not set

        let data = pack_1bpp(&atlas);
        // 10 px wide -> 2 bytes per row
        assert_eq!(data, vec![0b1000_0000, 0b0100_0000, 0, 0]);
    }
}
