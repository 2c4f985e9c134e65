//! Image loading and tinted, scaled drawing.
//!
//! One `ImageDisplay` is created by the UI manager and shared with every
//! screen through an `Rc`. Images are decoded on first use and cached by file
//! name. Failed loads are cached too, so a missing file is logged once and
//! then silently drawn as nothing.
//!
//! # Drawing
//!
//! Images are RGBA8. Each destination pixel samples the source with
//! nearest-neighbour scaling and is multiplied by the tint color and the
//! source alpha, as if blended over the black background:
//!
//! ```text
//! out.c = tint.c * src.c * src.a / (255 * 255)
//! ```
//!
//! Fully transparent source pixels are skipped so the background shows
//! through.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use image::RgbaImage;

use crate::error::AssetError;

pub struct ImageDisplay {
    root: PathBuf,
    cache: RefCell<HashMap<String, Option<Rc<RgbaImage>>>>,
}

impl ImageDisplay {
    /// Images are resolved relative to `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Pre-seed the cache with an already decoded image.
    pub fn insert(
        &self,
        name: &str,
        image: RgbaImage,
    ) {
        self.cache.borrow_mut().insert(name.to_owned(), Some(Rc::new(image)));
    }

    fn load(
        &self,
        name: &str,
    ) -> Result<RgbaImage, AssetError> {
        let path = self.root.join(name);
        let image = image::open(&path).map_err(|source| AssetError::Decode { path, source })?;
        Ok(image.to_rgba8())
    }

    /// Cached image, loading it on first request.
    fn get(
        &self,
        name: &str,
    ) -> Option<Rc<RgbaImage>> {
        if let Some(entry) = self.cache.borrow().get(name) {
            return entry.clone();
        }
        let entry = match self.load(name) {
            Ok(image) => {
                log::debug!("loaded image {name} ({}x{})", image.width(), image.height());
                Some(Rc::new(image))
            }
            Err(e) => {
                log::warn!("{e}");
                None
            }
        };
        self.cache.borrow_mut().insert(name.to_owned(), entry.clone());
        entry
    }

    /// Unscaled image size, zero if the image is unavailable.
    pub fn image_size(
        &self,
        name: &str,
    ) -> Size {
        self.get(name).map_or(Size::zero(), |image| Size::new(image.width(), image.height()))
    }

    /// Size of the image at `scale`, as drawn by [`ImageDisplay::draw`].
    pub fn scaled_size(
        &self,
        name: &str,
        scale: f32,
    ) -> Size {
        scaled(self.image_size(name), scale)
    }

    /// Draw `name` with its top-left corner at `top_left`.
    pub fn draw<D>(
        &self,
        target: &mut D,
        name: &str,
        top_left: Point,
        scale: f32,
        tint: Rgb565,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(image) = self.get(name) else {
            return;
        };
        if scale <= 0.0 {
            return;
        }
        let size = scaled(Size::new(image.width(), image.height()), scale);
        let max_x = image.width().saturating_sub(1);
        let max_y = image.height().saturating_sub(1);

        let pixels = (0..size.height).flat_map(move |dy| (0..size.width).map(move |dx| (dx, dy))).filter_map(
            |(dx, dy)| {
                let sx = ((dx as f32 / scale) as u32).min(max_x);
                let sy = ((dy as f32 / scale) as u32).min(max_y);
                let color = tinted(image.get_pixel(sx, sy).0, tint)?;
                Some(Pixel(top_left + Point::new(dx as i32, dy as i32), color))
            },
        );
        target.draw_iter(pixels).ok();
    }
}

fn scaled(
    size: Size,
    scale: f32,
) -> Size {
    if scale <= 0.0 {
        return Size::zero();
    }
    Size::new(
        (size.width as f32 * scale).round() as u32,
        (size.height as f32 * scale).round() as u32,
    )
}

/// Multiply an RGBA8 source pixel by the tint. `None` if fully transparent.
fn tinted(
    [r, g, b, a]: [u8; 4],
    tint: Rgb565,
) -> Option<Rgb565> {
    if a == 0 {
        return None;
    }
    let channel = |src: u8, tint_c: u8| -> u8 {
        (u32::from(tint_c) * u32::from(src) * u32::from(a) / (255 * 255)) as u8
    };
    Some(Rgb565::new(channel(r, tint.r()), channel(g, tint.g()), channel(b, tint.b())))
}
