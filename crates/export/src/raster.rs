//! Rasterization of a [`VectorScene`] at a given pixel size.
//!
//! Each call serializes a resized snapshot of the scene, so the source scene
//! is never mutated and any number of sizes can be rendered from it.

use basalt_icon_core::{IconError, VectorScene};
use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::pixel::pixmap_to_rgba;

/// Largest accepted raster side, in pixels (a 64 MiB RGBA buffer).
pub const MAX_RASTER_SIZE: u32 = 4096;

/// Checks that `size` is in `1..=MAX_RASTER_SIZE`.
pub fn check_raster_size(size: u32) -> Result<(), IconError> {
    if size == 0 {
        return Err(IconError::InvalidDimensions);
    }
    if size > MAX_RASTER_SIZE {
        return Err(IconError::RasterTooLarge {
            size,
            max: MAX_RASTER_SIZE,
        });
    }
    Ok(())
}

/// Renders `scene` to a `size` x `size` bitmap.
///
/// The view-box is kept, so the whole canvas scales uniformly to fill the
/// bitmap. Returns `IconError::InvalidDimensions` for `size == 0`,
/// `IconError::RasterTooLarge` above [`MAX_RASTER_SIZE`], and
/// `IconError::Svg` if the serialized scene cannot be parsed.
pub fn rasterize(scene: &VectorScene, size: u32) -> Result<RgbaImage, IconError> {
    check_raster_size(size)?;
    let svg = scene.with_size(size).to_svg();
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| IconError::Svg(e.to_string()))?;

    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| IconError::Render(format!("cannot allocate a {size}x{size} pixmap")))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    RgbaImage::from_raw(size, size, pixmap_to_rgba(&pixmap)).ok_or_else(|| {
        IconError::Render(format!("RGBA buffer does not match {size}x{size}"))
    })
}
