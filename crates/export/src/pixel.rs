//! Pixel buffer conversion from a rendered [`Pixmap`].
//!
//! `tiny-skia` stores premultiplied RGBA; PNG wants straight alpha. Opaque
//! pixels come through unchanged, anti-aliased edges and the transparent
//! corners outside the rounded border are demultiplied.

use resvg::tiny_skia::Pixmap;

/// Converts a pixmap to a straight-alpha RGBA8 buffer of length `width * height * 4`.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
