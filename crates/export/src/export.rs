//! Export driver: writes the SVG and every PNG size for one scene.
//!
//! File names are derived from the base name only, so re-running into the
//! same directory overwrites the previous artifacts with identical bytes.
//! Any failure aborts the run; artifacts already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use basalt_icon_core::{IconError, VectorScene};
use image::{ImageFormat, RgbaImage};
use log::info;

use crate::raster::{check_raster_size, rasterize};

/// Base file name used when none is given.
pub const DEFAULT_BASE_NAME: &str = "basalt";

/// Raster sizes written when none are given, ascending.
pub const DEFAULT_RASTER_SIZES: [u32; 5] = [32, 64, 96, 128, 256];

/// What to write and under which names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub base_name: String,
    pub raster_sizes: Vec<u32>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            raster_sizes: DEFAULT_RASTER_SIZES.to_vec(),
        }
    }
}

impl ExportOptions {
    /// Rejects an empty or path-like base name, an empty size list, and any
    /// size outside `1..=MAX_RASTER_SIZE`.
    pub fn validate(&self) -> Result<(), IconError> {
        if self.base_name.is_empty()
            || self.base_name.contains(['/', '\\'])
            || self.base_name == "."
            || self.base_name == ".."
        {
            return Err(IconError::InvalidParams(format!(
                "invalid base name: {:?}",
                self.base_name
            )));
        }
        if self.raster_sizes.is_empty() {
            return Err(IconError::InvalidDimensions);
        }
        self.raster_sizes
            .iter()
            .try_for_each(|&size| check_raster_size(size))
    }

    /// `<base>.svg`
    pub fn svg_file_name(&self) -> String {
        format!("{}.svg", self.base_name)
    }

    /// `<base>-{size}x{size}.png`
    pub fn png_file_name(&self, size: u32) -> String {
        format!("{}-{size}x{size}.png", self.base_name)
    }

    /// Raster sizes in ascending order without duplicates.
    pub fn sorted_sizes(&self) -> Vec<u32> {
        let mut sizes = self.raster_sizes.clone();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

/// Writes the scene as-is (default declared size) as an SVG file.
pub fn write_svg(scene: &VectorScene, path: &Path) -> Result<(), IconError> {
    fs::write(path, scene.to_svg()).map_err(|e| IconError::Io(format!("{}: {e}", path.display())))
}

/// Encodes a bitmap as PNG.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Io(format!("{}: {e}", path.display())))
}

/// Exports with [`ExportOptions::default`].
pub fn export(scene: &VectorScene, output_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    export_with(scene, output_dir, &ExportOptions::default())
}

/// Writes `<base>.svg` then `<base>-SxS.png` for each size, ascending.
///
/// Creates `output_dir` if needed and returns the written paths in order.
pub fn export_with(
    scene: &VectorScene,
    output_dir: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>, IconError> {
    options.validate()?;
    fs::create_dir_all(output_dir)
        .map_err(|e| IconError::Io(format!("{}: {e}", output_dir.display())))?;

    let mut written = Vec::with_capacity(options.raster_sizes.len() + 1);

    let svg_path = output_dir.join(options.svg_file_name());
    write_svg(scene, &svg_path)?;
    info!("wrote {}", svg_path.display());
    written.push(svg_path);

    for size in options.sorted_sizes() {
        let png_path = output_dir.join(options.png_file_name(size));
        let bitmap = rasterize(scene, size)?;
        write_png(&bitmap, &png_path)?;
        info!("wrote {}", png_path.display());
        written.push(png_path);
    }

    Ok(written)
}
