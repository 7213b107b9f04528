#![deny(unsafe_code)]
//! Raster rendering and file export for the basalt icon generator.
//!
//! This crate sits between `basalt-icon-core` (grid, layout, vector scene)
//! and the CLI. SVG parsing and rendering are delegated to `resvg`, PNG
//! encoding to `image`.

pub mod export;
pub mod pixel;
pub mod raster;

pub use export::{
    export, export_with, write_png, write_svg, ExportOptions, DEFAULT_BASE_NAME,
    DEFAULT_RASTER_SIZES,
};
pub use raster::{check_raster_size, rasterize, MAX_RASTER_SIZE};
