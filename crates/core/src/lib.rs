#![deny(unsafe_code)]
//! Core types for the basalt icon generator.
//!
//! Provides the fixed hexagon grid (`HEXAGON_SLOTS`), named `Theme`s, the
//! layout engine (`build_context` -> `RenderContext`) and the scene renderer
//! (`build_scene` -> `VectorScene`, serializable to SVG).

pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod params;
pub mod scene;
pub mod theme;

pub use color::Srgb;
pub use error::IconError;
pub use geometry::Rect;
pub use grid::{HexagonSlot, HEXAGON_SLOTS};
pub use layout::{build_context, build_default_context, PlacedHexagon, RenderContext};
pub use params::LayoutParams;
pub use scene::{build_scene, HexagonInstance, HexagonOutline, RoundedRect, VectorScene};
pub use theme::Theme;
