//! Layout engine: places the grid's hexagons and derives the square canvas.
//!
//! Columns are `dx = hexagon_size + hexagon_margin` apart and row levels are
//! `dy = dx / 2 * tan(60°)` apart. With the grid's staggered coordinates this
//! puts horizontal and diagonal neighbours at the same distance.
//!
//! The canvas is the smallest square centered on the union of the hexagon
//! bounds whose side is the larger union extent grown by `canvas_margin_ratio`.

use std::f64::consts::PI;

use glam::DVec2;
use log::debug;
use serde::Serialize;

use crate::color::Srgb;
use crate::geometry::Rect;
use crate::grid::{max_color_index, HEXAGON_SLOTS};
use crate::params::LayoutParams;
use crate::theme::Theme;

/// Half the horizontal extent of a hexagon with the given circumradius.
pub fn half_width(radius: f64) -> f64 {
    radius * (PI / 6.0).cos()
}

/// Half the vertical extent of a hexagon with the given circumradius.
pub fn half_height(radius: f64) -> f64 {
    radius
}

/// A hexagon resolved to a view-box position and a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedHexagon {
    pub center: DVec2,
    pub color: Srgb,
}

impl PlacedHexagon {
    /// Bounding rectangle of this hexagon for the given circumradius.
    pub fn bounds(&self, radius: f64) -> Rect {
        Rect::centered(
            self.center,
            2.0 * half_width(radius),
            2.0 * half_height(radius),
        )
    }
}

/// Resolved layout for one generation run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderContext {
    theme: Theme,
    hexagons: Vec<PlacedHexagon>,
    content: Rect,
    canvas: Rect,
    border_stroke_width: f64,
    params: LayoutParams,
}

impl RenderContext {
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Placed hexagons, in grid slot order.
    pub fn hexagons(&self) -> &[PlacedHexagon] {
        &self.hexagons
    }

    /// Union of every hexagon's bounds.
    pub fn content(&self) -> Rect {
        self.content
    }

    /// The square canvas; becomes the scene's view-box.
    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    pub fn border_stroke_width(&self) -> f64 {
        self.border_stroke_width
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }
}

/// Computes hexagon centers, colors, the canvas, and the border width.
///
/// # Panics
///
/// Panics if `theme` does not provide a color for every grid slot. `Theme`
/// rejects such palettes on construction, so this only fires on a broken
/// theme definition.
pub fn build_context(theme: &Theme, params: &LayoutParams) -> RenderContext {
    assert!(
        theme.hexagon_colors().len() > max_color_index(),
        "theme '{}' has {} hexagon colors, grid needs {}",
        theme.name(),
        theme.hexagon_colors().len(),
        max_color_index() + 1
    );

    let dx = params.hexagon_size + params.hexagon_margin;
    let dy = dx / 2.0 * (PI / 3.0).tan();

    let hexagons: Vec<PlacedHexagon> = HEXAGON_SLOTS
        .iter()
        .map(|slot| PlacedHexagon {
            center: DVec2::new(dx * slot.grid_x as f64, dy * slot.grid_y as f64),
            color: theme.hexagon_colors()[slot.color_index],
        })
        .collect();

    let bounds: Vec<Rect> = hexagons
        .iter()
        .map(|h| h.bounds(params.hexagon_size))
        .collect();
    let content = Rect::union_all(&bounds).expect("hexagon grid is non-empty");

    let side = content.width.max(content.height) * (1.0 + params.canvas_margin_ratio);
    let canvas = Rect::centered(content.center(), side, side);
    let border_stroke_width = canvas.width * params.border_stroke_width_ratio;

    debug!(
        "layout: {} hexagons, content {:?}, canvas {:?}, border {border_stroke_width:.3}",
        hexagons.len(),
        content,
        canvas
    );

    RenderContext {
        theme: theme.clone(),
        hexagons,
        content,
        canvas,
        border_stroke_width,
        params: *params,
    }
}

/// [`build_context`] with [`LayoutParams::default`].
pub fn build_default_context(theme: &Theme) -> RenderContext {
    build_context(theme, &LayoutParams::default())
}
