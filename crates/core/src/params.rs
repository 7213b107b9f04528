//! Layout sizing constants and the JSON helpers used to override them.
//!
//! Every field of [`LayoutParams`] has a compiled-in default. A JSON object
//! (e.g. from the CLI's `--params`) may override any field by name; missing
//! or wrongly-typed keys keep the default.

use serde::Serialize;
use serde_json::Value;

use crate::error::IconError;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON numbers (including integers) and converts them to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `u32` from `params[name]`, returning `default` if missing, wrong
/// type, or too large.
pub fn param_u32(params: &Value, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Sizing constants for the layout engine and scene renderer.
///
/// Lengths are in view-box units; ratios are fractions of the canvas side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutParams {
    /// Circumradius of each hexagon.
    pub hexagon_size: f64,
    /// Extra spacing added to the column pitch.
    pub hexagon_margin: f64,
    /// Fraction of the cluster extent added around it to form the canvas.
    pub canvas_margin_ratio: f64,
    pub border_stroke_width_ratio: f64,
    pub border_corner_radius_ratio: f64,
    /// Declared pixel width and height of the SVG document.
    pub default_pixel_size: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            hexagon_size: 10.0,
            hexagon_margin: 0.0,
            canvas_margin_ratio: 0.12,
            border_stroke_width_ratio: 0.03,
            border_corner_radius_ratio: 0.16,
            default_pixel_size: 128,
        }
    }
}

impl LayoutParams {
    /// Builds params from a JSON object, falling back to defaults per key.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            hexagon_size: param_f64(params, "hexagon_size", d.hexagon_size),
            hexagon_margin: param_f64(params, "hexagon_margin", d.hexagon_margin),
            canvas_margin_ratio: param_f64(params, "canvas_margin_ratio", d.canvas_margin_ratio),
            border_stroke_width_ratio: param_f64(
                params,
                "border_stroke_width_ratio",
                d.border_stroke_width_ratio,
            ),
            border_corner_radius_ratio: param_f64(
                params,
                "border_corner_radius_ratio",
                d.border_corner_radius_ratio,
            ),
            default_pixel_size: param_u32(params, "default_pixel_size", d.default_pixel_size),
        }
    }

    /// Checks that sizes are positive and ratios non-negative.
    ///
    /// The canvas margin must be positive so the cluster never touches the
    /// border, and the border must fit inside half the canvas.
    pub fn validate(&self) -> Result<(), IconError> {
        let finite = [
            ("hexagon_size", self.hexagon_size),
            ("hexagon_margin", self.hexagon_margin),
            ("canvas_margin_ratio", self.canvas_margin_ratio),
            ("border_stroke_width_ratio", self.border_stroke_width_ratio),
            ("border_corner_radius_ratio", self.border_corner_radius_ratio),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(IconError::InvalidParams(format!("{name} must be finite")));
        }
        if self.hexagon_size <= 0.0 {
            return Err(IconError::InvalidParams(
                "hexagon_size must be positive".into(),
            ));
        }
        if self.hexagon_margin < 0.0 {
            return Err(IconError::InvalidParams(
                "hexagon_margin must not be negative".into(),
            ));
        }
        if self.canvas_margin_ratio <= 0.0 {
            return Err(IconError::InvalidParams(
                "canvas_margin_ratio must be positive".into(),
            ));
        }
        if !(0.0..0.5).contains(&self.border_stroke_width_ratio) {
            return Err(IconError::InvalidParams(
                "border_stroke_width_ratio must be in [0, 0.5)".into(),
            ));
        }
        if !(0.0..=0.5).contains(&self.border_corner_radius_ratio) {
            return Err(IconError::InvalidParams(
                "border_corner_radius_ratio must be in [0, 0.5]".into(),
            ));
        }
        if self.default_pixel_size == 0 {
            return Err(IconError::InvalidParams(
                "default_pixel_size must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
