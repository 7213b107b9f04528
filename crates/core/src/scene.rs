//! Scene renderer: turns a [`RenderContext`] into a vector scene.
//!
//! The scene holds one shared hexagon outline and a list of positioned,
//! colored instances of it. Serialization emits the outline once in
//! `<defs>` and one `<use>` per instance, so the SVG never repeats the
//! polygon's points.
//!
//! The declared pixel size and the view-box are independent: the view-box is
//! always the layout canvas, and [`VectorScene::with_size`] produces a copy
//! with a different pixel size for raster export.

use std::f64::consts::PI;
use std::fmt::Write;

use glam::DVec2;
use log::debug;

use crate::color::Srgb;
use crate::geometry::Rect;
use crate::layout::RenderContext;

/// Element id of the shared hexagon outline.
pub const HEXAGON_ID: &str = "hexagon";

/// Six vertices of a hexagon centered on the origin.
///
/// Vertex `i` sits at angle `60° * (i + 0.5)`, so vertex 0 is at 30° and the
/// horizontal extent is `radius * cos(30°)` each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonOutline {
    vertices: [DVec2; 6],
}

impl HexagonOutline {
    pub fn new(radius: f64) -> Self {
        let vertices = std::array::from_fn(|i| {
            let angle = PI / 3.0 * (i as f64 + 0.5);
            DVec2::new(radius * angle.cos(), radius * angle.sin())
        });
        Self { vertices }
    }

    pub fn vertices(&self) -> &[DVec2; 6] {
        &self.vertices
    }

    /// Tight bounds of the vertices.
    pub fn bounds(&self) -> Rect {
        let min = self.vertices.iter().fold(DVec2::INFINITY, |a, v| a.min(*v));
        let max = self
            .vertices
            .iter()
            .fold(DVec2::NEG_INFINITY, |a, v| a.max(*v));
        Rect::from_edges(min.x, min.y, max.x, max.y)
    }
}

/// The icon border: a filled, stroked rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// Geometric rectangle; the stroke straddles its edge.
    pub rect: Rect,
    pub corner_radius: f64,
    pub fill: Srgb,
    pub stroke: Srgb,
    pub stroke_width: f64,
}

impl RoundedRect {
    /// Area covered once the stroke is painted.
    pub fn painted_bounds(&self) -> Rect {
        self.rect.inset(-self.stroke_width / 2.0)
    }
}

/// One placement of the shared outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonInstance {
    pub offset: DVec2,
    pub fill: Srgb,
}

/// A self-contained vector scene.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorScene {
    width: u32,
    height: u32,
    view_box: Rect,
    outline: HexagonOutline,
    border: RoundedRect,
    instances: Vec<HexagonInstance>,
}

impl VectorScene {
    /// Declared pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Declared pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    pub fn outline(&self) -> &HexagonOutline {
        &self.outline
    }

    pub fn border(&self) -> &RoundedRect {
        &self.border
    }

    /// Hexagon instances in paint order.
    pub fn instances(&self) -> &[HexagonInstance] {
        &self.instances
    }

    /// Returns a copy declared at `size` x `size` pixels with the same view-box.
    pub fn with_size(&self, size: u32) -> VectorScene {
        VectorScene {
            width: size,
            height: size,
            ..self.clone()
        }
    }

    /// Serializes the scene as an SVG document.
    ///
    /// Output depends only on the scene, so equal scenes give identical bytes.
    pub fn to_svg(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            self.width,
            self.height,
            num(vb.left),
            num(vb.top),
            num(vb.width),
            num(vb.height)
        );

        let points: Vec<String> = self
            .outline
            .vertices()
            .iter()
            .map(|v| format!("{},{}", num(v.x), num(v.y)))
            .collect();
        let _ = writeln!(out, "  <defs>");
        let _ = writeln!(
            out,
            r#"    <polygon id="{HEXAGON_ID}" points="{}"/>"#,
            points.join(" ")
        );
        let _ = writeln!(out, "  </defs>");

        let b = &self.border;
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            num(b.rect.left),
            num(b.rect.top),
            num(b.rect.width),
            num(b.rect.height),
            num(b.corner_radius),
            num(b.corner_radius),
            b.fill.to_hex(),
            b.stroke.to_hex(),
            num(b.stroke_width)
        );

        for inst in &self.instances {
            let _ = writeln!(
                out,
                r##"  <use xlink:href="#{HEXAGON_ID}" transform="translate({} {})" fill="{}"/>"##,
                num(inst.offset.x),
                num(inst.offset.y),
                inst.fill.to_hex()
            );
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Formats a coordinate at shortest round-trip precision, without `-0`.
fn num(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

/// Builds the vector scene for a resolved layout.
pub fn build_scene(context: &RenderContext) -> VectorScene {
    let params = context.params();
    let canvas = context.canvas();
    let theme = context.theme();
    let stroke_width = context.border_stroke_width();

    let border = RoundedRect {
        rect: canvas.inset(stroke_width / 2.0),
        corner_radius: canvas.width * params.border_corner_radius_ratio,
        fill: theme.border_fill(),
        stroke: theme.border_color(),
        stroke_width,
    };

    let instances: Vec<HexagonInstance> = context
        .hexagons()
        .iter()
        .map(|h| HexagonInstance {
            offset: h.center,
            fill: h.color,
        })
        .collect();

    debug!(
        "scene: {}x{} px, view-box {:?}, {} instances",
        params.default_pixel_size,
        params.default_pixel_size,
        canvas,
        instances.len()
    );

    VectorScene {
        width: params.default_pixel_size,
        height: params.default_pixel_size,
        view_box: canvas,
        outline: HexagonOutline::new(params.hexagon_size),
        border,
        instances,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{build_context, build_default_context, half_height, half_width};
    use crate::params::LayoutParams;
    use crate::theme::Theme;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn default_scene() -> (RenderContext, VectorScene) {
        let ctx = build_default_context(&Theme::basalt());
        let scene = build_scene(&ctx);
        (ctx, scene)
    }

    #[test]
    fn first_vertex_is_at_thirty_degrees() {
        let outline = HexagonOutline::new(10.0);
        let v0 = outline.vertices()[0];
        assert!(approx_eq(v0.y.atan2(v0.x).to_degrees(), 30.0));
        assert!(approx_eq(v0.length(), 10.0));
    }

    #[test]
    fn outline_extremes_match_layout_bounds() {
        let radius = 10.0;
        let b = HexagonOutline::new(radius).bounds();
        assert!(approx_eq(b.left, -half_width(radius)));
        assert!(approx_eq(b.right(), half_width(radius)));
        assert!(approx_eq(b.top, -half_height(radius)));
        assert!(approx_eq(b.bottom(), half_height(radius)));
    }

    #[test]
    fn outline_has_two_horizontal_extreme_vertices_per_side() {
        // The vertical extremes are single vertices at 90° and 270°;
        // the horizontal extremes are edges.
        let outline = HexagonOutline::new(10.0);
        let hw = half_width(10.0);
        let right = outline
            .vertices()
            .iter()
            .filter(|v| approx_eq(v.x, hw))
            .count();
        let bottom = outline
            .vertices()
            .iter()
            .filter(|v| approx_eq(v.y, 10.0))
            .count();
        assert_eq!(right, 2);
        assert_eq!(bottom, 1);
    }

    #[test]
    fn view_box_equals_canvas() {
        let (ctx, scene) = default_scene();
        let (vb, canvas) = (scene.view_box(), ctx.canvas());
        assert!(approx_eq(vb.left, canvas.left));
        assert!(approx_eq(vb.top, canvas.top));
        assert!(approx_eq(vb.width, canvas.width));
        assert!(approx_eq(vb.height, canvas.height));
    }

    #[test]
    fn declared_size_is_default_pixel_size() {
        let (_, scene) = default_scene();
        assert_eq!(scene.width(), 128);
        assert_eq!(scene.height(), 128);
    }

    #[test]
    fn border_stroke_stays_inside_canvas() {
        let (ctx, scene) = default_scene();
        let border = scene.border();
        let painted = border.painted_bounds();
        let canvas = ctx.canvas();
        assert!(approx_eq(painted.left, canvas.left));
        assert!(approx_eq(painted.top, canvas.top));
        assert!(approx_eq(painted.right(), canvas.right()));
        assert!(approx_eq(painted.bottom(), canvas.bottom()));
        assert!(approx_eq(
            border.rect.left - canvas.left,
            ctx.border_stroke_width() / 2.0
        ));
    }

    #[test]
    fn border_uses_theme_colors_and_corner_ratio() {
        let (ctx, scene) = default_scene();
        let border = scene.border();
        assert_eq!(border.fill, Theme::basalt().border_fill());
        assert_eq!(border.stroke, Theme::basalt().border_color());
        assert!(approx_eq(border.corner_radius, ctx.canvas().width * 0.16));
    }

    #[test]
    fn hexagons_clear_the_border_stroke() {
        let (ctx, scene) = default_scene();
        let inner = scene.border().rect.inset(scene.border().stroke_width / 2.0);
        assert!(inner.contains(&ctx.content()));
    }

    #[test]
    fn instances_follow_context_order() {
        let (ctx, scene) = default_scene();
        assert_eq!(scene.instances().len(), ctx.hexagons().len());
        for (inst, hex) in scene.instances().iter().zip(ctx.hexagons()) {
            assert_eq!(inst.offset, hex.center);
            assert_eq!(inst.fill, hex.color);
        }
    }

    #[test]
    fn with_size_keeps_view_box() {
        let (_, scene) = default_scene();
        let resized = scene.with_size(32);
        assert_eq!(resized.width(), 32);
        assert_eq!(resized.height(), 32);
        assert_eq!(resized.view_box(), scene.view_box());
        assert_eq!(resized.instances(), scene.instances());
        assert_eq!(scene.width(), 128, "original scene must be untouched");
    }

    #[test]
    fn svg_defines_outline_once_and_uses_it_per_hexagon() {
        let (_, scene) = default_scene();
        let svg = scene.to_svg();
        assert_eq!(svg.matches("<polygon").count(), 1);
        assert_eq!(svg.matches("<use ").count(), 6);
        assert_eq!(svg.matches("<rect ").count(), 1);
        assert!(svg.contains(r#"width="128" height="128""#));
        for color in Theme::basalt().hexagon_colors() {
            assert!(svg.contains(&color.to_hex()), "missing {}", color.to_hex());
        }
    }

    #[test]
    fn svg_view_box_matches_canvas() {
        let (ctx, scene) = default_scene();
        let svg = scene.to_svg();
        let start = svg.find(r#"viewBox=""#).unwrap() + r#"viewBox=""#.len();
        let end = start + svg[start..].find('"').unwrap();
        let parsed: Vec<f64> = svg[start..end]
            .split(' ')
            .map(|n| n.parse().unwrap())
            .collect();
        let c = ctx.canvas();
        assert_eq!(parsed.len(), 4);
        for (got, want) in parsed.iter().zip([c.left, c.top, c.width, c.height]) {
            assert!((got - want).abs() < 1e-6, "viewBox {got} vs canvas {want}");
        }
    }

    #[test]
    fn svg_hexagon_offsets_round_trip() {
        let (ctx, scene) = default_scene();
        let svg = scene.to_svg();
        for hex in ctx.hexagons() {
            let translate = format!("translate({} {})", hex.center.x, hex.center.y);
            assert!(svg.contains(&translate), "missing {translate}");
        }
    }

    #[test]
    fn svg_is_deterministic() {
        let a = build_scene(&build_default_context(&Theme::moss())).to_svg();
        let b = build_scene(&build_default_context(&Theme::moss())).to_svg();
        assert_eq!(a, b);
    }

    #[test]
    fn num_trims_and_normalizes() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-8.660254037844387), "-8.660254037844387");
        let v = -12.699484522385717_f64;
        assert_eq!(num(v).parse::<f64>().unwrap(), v);
    }

    #[test]
    fn scene_scales_with_hexagon_size() {
        let params = LayoutParams {
            hexagon_size: 20.0,
            ..LayoutParams::default()
        };
        let ctx = build_context(&Theme::basalt(), &params);
        let scene = build_scene(&ctx);
        assert!(approx_eq(scene.outline().bounds().height, 40.0));
        assert!(approx_eq(scene.view_box().width, ctx.canvas().width));
    }
}
