//! SVG backend: draw calls to a single-line `<svg>` document.
//!
//! Output is byte-stable across platforms and releases. Everything that
//! could wobble is pinned down: coordinates are rounded through one
//! deterministic function, per-color path data accumulates in call
//! order, and the `<path>` elements are emitted in ascending color
//! order. Two icons with the same seed and style produce identical
//! bytes, which is what makes golden-file testing of the whole engine
//! possible.

use crate::color::Color;
use crate::geometry::Point;
use crate::icon::{self, IconError, IconStyle};
use crate::renderer::Renderer;
use std::collections::BTreeMap;

/// Round a coordinate to one decimal digit, then truncate to the
/// integer part. Matches `((v * 10 + 0.5) as i32) / 10` in every
/// implementation so that path data never differs by a trailing digit.
fn svg_value(v: f32) -> i32 {
    ((v * 10.0 + 0.5) as i32) / 10
}

/// Renderer that accumulates path data per fill color.
#[derive(Debug)]
pub struct SvgRenderer {
    size: u32,
    paths: BTreeMap<Color, String>,
    current: Option<Color>,
}

impl SvgRenderer {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            paths: BTreeMap::new(),
            current: None,
        }
    }

    /// Assemble the final document. Paths are keyed and ordered by
    /// color, so a color drawn in several shape groups still becomes
    /// one `<path>` element.
    pub fn into_document(self) -> String {
        let s = self.size;
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{s}\" height=\"{s}\" \
             viewBox=\"0 0 {s} {s}\" preserveAspectRatio=\"xMidYMid meet\">"
        );
        for (color, path) in &self.paths {
            doc.push_str(&format!("<path fill=\"{color}\" d=\"{path}\"/>"));
        }
        doc.push_str("</svg>");
        doc
    }

    fn path_for_current(&mut self) -> Option<&mut String> {
        let color = self.current?;
        Some(self.paths.entry(color).or_default())
    }
}

impl Renderer for SvgRenderer {
    fn begin_shape(&mut self, color: Color) {
        self.current = Some(color);
    }

    // Winding is already encoded in the point order, so the flag is
    // not needed here.
    fn add_polygon(&mut self, points: &[Point], _reversed_winding: bool) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut d = format!("M{} {}", svg_value(first.x), svg_value(first.y));
        for p in rest {
            d.push_str(&format!("L{} {}", svg_value(p.x), svg_value(p.y)));
        }
        d.push('Z');
        if let Some(path) = self.path_for_current() {
            path.push_str(&d);
        }
    }

    fn add_circle(&mut self, point: Point, diameter: f32, _counter_clockwise: bool) {
        let radius = svg_value(diameter / 2.0);
        let extent = svg_value(diameter);
        let x = svg_value(point.x);
        let y = svg_value(point.y + diameter / 2.0);
        // Two half-turn arcs from the left edge of the circle. The
        // extent is negated after rounding, not before.
        let d = format!(
            "M{x} {y}a{radius},{radius} 0 1,0 {extent},0a{radius},{radius} 0 1,0 {},0",
            -extent
        );
        if let Some(path) = self.path_for_current() {
            path.push_str(&d);
        }
    }

    fn end_shape(&mut self) {
        self.current = None;
    }

    fn finish(&mut self) {}
}

/// Render `seed` to an SVG document at default saturation.
pub fn to_svg(seed: &str, size: u32, padding: f32) -> Result<String, IconError> {
    let mut renderer = SvgRenderer::new(size);
    icon::generate(seed, size, padding, &mut renderer)?;
    Ok(renderer.into_document())
}

/// Render with explicit style parameters.
pub fn to_svg_styled(seed: &str, style: &IconStyle) -> Result<String, IconError> {
    let mut renderer = SvgRenderer::new(style.size);
    icon::generate_styled(seed, style, &mut renderer)?;
    Ok(renderer.into_document())
}
