//! The drawing sink trait and the local-to-absolute graphics adapter.
//!
//! The composer never draws pixels. It emits an ordered stream of calls
//! into a [`Renderer`]: one `begin_shape`/`end_shape` bracket per colored
//! region, polygons and circles in between, one `finish` at the end. A
//! sink turns that stream into whatever output it owns (an SVG document,
//! a recorded trace). Sink methods are infallible; output errors belong
//! to whoever drains the sink afterwards.
//!
//! [`Graphics`] sits between shape code and the sink. Shape functions
//! draw in local cell coordinates; the adapter applies the current cell
//! transform, reverses winding for holes, and forwards absolute
//! coordinates. The winding/direction flags travel with each primitive
//! so a sink with a direction-sensitive fill rule can honor them.

use crate::color::Color;
use crate::geometry::{Point, Transform};

/// A sink for the composer's draw-call stream.
///
/// Call order contract: `begin_shape`, then any number of primitives,
/// then `end_shape`, repeated per region; `finish` exactly once at the
/// end. Primitive coordinates are absolute.
pub trait Renderer {
    /// Start a region; all primitives until `end_shape` use this fill.
    fn begin_shape(&mut self, color: Color);

    /// A closed polygon. `reversed_winding` marks hole outlines: the
    /// points already arrive in reversed order, the flag is advisory.
    fn add_polygon(&mut self, points: &[Point], reversed_winding: bool);

    /// A circle anchored by the top-left corner of its bounding box.
    /// `counter_clockwise` marks hole outlines, like `reversed_winding`.
    fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: bool);

    /// Close the current region.
    fn end_shape(&mut self);

    /// The stream is complete; no further calls will arrive.
    fn finish(&mut self);

    /// Axis-aligned rectangle convenience, in terms of `add_polygon`.
    fn add_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, inverted: bool) {
        let mut points = [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ];
        if inverted {
            points.reverse();
        }
        self.add_polygon(&points, inverted);
    }
}

/// An inner outline cut out of a filled cell by [`Graphics::cut_hole`].
#[derive(Debug, Clone)]
pub enum Hole {
    Polygon(Vec<Point>),
    Rectangle { x: f32, y: f32, width: f32, height: f32 },
    Rhombus { x: f32, y: f32, width: f32, height: f32 },
    Circle { x: f32, y: f32, diameter: f32 },
}

/// Local-coordinate drawing surface over a [`Renderer`].
///
/// Holds the transform for the cell currently being drawn; the composer
/// swaps it per placement. Everything here takes shape-local coordinates
/// and emits absolute ones.
pub struct Graphics<'a> {
    renderer: &'a mut dyn Renderer,
    transform: Transform,
}

impl<'a> Graphics<'a> {
    pub fn new(renderer: &'a mut dyn Renderer) -> Self {
        Self {
            renderer,
            transform: Transform::IDENTITY,
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Transform and emit a polygon. Inverted polygons have their point
    /// order reversed here, once, so sinks never re-derive winding.
    pub fn add_polygon(&mut self, points: &[Point], invert: bool) {
        let mut placed: Vec<Point> = points
            .iter()
            .map(|p| self.transform.place(p.x, p.y, 0.0, 0.0))
            .collect();
        if invert {
            placed.reverse();
        }
        self.renderer.add_polygon(&placed, invert);
    }

    /// Circle anchored at the top-left of its bounding box. The anchor
    /// moves with the box extent under rotation, so a circle stays in
    /// the same spot of the cell at every rotation code.
    pub fn add_circle(&mut self, x: f32, y: f32, diameter: f32, invert: bool) {
        let placed = self.transform.place(x, y, diameter, diameter);
        self.renderer.add_circle(placed, diameter, invert);
    }

    pub fn add_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, invert: bool) {
        self.add_polygon(
            &[
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            invert,
        );
    }

    /// Right triangle filling the rectangle `(x, y, width, height)` with
    /// the corner numbered `corner` (0 = top-right, counting clockwise)
    /// cut off.
    pub fn add_triangle(&mut self, x: f32, y: f32, width: f32, height: f32, corner: usize) {
        let mut points = vec![
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
            Point::new(x, y),
        ];
        points.remove(corner % 4);
        self.add_polygon(&points, false);
    }

    pub fn add_rhombus(&mut self, x: f32, y: f32, width: f32, height: f32, invert: bool) {
        self.add_polygon(
            &[
                Point::new(x + width / 2.0, y),
                Point::new(x + width, y + height / 2.0),
                Point::new(x + width / 2.0, y + height),
                Point::new(x, y + height / 2.0),
            ],
            invert,
        );
    }

    /// Fill the whole `cell` square, then cut `hole` out of it with
    /// reversed winding. The sink's fill rule turns the reversed inner
    /// outline into a hole.
    pub fn cut_hole(&mut self, cell: f32, hole: Hole) {
        self.add_rectangle(0.0, 0.0, cell, cell, false);
        match hole {
            Hole::Polygon(points) => self.add_polygon(&points, true),
            Hole::Rectangle { x, y, width, height } => self.add_rectangle(x, y, width, height, true),
            Hole::Rhombus { x, y, width, height } => self.add_rhombus(x, y, width, height, true),
            Hole::Circle { x, y, diameter } => self.add_circle(x, y, diameter, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{DrawOp, TraceRenderer};

    fn points(op: &DrawOp) -> Vec<(f32, f32)> {
        match op {
            DrawOp::Polygon { points, .. } => points.iter().map(|p| (p.x, p.y)).collect(),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn polygon_points_pass_through_identity_transform() {
        let mut sink = TraceRenderer::new();
        let mut g = Graphics::new(&mut sink);
        g.set_transform(Transform::new(0, 0, 10, 0));
        g.add_polygon(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)], false);
        assert_eq!(points(&sink.ops()[0]), vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn inverted_polygon_reverses_point_order() {
        let mut sink = TraceRenderer::new();
        let mut g = Graphics::new(&mut sink);
        g.set_transform(Transform::new(0, 0, 10, 0));
        g.add_polygon(&[Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0)], true);
        assert_eq!(
            points(&sink.ops()[0]),
            vec![(3.0, 0.0), (2.0, 0.0), (1.0, 0.0)]
        );
        assert!(matches!(
            sink.ops()[0],
            DrawOp::Polygon { reversed: true, .. }
        ));
    }

    #[test]
    fn rectangle_emits_corners_clockwise() {
        let mut sink = TraceRenderer::new();
        let mut g = Graphics::new(&mut sink);
        g.set_transform(Transform::new(5, 5, 20, 0));
        g.add_rectangle(0.0, 0.0, 4.0, 3.0, false);
        assert_eq!(
            points(&sink.ops()[0]),
            vec![(5.0, 5.0), (9.0, 5.0), (9.0, 8.0), (5.0, 8.0)]
        );
    }

    #[test]
    fn triangle_drops_the_numbered_corner() {
        // corner 2 is bottom-left of the bounding rectangle
        let mut sink = TraceRenderer::new();
        let mut g = Graphics::new(&mut sink);
        g.set_transform(Transform::new(0, 0, 10, 0));
        g.add_triangle(0.0, 0.0, 4.0, 4.0, 2);
        assert_eq!(
            points(&sink.ops()[0]),
            vec![(4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn rhombus_vertices_sit_on_edge_midpoints() {
        let mut sink = TraceRenderer::new();
        let mut g = Graphics::new(&mut sink);
        g.set_transform(Transform::new(0, 0, 10, 0));
        g.add_rhombus(0.0, 0.0, 10.0, 10.0, false);
        assert_eq!(
            points(&sink.ops()[0]),
            vec![(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]
        );
    }

    #[test]
    fn circle_anchor_follows_rotation() {
        // cell at (0,0) size 12, circle margin 2, diameter 8: the
        // bounding box must stay at (2,2) under every rotation code.
        for rotation in 0..4 {
            let mut sink = TraceRenderer::new();
            let mut g = Graphics::new(&mut sink);
            g.set_transform(Transform::new(0, 0, 12, rotation));
            g.add_circle(2.0, 2.0, 8.0, false);
            match sink.ops()[0] {
                DrawOp::Circle { point, diameter, .. } => {
                    assert_eq!((point.x, point.y), (2.0, 2.0), "rotation {rotation}");
                    assert_eq!(diameter, 8.0);
                }
                ref other => panic!("expected circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn cut_hole_fills_cell_then_reverses_inner_outline() {
        let mut sink = TraceRenderer::new();
        let mut g = Graphics::new(&mut sink);
        g.set_transform(Transform::new(0, 0, 10, 0));
        g.cut_hole(
            10.0,
            Hole::Rectangle {
                x: 3.0,
                y: 3.0,
                width: 4.0,
                height: 4.0,
            },
        );
        assert_eq!(sink.ops().len(), 2);
        assert!(matches!(
            sink.ops()[0],
            DrawOp::Polygon { reversed: false, .. }
        ));
        match &sink.ops()[1] {
            DrawOp::Polygon { points, reversed } => {
                assert!(reversed);
                // reversed order: last corner first
                assert_eq!((points[0].x, points[0].y), (3.0, 7.0));
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn default_renderer_rectangle_reverses_when_inverted() {
        let mut sink = TraceRenderer::new();
        sink.begin_shape(Color::new(0, 0, 0));
        sink.add_rectangle(0.0, 0.0, 2.0, 2.0, true);
        match &sink.ops()[1] {
            DrawOp::Polygon { points, reversed } => {
                assert!(reversed);
                assert_eq!((points[0].x, points[0].y), (0.0, 2.0));
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }
}
