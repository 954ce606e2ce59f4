//! Recording renderer for inspection and tests.
//!
//! `TraceRenderer` captures the draw-call stream as structured
//! [`DrawOp`] values instead of producing output. The ops serialize to
//! JSON with serde, which is what the `trace` subcommand prints: one
//! object per op, tagged by kind. Because every backend consumes the
//! identical stream, a trace diff pinpoints generation bugs without
//! involving any output format.

use crate::color::Color;
use crate::geometry::Point;
use crate::icon::{self, IconError, IconStyle};
use crate::renderer::Renderer;
use serde::{Deserialize, Serialize};

/// One renderer call, in stream order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    BeginShape {
        color: Color,
    },
    Polygon {
        points: Vec<Point>,
        reversed: bool,
    },
    Circle {
        point: Point,
        diameter: f32,
        counter_clockwise: bool,
    },
    EndShape,
    Finish,
}

/// Renderer that appends every call to an op list.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    ops: Vec<DrawOp>,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Renderer for TraceRenderer {
    fn begin_shape(&mut self, color: Color) {
        self.ops.push(DrawOp::BeginShape { color });
    }

    fn add_polygon(&mut self, points: &[Point], reversed_winding: bool) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            reversed: reversed_winding,
        });
    }

    fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: bool) {
        self.ops.push(DrawOp::Circle {
            point,
            diameter,
            counter_clockwise,
        });
    }

    fn end_shape(&mut self) {
        self.ops.push(DrawOp::EndShape);
    }

    fn finish(&mut self) {
        self.ops.push(DrawOp::Finish);
    }
}

/// Capture the op stream for `seed` at default saturation.
pub fn trace(seed: &str, size: u32, padding: f32) -> Result<Vec<DrawOp>, IconError> {
    let mut sink = TraceRenderer::new();
    icon::generate(seed, size, padding, &mut sink)?;
    Ok(sink.into_ops())
}

/// Capture the op stream with explicit style parameters.
pub fn trace_styled(seed: &str, style: &IconStyle) -> Result<Vec<DrawOp>, IconError> {
    let mut sink = TraceRenderer::new();
    icon::generate_styled(seed, style, &mut sink)?;
    Ok(sink.into_ops())
}
