//! The two shape catalogs: ring shapes and center shapes.
//!
//! Each catalog is a fixed, ordered table of drawing procedures with a
//! uniform signature: the shape draws itself into local `[0, cell]²`
//! space through the [`Graphics`] adapter, optionally varying by the
//! cell's `slot` ordinal within its region. The composer picks one entry
//! per region by `digit % len`, so the table length and entry order are
//! part of the output contract. The entry at index 11 repeats index 7 on
//! purpose: collapsing it would renumber every catalog entry behind it
//! and change existing icons.
//!
//! The numeric constants here (margins, insets, thresholds, and where a
//! value is floored) are transcribed verbatim from the reference tables.
//! They look arbitrary because they are tuned, not derived; re-deriving
//! any of them breaks byte-equality with other implementations.

use crate::geometry::Point;
use crate::renderer::{Graphics, Hole};

/// A catalog entry: draws one shape into the current cell.
pub type ShapeFn = fn(&mut Graphics<'_>, f32, usize);

/// Shapes for the 12 ring cells (8 sides + 4 corners).
pub const RING: [ShapeFn; 4] = [corner_triangle_full, half_triangle, full_rhombus, inset_circle];

/// Shapes for the 4 center cells.
pub const CENTER: [ShapeFn; 14] = [
    notched_pentagon,
    wide_triangle,
    third_inset_square,
    framed_square,
    offset_circle,
    hollow_triangle,
    notched_square,
    quarter_triangle,
    stacked_blocks,
    hollow_square,
    hollow_circle,
    quarter_triangle,
    hollow_rhombus,
    lone_circle,
];

// ---------------------------------------------------------------------
// Ring shapes
// ---------------------------------------------------------------------

fn corner_triangle_full(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    g.add_triangle(0.0, 0.0, cell, cell, 0);
}

fn half_triangle(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    g.add_triangle(0.0, cell / 2.0, cell, cell / 2.0, 0);
}

fn full_rhombus(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    g.add_rhombus(0.0, 0.0, cell, cell, false);
}

fn inset_circle(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let m = cell / 6.0;
    g.add_circle(m, m, cell - 2.0 * m, false);
}

// ---------------------------------------------------------------------
// Center shapes
// ---------------------------------------------------------------------

fn notched_pentagon(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let k = cell * 0.42;
    g.add_polygon(
        &[
            Point::new(0.0, 0.0),
            Point::new(cell, 0.0),
            Point::new(cell, cell - k * 2.0),
            Point::new(cell - k, cell),
            Point::new(0.0, cell),
        ],
        false,
    );
}

fn wide_triangle(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let w = (cell * 0.5).floor();
    let h = (cell * 0.8).floor();
    g.add_triangle(cell - w, 0.0, w, h, 2);
}

fn third_inset_square(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let s = (cell / 3.0).floor();
    g.add_rectangle(s, s, cell - s, cell - s, false);
}

fn framed_square(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let mut inner = cell * 0.1;
    if inner > 1.0 {
        inner = inner.floor();
    } else if inner > 0.5 {
        inner = 1.0;
    }
    let outer = if cell < 6.0 {
        1.0
    } else if cell < 8.0 {
        2.0
    } else {
        (cell * 0.25).floor()
    };
    g.add_rectangle(outer, outer, cell - inner - outer, cell - inner - outer, false);
}

fn offset_circle(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let m = (cell * 0.15).floor();
    let s = (cell * 0.5).floor();
    g.add_circle(cell - s - m, cell - s - m, s, false);
}

fn hollow_triangle(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let inner = cell * 0.1;
    let outer = inner * 4.0;
    g.cut_hole(
        cell,
        Hole::Polygon(vec![
            Point::new(outer, outer.floor()),
            Point::new(cell - inner, outer.floor()),
            Point::new(outer + (cell - outer - inner) / 2.0, cell - inner),
        ]),
    );
}

fn notched_square(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    g.add_polygon(
        &[
            Point::new(0.0, 0.0),
            Point::new(cell, 0.0),
            Point::new(cell, cell * 0.7),
            Point::new(cell * 0.4, cell * 0.4),
            Point::new(cell * 0.7, cell),
            Point::new(0.0, cell),
        ],
        false,
    );
}

fn quarter_triangle(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    g.add_triangle(cell / 2.0, cell / 2.0, cell / 2.0, cell / 2.0, 3);
}

fn stacked_blocks(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    g.add_rectangle(0.0, 0.0, cell, cell / 2.0, false);
    g.add_rectangle(0.0, cell / 2.0, cell / 2.0, cell / 2.0, false);
    g.add_triangle(cell / 2.0, cell / 2.0, cell / 2.0, cell / 2.0, 1);
}

fn hollow_square(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let mut inner = cell * 0.14;
    if cell >= 8.0 {
        inner = inner.floor();
    }
    let outer = if cell < 4.0 {
        1.0
    } else if cell < 6.0 {
        2.0
    } else {
        (cell * 0.35).floor()
    };
    g.cut_hole(
        cell,
        Hole::Rectangle {
            x: outer,
            y: outer,
            width: cell - outer - inner,
            height: cell - outer - inner,
        },
    );
}

fn hollow_circle(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let inner = cell * 0.12;
    let outer = inner * 3.0;
    g.cut_hole(
        cell,
        Hole::Circle {
            x: outer,
            y: outer,
            diameter: cell - inner - outer,
        },
    );
}

fn hollow_rhombus(g: &mut Graphics<'_>, cell: f32, _slot: usize) {
    let m = cell * 0.25;
    g.cut_hole(
        cell,
        Hole::Rhombus {
            x: m,
            y: m,
            width: cell - m,
            height: cell - m,
        },
    );
}

/// Drawn in the first cell of the region only; the other three cells
/// stay empty, which reads as a single large dot over the center.
fn lone_circle(g: &mut Graphics<'_>, cell: f32, slot: usize) {
    let m = cell * 0.4;
    let s = cell * 1.2;
    if slot == 0 {
        g.add_circle(m, m, s, false);
    }
}
