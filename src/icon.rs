//! The composer: digest in, draw-call stream out.
//!
//! One generation pass derives everything from the digest and walks the
//! three regions in fixed order, sides then corners then center, drawing
//! each region's shape into its cells through the renderer sink:
//!
//! ```text
//! seed ──▶ digest ──▶ palette (5 colors)
//!                 ──▶ color indices (sides / corners / center)
//!                 ──▶ shape + rotation per region ──▶ renderer
//! ```
//!
//! Generation is pure and synchronous. The only failure is a
//! precondition violation on size or padding, rejected up front rather
//! than clamped: a clamped icon would render "validly" but differ from
//! every other implementation's output for the same input, which is the
//! one thing this engine must never do.

use crate::color::{Color, DEFAULT_SATURATION, Palette};
use crate::digest::Digest;
use crate::geometry::{self, Transform};
use crate::renderer::{Graphics, Renderer};
use crate::shapes::{self, ShapeFn};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IconError {
    #[error("icon size must be between 1 and {} pixels", i32::MAX)]
    InvalidSize,
    #[error("padding must be in [0, 1), got {padding}")]
    InvalidPadding { padding: f32 },
}

/// Rendering parameters for one icon.
///
/// `size` is the canvas edge in pixels, `padding` the fraction of the
/// size left blank on each edge, `saturation` the palette saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub size: u32,
    pub padding: f32,
    pub saturation: f32,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            size: 100,
            padding: 0.08,
            saturation: DEFAULT_SATURATION,
        }
    }
}

impl IconStyle {
    /// Check the engine preconditions. Layout math runs in `i32`
    /// coordinates, which caps `size` at `i32::MAX`. NaN padding fails
    /// the range check, so it is rejected here too.
    pub fn validate(&self) -> Result<(), IconError> {
        if self.size == 0 || self.size > i32::MAX as u32 {
            return Err(IconError::InvalidSize);
        }
        if !(self.padding >= 0.0 && self.padding < 1.0) {
            return Err(IconError::InvalidPadding {
                padding: self.padding,
            });
        }
        Ok(())
    }
}

/// Grid positions of the 8 side cells, in drawing order.
const SIDE_CELLS: [(i32, i32); 8] = [
    (1, 0),
    (2, 0),
    (2, 3),
    (1, 3),
    (0, 1),
    (3, 1),
    (3, 2),
    (0, 2),
];

/// Grid positions of the 4 corner cells, in drawing order.
const CORNER_CELLS: [(i32, i32); 4] = [(0, 0), (3, 0), (3, 3), (0, 3)];

/// Grid positions of the 4 center cells, in drawing order.
const CENTER_CELLS: [(i32, i32); 4] = [(1, 1), (2, 1), (2, 2), (1, 2)];

/// Generate the icon for `seed` into `renderer` with the default
/// saturation.
pub fn generate(
    seed: &str,
    size: u32,
    padding: f32,
    renderer: &mut dyn Renderer,
) -> Result<(), IconError> {
    generate_styled(
        seed,
        &IconStyle {
            size,
            padding,
            saturation: DEFAULT_SATURATION,
        },
        renderer,
    )
}

/// Generate with explicit style parameters.
pub fn generate_styled(
    seed: &str,
    style: &IconStyle,
    renderer: &mut dyn Renderer,
) -> Result<(), IconError> {
    style.validate()?;

    let digest = Digest::from_seed(seed);
    let palette = Palette::derive(digest.hue_fraction(), style.saturation);
    let layout = geometry::lay_out(style.size, style.padding);
    let selected = select_color_indices(&digest);

    // Region order and digit offsets are fixed: center shape comes from
    // digit 1, the ring regions from digits 2-5, colors from 8-10.
    draw_region(
        renderer,
        layout,
        RegionPlan {
            color: palette[selected[0]],
            catalog: &shapes::RING,
            shape_digit: digest.digit(2),
            rotation_seed: digest.digit(3),
            cells: &SIDE_CELLS,
        },
    );
    draw_region(
        renderer,
        layout,
        RegionPlan {
            color: palette[selected[1]],
            catalog: &shapes::RING,
            shape_digit: digest.digit(4),
            rotation_seed: digest.digit(5),
            cells: &CORNER_CELLS,
        },
    );
    draw_region(
        renderer,
        layout,
        RegionPlan {
            color: palette[selected[2]],
            catalog: &shapes::CENTER,
            shape_digit: digest.digit(1),
            rotation_seed: 0,
            cells: &CENTER_CELLS,
        },
    );
    renderer.finish();
    Ok(())
}

struct RegionPlan<'a> {
    color: Color,
    catalog: &'a [ShapeFn],
    shape_digit: u8,
    rotation_seed: u8,
    cells: &'a [(i32, i32)],
}

fn draw_region(renderer: &mut dyn Renderer, layout: geometry::Layout, plan: RegionPlan<'_>) {
    let shape = plan.catalog[plan.shape_digit as usize % plan.catalog.len()];
    let mut rotation = u32::from(plan.rotation_seed);

    renderer.begin_shape(plan.color);
    let mut graphics = Graphics::new(renderer);
    for (slot, &(col, row)) in plan.cells.iter().enumerate() {
        graphics.set_transform(Transform::new(
            layout.origin + col * layout.cell,
            layout.origin + row * layout.cell,
            layout.cell,
            (rotation % 4) as u8,
        ));
        shape(&mut graphics, layout.cell as f32, slot);
        rotation += 1;
    }
    renderer.end_shape();
}

/// Pick the palette slot for each region from digest digits 8-10.
///
/// Two palette pairs read as near-duplicates when adjacent: the two
/// grayscales {0, 4} and the two bright colors {2, 3}. If a candidate
/// and any already-selected index fall in the same pair, the candidate
/// collapses to the mid color (slot 1).
fn select_color_indices(digest: &Digest) -> [usize; 3] {
    let mut selected: Vec<usize> = Vec::with_capacity(3);
    for offset in [8, 9, 10] {
        let mut index = usize::from(digest.digit(offset)) % 5;
        if is_duplicate(&selected, index, [0, 4]) || is_duplicate(&selected, index, [2, 3]) {
            index = 1;
        }
        selected.push(index);
    }
    [selected[0], selected[1], selected[2]]
}

fn is_duplicate(selected: &[usize], index: usize, pair: [usize; 2]) -> bool {
    pair.contains(&index) && pair.iter().any(|p| selected.contains(p))
}
