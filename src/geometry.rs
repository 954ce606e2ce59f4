//! Cell coordinate geometry: grid layout and rotation transforms.
//!
//! Shapes draw themselves in a local `[0, cell]²` coordinate space. A
//! [`Transform`] maps those local points into absolute canvas coordinates
//! for one grid cell at one of four discrete orientations (0°, 90°, 180°,
//! 270°). The rotations are closed-form coordinate swaps, not trigonometry:
//! independent implementations of this engine are compared byte-for-byte,
//! and `sin`/`cos` round-tripping would not survive that comparison.
//!
//! All math is `f32`. The grid layout itself is integer math (truncating
//! division), so every cell boundary lands on a whole pixel and converts
//! to `f32` exactly.

/// A point in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Maps shape-local coordinates into one grid cell at a discrete rotation.
///
/// Carries the cell's top-left corner `(x, y)`, its side length, and a
/// rotation code 0-3 (quarter turns clockwise). Rotation relocates the
/// local origin to the corresponding corner of the cell, so a shape
/// anchored at local `(0, 0)` stays inside the cell at every code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x: i32,
    y: i32,
    size: i32,
    rotation: u8,
}

impl Transform {
    /// The no-op transform: cell at the canvas origin with size 0.
    pub const IDENTITY: Transform = Transform {
        x: 0,
        y: 0,
        size: 0,
        rotation: 0,
    };

    pub fn new(x: i32, y: i32, size: i32, rotation: u8) -> Self {
        Self {
            x,
            y,
            size,
            rotation: rotation % 4,
        }
    }

    /// Map a local point to canvas coordinates.
    ///
    /// `w` and `h` describe the extent of the element anchored at the
    /// point: 0 for bare polygon vertices, the diameter for circles
    /// (whose anchor is the bounding box's top-left corner, which moves
    /// to a different corner under rotation).
    pub fn place(&self, x: f32, y: f32, w: f32, h: f32) -> Point {
        let right = (self.x + self.size) as f32;
        let bottom = (self.y + self.size) as f32;
        match self.rotation {
            1 => Point::new(right - y - h, self.y as f32 + x),
            2 => Point::new(right - x - w, bottom - y - h),
            3 => Point::new(self.x as f32 + y, bottom - x - w),
            _ => Point::new(self.x as f32 + x, self.y as f32 + y),
        }
    }
}

/// Grid placement derived from the icon size and padding fraction.
///
/// The icon is a 4×4 grid of square cells inside a padded square. Because
/// the cell size is truncated to a whole pixel, the grid can be slightly
/// smaller than the padded interior; the leftover is split evenly (again
/// truncating) so the grid stays centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Side length of one grid cell, in pixels.
    pub cell: i32,
    /// Canvas offset of the grid's top-left corner (same for x and y).
    pub origin: i32,
}

/// Compute the cell grid for an icon of `size` pixels with `padding`
/// as a fraction of the size on each edge.
pub fn lay_out(size: u32, padding: f32) -> Layout {
    let pad = (size as f32 * padding) as i32;
    let inner = size as i32 - 2 * pad;
    let cell = inner / 4;
    let origin = pad + (inner - cell * 4) / 2;
    Layout { cell, origin }
}
