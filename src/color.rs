//! Palette derivation: digest hue to a fixed 5-color theme.
//!
//! Given a hue fraction and a saturation, the theme always contains the
//! same five slots in the same order:
//!
//! | Slot | Role | Lightness curve |
//! |------|------|-----------------|
//! | 0 | grayscale dark | gray(0.0) |
//! | 1 | colored mid | color(0.5) |
//! | 2 | grayscale light | gray(1.0) |
//! | 3 | colored light | color(1.0) |
//! | 4 | colored dark | color(0.0) |
//!
//! Colored slots pass through a perceptual hue correction first: pure HSL
//! makes yellows look washed out and blues look black at the same nominal
//! lightness, so the lightness is re-anchored per hue sextant using a
//! fixed corrector table. The table values and the CSS3 HSL-to-sRGB
//! conversion are transcribed from the reference tables, not re-derived:
//! equal inputs must produce equal bytes on every implementation, which
//! also pins all arithmetic to `f32` in this exact operation order.

use std::fmt;
use thiserror::Error;

/// Saturation used wherever a caller does not override it.
pub const DEFAULT_SATURATION: f32 = 0.5;

/// Lightness re-anchors per hue sextant, indexed by `(hue * 6 + 0.5)`.
/// The seventh entry covers hue == 1.0 exactly.
const HUE_CORRECTORS: [f32; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

/// An opaque sRGB color.
///
/// The derived ordering is lexicographic on `(r, g, b)`, which equals the
/// ordering of the lowercase `#rrggbb` strings; the SVG backend sorts
/// paths by it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` literal (case-insensitive hex).
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits = text.strip_prefix('#').unwrap_or("");
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError(text.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorParseError(text.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_hex(&text)
    }
}

#[derive(Error, Debug)]
#[error("invalid color literal {0:?}, expected #rrggbb")]
pub struct ColorParseError(String);

/// The 5-color theme derived from one digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 5],
}

impl Palette {
    /// Derive the theme for a hue fraction in [0, 1].
    ///
    /// Saturation is a parameter so tests can sweep it; production call
    /// sites use [`DEFAULT_SATURATION`].
    pub fn derive(hue: f32, saturation: f32) -> Self {
        Self {
            colors: [
                hsl(0.0, 0.0, gray_lightness(0.0)),
                corrected_hsl(hue, saturation, color_lightness(0.5)),
                hsl(0.0, 0.0, gray_lightness(1.0)),
                corrected_hsl(hue, saturation, color_lightness(1.0)),
                corrected_hsl(hue, saturation, color_lightness(0.0)),
            ],
        }
    }

    pub fn colors(&self) -> &[Color; 5] {
        &self.colors
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = Color;

    fn index(&self, slot: usize) -> &Color {
        &self.colors[slot]
    }
}

/// CSS3 HSL to sRGB. `hue` in [0, 1], `saturation` and `lightness` in
/// [0, 1]; zero saturation short-circuits to a pure gray.
pub(crate) fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    if saturation == 0.0 {
        let value = channel(lightness);
        return Color::new(value, value, value);
    }
    let m2 = if lightness <= 0.5 {
        lightness * (saturation + 1.0)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = lightness * 2.0 - m2;
    Color::new(
        channel(hue_to_rgb(m1, m2, hue * 6.0 + 2.0)),
        channel(hue_to_rgb(m1, m2, hue * 6.0)),
        channel(hue_to_rgb(m1, m2, hue * 6.0 - 2.0)),
    )
}

/// HSL with the per-sextant lightness correction applied first.
pub(crate) fn corrected_hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let sextant = ((hue * 6.0 + 0.5) as usize).min(HUE_CORRECTORS.len() - 1);
    let corrector = HUE_CORRECTORS[sextant];
    let corrected = if lightness < 0.5 {
        lightness * corrector * 2.0
    } else {
        corrector + (lightness - 0.5) * (1.0 - corrector) * 2.0
    };
    hsl(hue, saturation, corrected)
}

fn hue_to_rgb(m1: f32, m2: f32, h: f32) -> f32 {
    let h = if h < 0.0 {
        h + 6.0
    } else if h > 6.0 {
        h - 6.0
    } else {
        h
    };
    if h < 1.0 {
        m1 + (m2 - m1) * h
    } else if h < 3.0 {
        m2
    } else if h < 4.0 {
        m1 + (m2 - m1) * (4.0 - h)
    } else {
        m1
    }
}

/// Scale a unit channel value to a byte, truncating like the reference.
fn channel(value: f32) -> u8 {
    ((255.0 * value) as i32).clamp(0, 255) as u8
}

/// Colored-slot lightness: t over [0.4, 0.8].
fn color_lightness(t: f32) -> f32 {
    lightness(t, 0.4, 0.8)
}

/// Grayscale-slot lightness: t over [0.3, 0.9].
fn gray_lightness(t: f32) -> f32 {
    lightness(t, 0.3, 0.9)
}

fn lightness(t: f32, lo: f32, hi: f32) -> f32 {
    (lo + t * (hi - lo)).clamp(0.0, 1.0)
}
