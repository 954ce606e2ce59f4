//! # Hexicon
//!
//! A deterministic identicon engine. Any string seed renders to a
//! geometric avatar, and the same seed renders the exact same bytes on
//! every platform, in every release, in every conforming
//! implementation.
//!
//! # Architecture: Digest In, Draw Calls Out
//!
//! Generation is a straight-line pipeline with no I/O and no
//! randomness; every visual decision is read from a fixed digit
//! position of the digest:
//!
//! ```text
//! 1. Normalize   seed    →  digest      (SHA-1 unless already hex)
//! 2. Derive      digest  →  palette, shapes, rotations, colors
//! 3. Compose     grid    →  draw calls  (through the Renderer trait)
//! 4. Render      calls   →  SVG document, or a DrawOp trace
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Conformance**: the composer alone decides geometry; backends
//!   cannot influence it, only serialize it.
//! - **Testability**: the trace backend records the draw-call stream as
//!   data, so tests diff structured ops instead of parsing SVG.
//! - **Extensibility**: a new output format is one `Renderer` impl away
//!   and inherits determinism for free.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`digest`] | Seed normalization: hex passthrough or SHA-1, digit and hue extraction |
//! | [`color`] | sRGB colors, CSS3 HSL conversion, the 5-slot palette derivation |
//! | [`geometry`] | Points, quarter-turn cell transforms, integer grid layout |
//! | [`shapes`] | The two fixed shape catalogs (4 ring shapes, 14 center shapes) |
//! | [`renderer`] | The `Renderer` trait and the `Graphics` adapter that applies transforms |
//! | [`icon`] | The composer: region walk, color selection, rotation sequencing |
//! | [`svg`] | SVG backend producing the canonical single-line document |
//! | [`trace`] | Recording backend capturing draw calls as serializable `DrawOp`s |
//! | [`config`] | `hexicon.toml` loading, merging, and validation |
//! | [`batch`] | Parallel rendering of seed lists with progress events |
//! | [`output`] | CLI output formatting: pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Byte-Exact, Not Merely Similar
//!
//! The conformance bar is byte equality against a golden SVG corpus,
//! not visual closeness. All geometry arithmetic is `f32` in a fixed
//! operation order, casts truncate toward zero, and the SVG backend
//! rounds every coordinate through one shared function. This is what
//! lets an avatar generated here match one generated by any other
//! conforming implementation, byte for byte.
//!
//! ## SHA-1 as an Entropy Spreader, Not a Security Boundary
//!
//! Seeds are normalized with SHA-1. Nothing here is secret and
//! collisions are not an attack surface; the hash exists to spread
//! arbitrary strings uniformly over the digit positions the composer
//! reads. Seeds that already look like a hex digest (11+ hex chars)
//! pass through untouched, so precomputed digests render identically
//! to their source strings.
//!
//! ## Renderer as the Only Seam
//!
//! The composer emits two primitives, polygons and circles, through the
//! [`renderer::Renderer`] trait. The SVG backend and the trace backend
//! consume the identical stream, which makes the trace a ground-truth
//! debugging artifact: if two traces match but the SVGs differ, the bug
//! is in a backend, never in generation.
//!
//! ## Integer Cell Layout
//!
//! The drawable area, cell size, and grid origin are computed in whole
//! pixels with truncating division, and leftover pixels recenter the
//! grid. Shapes then work in cell-local `f32` coordinates. Keeping the
//! grid integral makes layout exactly reproducible and keeps icons
//! crisp at small sizes.
//!
//! ## Negative Space via Winding, Not Clipping
//!
//! Shapes with holes draw the outer fill and then the hole with
//! reversed vertex winding, letting the renderer's fill rule carve the
//! hole. This keeps the renderer contract to two primitives and
//! avoids clip paths entirely.

pub mod batch;
pub mod color;
pub mod config;
pub mod digest;
pub mod geometry;
pub mod icon;
pub mod output;
pub mod renderer;
pub mod shapes;
pub mod svg;
pub mod trace;
