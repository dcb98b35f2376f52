//! Drawing data model and overlay output.
//!
//! This module defines the types produced by the drawing tools:
//! - [`HexColor`] and the per-tool palette
//! - [`StyleSnapshot`] / [`StyleResolver`]: visual style frozen onto each drawing
//! - [`Shape`] / [`Drawing`]: finalized entities, one variant per kind
//! - [`DrawingStore`]: append-only collection of drawings
//! - Overlay rendering for the map surface

pub mod color;
pub mod render;
pub mod shape;
pub mod store;
pub mod style;

// Re-export commonly used types at module level
pub use color::{ColorError, HexColor};
pub use render::{Overlay, OverlaySource, Preview, PreviewKind, Primitive, render_overlays};
pub use shape::{CIRCLE_RADIUS_M, Drawing, DrawingId, RECTANGLE_HALF_SPAN_DEG, Shape};
pub use store::DrawingStore;
pub use style::{LineStyle, StylePatch, StyleResolver, StyleSnapshot};
