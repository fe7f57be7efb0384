//! Draw primitives for circuit symbols.
//!
//! This module provides the pieces a circuit symbol's render representation
//! is assembled from: the [`Path`]/[`PathBuilder`] pair used to construct
//! outlines out of polylines, arcs and pointers, the [`StrokeDefinition`]
//! describing how those outlines are inked, and the zero-footprint
//! [`Terminal`] markers wiring attaches to.

mod path;
mod stroke;
mod terminal;

pub use path::{Path, PathBuilder, PathError, Segment, SubPath};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle, DEFAULT_STROKE_WIDTH};
pub use terminal::{Terminal, TERMINAL_MARKER_RATIO};

use crate::geometry::Bounds;

/// Anything that can hand the renderer a finished vector path.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to an SVG node.
    fn render_to_svg(&self) -> Box<dyn svg::Node>;

    /// World-space bounds of the rendered geometry, or `None` if there is
    /// nothing to draw.
    fn bounds(&self) -> Option<Bounds>;
}
