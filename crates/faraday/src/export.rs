//! Renderer-facing export.
//!
//! The animation framework that plays Faraday scenes is an external
//! collaborator; this module is the seam it consumes. The demo drivers and
//! integration tests use the SVG backend to turn a scene into a static
//! frame.

pub mod svg;

pub use self::svg::{render_svg, to_document};
