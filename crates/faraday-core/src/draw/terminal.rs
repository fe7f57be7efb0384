//! Terminal markers.
//!
//! A terminal is a named attachment point on a circuit symbol. It has no
//! visual footprint of its own; its marker radius exists so that uniform
//! scaling of an element leaves a measurable trace the stroke-width
//! correction can read back (see the element layer).

use crate::{geometry::Point, identifier::Id};

/// Ratio between a freshly created terminal's marker radius and its owning
/// element's stroke width.
pub const TERMINAL_MARKER_RATIO: f32 = 0.5;

/// A named attachment point owned by a circuit element or wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terminal {
    id: Id,
    local: Point,
    marker_radius: f32,
}

impl Terminal {
    /// Creates a terminal at a local-frame coordinate, with its marker sized
    /// from the owner's stroke width.
    pub fn new(id: Id, local: Point, stroke_width: f32) -> Self {
        Self {
            id,
            local,
            marker_radius: stroke_width * TERMINAL_MARKER_RATIO,
        }
    }

    /// The terminal's name.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The terminal's coordinate in the owner's local frame. For wires,
    /// which carry no transform, this is the world coordinate.
    pub fn local(&self) -> Point {
        self.local
    }

    /// Moves the terminal's stored coordinate. Only the owner may call this;
    /// foreign readers go through the owner's world-space lookup.
    pub fn set_local(&mut self, point: Point) {
        self.local = point;
    }

    /// Current marker radius.
    pub fn marker_radius(&self) -> f32 {
        self.marker_radius
    }

    /// Scales the marker radius, tracking a uniform scale of the owner.
    pub fn scale_marker(&mut self, factor: f32) {
        self.marker_radius *= factor;
    }
}
