//! Ground symbol: a stem over three shortening bars.

use faraday_core::{
    draw::{PathBuilder, PathError},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

/// Terminal of a [`GroundDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTerminal {
    Ground,
}

impl From<GroundTerminal> for Id {
    fn from(_: GroundTerminal) -> Id {
        Id::new("ground")
    }
}

/// Earth-ground reference.
#[derive(Debug, Default, Clone)]
pub struct GroundDefinition;

impl GroundDefinition {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolDefinition for GroundDefinition {
    fn name(&self) -> &'static str {
        "ground"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        // The attachment point is the top of the stem.
        vec![(GroundTerminal::Ground.into(), Point::ORIGIN)]
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        // Stem down to the widest bar, drawn out to both sides.
        builder.polyline(&[
            Point::flat(0.0, 0.0),
            Point::flat(0.0, -0.5),
            Point::flat(-1.0, -0.5),
            Point::flat(1.0, -0.5),
        ])?;
        builder.polyline(&[Point::flat(-0.66, -0.9), Point::flat(0.66, -0.9)])?;
        builder.polyline(&[Point::flat(-0.33, -1.3), Point::flat(0.33, -1.3)])?;
        Ok(())
    }
}
