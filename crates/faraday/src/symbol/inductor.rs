//! Inductor symbol: interleaved elliptical loops between two leads.

use std::f32::consts::PI;

use faraday_core::{
    draw::{PathBuilder, PathError},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

/// Half the width-to-height ratio of the coil run.
const SPREAD_RATIO: f32 = 1.6;
/// Width of the ellipses forming the upper half of each loop.
const UPPER_ELLIPSE_SPREAD: f32 = 1.75;

/// Terminals of an [`InductorDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InductorTerminal {
    Left,
    Right,
}

impl From<InductorTerminal> for Id {
    fn from(terminal: InductorTerminal) -> Id {
        match terminal {
            InductorTerminal::Left => Id::new("left"),
            InductorTerminal::Right => Id::new("right"),
        }
    }
}

/// Coiled inductor.
#[derive(Debug, Default, Clone)]
pub struct InductorDefinition;

impl InductorDefinition {
    pub fn new() -> Self {
        Self
    }

    fn lead_in() -> [Point; 2] {
        [
            Point::flat(-2.0 * SPREAD_RATIO, 0.0),
            Point::flat(-1.5 * SPREAD_RATIO, 0.0),
        ]
    }

    fn lead_out() -> [Point; 2] {
        [
            Point::flat(1.5 * SPREAD_RATIO, 0.0),
            Point::flat(2.0 * SPREAD_RATIO, 0.0),
        ]
    }

    /// Horizontal pitch between loop centers, chosen so the coil fills the
    /// span between the leads.
    fn loop_width() -> f32 {
        (3.0 * SPREAD_RATIO - UPPER_ELLIPSE_SPREAD) / 3.0
    }
}

impl SymbolDefinition for InductorDefinition {
    fn name(&self) -> &'static str {
        "inductor"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        vec![
            (InductorTerminal::Left.into(), Self::lead_in()[0]),
            (InductorTerminal::Right.into(), Self::lead_out()[1]),
        ]
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        builder.polyline(&Self::lead_in())?;

        let loop_width = Self::loop_width();
        for i in -1..=1 {
            let i = i as f32;
            // Upper hump of the loop, then the smaller return arc below it.
            builder.elliptical_arc(
                PI,
                -PI,
                Point::flat((i - 0.5) * loop_width, 0.0),
                UPPER_ELLIPSE_SPREAD,
                2.0,
            )?;
            builder.elliptical_arc(
                0.0,
                -PI,
                Point::flat(i * loop_width, 0.0),
                UPPER_ELLIPSE_SPREAD - loop_width,
                1.4,
            )?;
        }
        builder.elliptical_arc(
            PI,
            -PI,
            Point::flat(1.5 * loop_width, 0.0),
            UPPER_ELLIPSE_SPREAD,
            2.0,
        )?;

        builder.polyline(&Self::lead_out())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals_at_lead_ends() {
        let terminals = InductorDefinition::new().terminals();
        assert_eq!(terminals[0].1, Point::flat(-3.2, 0.0));
        assert_eq!(terminals[1].1, Point::flat(3.2, 0.0));
    }

    #[test]
    fn test_loop_count() {
        let mut builder = PathBuilder::new();
        InductorDefinition::new().build_path(&mut builder, 0.15).unwrap();
        // 2 leads + 3 x (hump + return) + final hump
        assert_eq!(builder.build().subpaths().len(), 9);
    }
}
