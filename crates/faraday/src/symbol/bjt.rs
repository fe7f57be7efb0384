//! NPN bipolar transistor symbol.
//!
//! A circle around the base bar and the collector/emitter legs, with the
//! emitter arrow that marks the symbol as NPN. The arrow is sized from the
//! element's stroke width so it stays proportional when a caller sets a
//! heavier or lighter line.

use faraday_core::{
    draw::{PathBuilder, PathError, StrokeDefinition, StrokeJoin},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

/// How far down the emitter leg the arrow tip sits.
const ARROW_DIST_RATIO: f32 = 0.7;
/// Arrow width relative to the stroke width.
const ARROW_WIDTH_RATIO: f32 = 2.6;
/// Arrow length relative to the stroke width.
const ARROW_LENGTH_RATIO: f32 = 1.1 * ARROW_WIDTH_RATIO;

/// Terminals of a [`BjtNpnDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BjtTerminal {
    Collector,
    Emitter,
    Gate,
}

impl From<BjtTerminal> for Id {
    fn from(terminal: BjtTerminal) -> Id {
        match terminal {
            BjtTerminal::Collector => Id::new("collector"),
            BjtTerminal::Emitter => Id::new("emitter"),
            BjtTerminal::Gate => Id::new("gate"),
        }
    }
}

/// NPN bipolar junction transistor.
#[derive(Debug, Default, Clone)]
pub struct BjtNpnDefinition;

impl BjtNpnDefinition {
    pub fn new() -> Self {
        Self
    }

    /// Base bar, gate lead, both legs and their horizontal leads. Segments
    /// are kept disconnected so round caps can coexist with miter joins on
    /// the sharp corners.
    fn polygram() -> [[Point; 2]; 6] {
        [
            [Point::flat(-1.2, 0.8), Point::flat(1.2, 0.8)],
            [Point::flat(0.0, 0.8), Point::flat(0.0, 2.3)],
            [Point::flat(-0.8, 0.8), Point::flat(-1.3, -1.0)],
            [Point::flat(0.8, 0.8), Point::flat(1.3, -1.0)],
            [Point::flat(-1.3, -1.0), Point::flat(-2.5, -1.0)],
            [Point::flat(1.3, -1.0), Point::flat(2.5, -1.0)],
        ]
    }
}

impl SymbolDefinition for BjtNpnDefinition {
    fn name(&self) -> &'static str {
        "bjt-npn"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        let polygram = Self::polygram();
        vec![
            (BjtTerminal::Collector.into(), polygram[5][1]),
            (BjtTerminal::Emitter.into(), polygram[4][1]),
            (BjtTerminal::Gate.into(), polygram[1][1]),
        ]
    }

    fn build_path(&self, builder: &mut PathBuilder, stroke_width: f32) -> Result<(), PathError> {
        let polygram = Self::polygram();

        builder.circle(Point::ORIGIN, 2.0, 0.0)?;
        for group in polygram {
            builder.polyline(&group)?;
        }

        // Emitter arrow partway down the left leg, pointing outward.
        let leg_start = polygram[2][0];
        let leg_end = polygram[2][1];
        let tip = leg_end.sub_point(leg_start).scale(ARROW_DIST_RATIO).add_point(leg_start);
        builder.pointer(
            tip,
            leg_end,
            ARROW_WIDTH_RATIO * stroke_width,
            ARROW_LENGTH_RATIO * stroke_width,
            0.0,
        )?;
        Ok(())
    }

    fn base_stroke(&self) -> StrokeDefinition {
        // Miter joins keep the arrow triangle sharp.
        StrokeDefinition::default().with_join(StrokeJoin::Miter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::CircuitElement;

    #[test]
    fn test_terminals() {
        let terminals = BjtNpnDefinition::new().terminals();
        assert_eq!(terminals[0].1, Point::flat(2.5, -1.0));
        assert_eq!(terminals[1].1, Point::flat(-2.5, -1.0));
        assert_eq!(terminals[2].1, Point::flat(0.0, 2.3));
    }

    #[test]
    fn test_arrow_scales_with_stroke_width() {
        let mut thin = PathBuilder::new();
        BjtNpnDefinition::new().build_path(&mut thin, 0.1).unwrap();
        let mut thick = PathBuilder::new();
        BjtNpnDefinition::new().build_path(&mut thick, 0.2).unwrap();

        let thin_path = thin.build();
        let thick_path = thick.build();

        // Same structure, different arrow extents.
        assert_eq!(thin_path.subpaths().len(), thick_path.subpaths().len());
        let thin_arrow = thin_path.subpaths().last().unwrap();
        let thick_arrow = thick_path.subpaths().last().unwrap();
        let thin_span = thin_arrow
            .start()
            .sub_point(thin_arrow.segments()[1].end())
            .length();
        let thick_span = thick_arrow
            .start()
            .sub_point(thick_arrow.segments()[1].end())
            .length();
        assert!(thick_span > thin_span);
    }

    #[test]
    fn test_element_uses_miter_joins() {
        let element = CircuitElement::new(BjtNpnDefinition::new()).unwrap();
        assert_eq!(element.stroke().join(), StrokeJoin::Miter);
    }
}
