//! Battery symbol: a long and a short plate with horizontal leads.

use faraday_core::{
    draw::{PathBuilder, PathError},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

/// Terminals of a [`BatteryDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryTerminal {
    Positive,
    Negative,
}

impl From<BatteryTerminal> for Id {
    fn from(terminal: BatteryTerminal) -> Id {
        match terminal {
            BatteryTerminal::Positive => Id::new("positive"),
            BatteryTerminal::Negative => Id::new("negative"),
        }
    }
}

/// Single-cell battery. The long plate is the positive side.
#[derive(Debug, Default, Clone)]
pub struct BatteryDefinition;

impl BatteryDefinition {
    pub fn new() -> Self {
        Self
    }

    fn polygram() -> [[Point; 4]; 2] {
        [
            // Negative side: lead and the short plate.
            [
                Point::flat(-2.0, 0.0),
                Point::flat(-0.5, 0.0),
                Point::flat(-0.5, 1.0),
                Point::flat(-0.5, -1.0),
            ],
            // Positive side: lead and the long plate.
            [
                Point::flat(2.0, 0.0),
                Point::flat(0.5, 0.0),
                Point::flat(0.5, 2.0),
                Point::flat(0.5, -2.0),
            ],
        ]
    }
}

impl SymbolDefinition for BatteryDefinition {
    fn name(&self) -> &'static str {
        "battery"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        let polygram = Self::polygram();
        vec![
            (BatteryTerminal::Positive.into(), polygram[1][0]),
            (BatteryTerminal::Negative.into(), polygram[0][0]),
        ]
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        for group in Self::polygram() {
            builder.polyline(&group)?;
        }
        Ok(())
    }
}
