//! Capacitor symbol: two parallel plates with horizontal leads.

use faraday_core::{
    draw::{PathBuilder, PathError},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

/// Plate half-height; the plates are 2/3 of this taller than the gap is wide.
const HEIGHT_RATIO: f32 = 1.5;

/// Terminals of a [`CapacitorDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitorTerminal {
    Left,
    Right,
}

impl From<CapacitorTerminal> for Id {
    fn from(terminal: CapacitorTerminal) -> Id {
        match terminal {
            CapacitorTerminal::Left => Id::new("left"),
            CapacitorTerminal::Right => Id::new("right"),
        }
    }
}

/// Parallel-plate capacitor.
#[derive(Debug, Default, Clone)]
pub struct CapacitorDefinition;

impl CapacitorDefinition {
    pub fn new() -> Self {
        Self
    }

    /// Each half is one run: lead, then the plate drawn up and back down.
    fn polygram() -> [[Point; 4]; 2] {
        [
            [
                Point::flat(-1.5, 0.0),
                Point::flat(-0.5, 0.0),
                Point::flat(-0.5, HEIGHT_RATIO),
                Point::flat(-0.5, -HEIGHT_RATIO),
            ],
            [
                Point::flat(1.5, 0.0),
                Point::flat(0.5, 0.0),
                Point::flat(0.5, HEIGHT_RATIO),
                Point::flat(0.5, -HEIGHT_RATIO),
            ],
        ]
    }
}

impl SymbolDefinition for CapacitorDefinition {
    fn name(&self) -> &'static str {
        "capacitor"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        let polygram = Self::polygram();
        vec![
            (CapacitorTerminal::Left.into(), polygram[0][0]),
            (CapacitorTerminal::Right.into(), polygram[1][0]),
        ]
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        for group in Self::polygram() {
            builder.polyline(&group)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals() {
        let terminals = CapacitorDefinition::new().terminals();
        assert_eq!(terminals[0].1, Point::flat(-1.5, 0.0));
        assert_eq!(terminals[1].1, Point::flat(1.5, 0.0));
    }

    #[test]
    fn test_two_halves() {
        let mut builder = PathBuilder::new();
        CapacitorDefinition::new().build_path(&mut builder, 0.15).unwrap();
        assert_eq!(builder.build().subpaths().len(), 2);
    }
}
