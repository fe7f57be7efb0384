//! Resistor symbol: the classic zig-zag between two horizontal leads.

use faraday_core::{
    draw::{PathBuilder, PathError},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

/// Half the width-to-height ratio of the zig-zag run.
const SPREAD_RATIO: f32 = 1.25;

/// Terminals of a [`ResistorDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResistorTerminal {
    Left,
    Right,
}

impl From<ResistorTerminal> for Id {
    fn from(terminal: ResistorTerminal) -> Id {
        match terminal {
            ResistorTerminal::Left => Id::new("left"),
            ResistorTerminal::Right => Id::new("right"),
        }
    }
}

/// Zig-zag resistor.
#[derive(Debug, Default, Clone)]
pub struct ResistorDefinition;

impl ResistorDefinition {
    pub fn new() -> Self {
        Self
    }

    /// Lead-in, three zig-zag periods, lead-out.
    fn vertices() -> Vec<Point> {
        let mut vertices = vec![Point::flat(SPREAD_RATIO * -2.0, 0.0)];
        for i in -1..=1 {
            let i = i as f32;
            vertices.extend([
                Point::flat(SPREAD_RATIO * (i - 0.5), 0.0),
                Point::flat(SPREAD_RATIO * (i - 0.25), 1.0),
                Point::flat(SPREAD_RATIO * (i + 0.25), -1.0),
                Point::flat(SPREAD_RATIO * (i + 0.5), 0.0),
            ]);
        }
        vertices.push(Point::flat(SPREAD_RATIO * 2.0, 0.0));
        vertices
    }
}

impl SymbolDefinition for ResistorDefinition {
    fn name(&self) -> &'static str {
        "resistor"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        vec![
            (ResistorTerminal::Left.into(), Point::flat(SPREAD_RATIO * -2.0, 0.0)),
            (ResistorTerminal::Right.into(), Point::flat(SPREAD_RATIO * 2.0, 0.0)),
        ]
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        builder.polyline(&Self::vertices())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminals_sit_on_the_leads() {
        let definition = ResistorDefinition::new();
        let terminals = definition.terminals();
        let vertices = ResistorDefinition::vertices();

        assert_eq!(terminals[0].1, vertices[0]);
        assert_eq!(terminals[1].1, vertices[vertices.len() - 1]);
    }

    #[test]
    fn test_zigzag_is_one_polyline() {
        let mut builder = PathBuilder::new();
        ResistorDefinition::new().build_path(&mut builder, 0.15).unwrap();
        let path = builder.build();

        assert_eq!(path.subpaths().len(), 1);
        assert_eq!(path.anchors().count(), 14);
    }
}
