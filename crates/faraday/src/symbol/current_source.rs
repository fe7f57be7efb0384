//! Current source symbol: a circle with an upward arrow and vertical leads.

use faraday_core::{
    draw::{PathBuilder, PathError, StrokeDefinition},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

const CIRCLE_RADIUS: f32 = 0.5;
const ARROW_LENGTH: f32 = 0.35;
const ARROW_HEAD_LENGTH: f32 = 0.25;
const ARROW_HEAD_WIDTH: f32 = 0.15;
/// Current sources are drawn compact; a light stroke keeps the arrow legible.
const BASE_STROKE_WIDTH: f32 = 0.03;

/// Terminals of a [`CurrentSourceDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentSourceTerminal {
    Top,
    Bottom,
}

impl From<CurrentSourceTerminal> for Id {
    fn from(terminal: CurrentSourceTerminal) -> Id {
        match terminal {
            CurrentSourceTerminal::Top => Id::new("top"),
            CurrentSourceTerminal::Bottom => Id::new("bottom"),
        }
    }
}

/// Ideal current source. Current flows in the arrow's direction, bottom to
/// top.
#[derive(Debug, Clone)]
pub struct CurrentSourceDefinition {
    terminal_wire_length: f32,
}

impl Default for CurrentSourceDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrentSourceDefinition {
    pub fn new() -> Self {
        Self {
            terminal_wire_length: 0.25,
        }
    }

    /// Length of the vertical leads above and below the circle.
    pub fn with_terminal_wire_length(mut self, length: f32) -> Self {
        self.terminal_wire_length = length;
        self
    }

    fn lead_reach(&self) -> f32 {
        CIRCLE_RADIUS + self.terminal_wire_length
    }
}

impl SymbolDefinition for CurrentSourceDefinition {
    fn name(&self) -> &'static str {
        "current-source"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        vec![
            (
                CurrentSourceTerminal::Top.into(),
                Point::flat(0.0, self.lead_reach()),
            ),
            (
                CurrentSourceTerminal::Bottom.into(),
                Point::flat(0.0, -self.lead_reach()),
            ),
        ]
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        builder.circle(Point::ORIGIN, CIRCLE_RADIUS, 0.0)?;

        // Arrow shaft stops short of the head.
        builder.polyline(&[
            Point::flat(0.0, -ARROW_LENGTH),
            Point::flat(0.0, ARROW_LENGTH - ARROW_HEAD_LENGTH),
        ])?;
        builder.pointer(
            Point::flat(0.0, ARROW_LENGTH),
            Point::flat(0.0, ARROW_LENGTH + ARROW_HEAD_LENGTH),
            ARROW_HEAD_WIDTH,
            ARROW_HEAD_LENGTH,
            0.0,
        )?;

        builder.polyline(&[
            Point::flat(0.0, CIRCLE_RADIUS),
            Point::flat(0.0, self.lead_reach()),
        ])?;
        builder.polyline(&[
            Point::flat(0.0, -CIRCLE_RADIUS),
            Point::flat(0.0, -self.lead_reach()),
        ])?;
        Ok(())
    }

    fn base_stroke(&self) -> StrokeDefinition {
        StrokeDefinition::default().with_width(BASE_STROKE_WIDTH)
    }
}
