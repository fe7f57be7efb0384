//! Function generator symbol: a circle enclosing a sine wave.

use std::f32::consts::{FRAC_PI_2, PI};

use faraday_core::{
    draw::{PathBuilder, PathError},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

const CIRCLE_RADIUS: f32 = 1.5;
/// Width of the elliptical arcs forming the sine lobes.
const LOBE_WIDTH: f32 = 1.5;
/// Height of the elliptical arcs forming the sine lobes.
const LOBE_HEIGHT: f32 = 5.0;

/// Terminals of a [`FunctionGeneratorDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionGeneratorTerminal {
    Left,
    Right,
}

impl From<FunctionGeneratorTerminal> for Id {
    fn from(terminal: FunctionGeneratorTerminal) -> Id {
        match terminal {
            FunctionGeneratorTerminal::Left => Id::new("left"),
            FunctionGeneratorTerminal::Right => Id::new("right"),
        }
    }
}

/// AC source drawn as a circle with one sine period inside.
#[derive(Debug, Default, Clone)]
pub struct FunctionGeneratorDefinition;

impl FunctionGeneratorDefinition {
    pub fn new() -> Self {
        Self
    }

    fn lead_in() -> [Point; 2] {
        [Point::flat(-2.0, 0.0), Point::flat(-1.5, 0.0)]
    }

    fn lead_out() -> [Point; 2] {
        [Point::flat(1.5, 0.0), Point::flat(2.0, 0.0)]
    }
}

impl SymbolDefinition for FunctionGeneratorDefinition {
    fn name(&self) -> &'static str {
        "function-generator"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        vec![
            (FunctionGeneratorTerminal::Left.into(), Self::lead_in()[0]),
            (FunctionGeneratorTerminal::Right.into(), Self::lead_out()[1]),
        ]
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        let sqrt2 = f32::sqrt(2.0);

        builder.polyline(&Self::lead_in())?;
        builder.circle(Point::ORIGIN, CIRCLE_RADIUS, -PI)?;
        // Two quarter-ellipse lobes make one sine period across the circle.
        builder.elliptical_arc(
            3.0 * PI / 4.0,
            -FRAC_PI_2,
            Point::flat(-0.75 / sqrt2, -2.5 / sqrt2),
            LOBE_WIDTH,
            LOBE_HEIGHT,
        )?;
        builder.elliptical_arc(
            -3.0 * PI / 4.0,
            FRAC_PI_2,
            Point::flat(0.75 / sqrt2, 2.5 / sqrt2),
            LOBE_WIDTH,
            LOBE_HEIGHT,
        )?;
        builder.polyline(&Self::lead_out())?;
        Ok(())
    }
}
