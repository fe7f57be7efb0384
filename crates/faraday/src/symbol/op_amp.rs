//! Operational amplifier symbol.
//!
//! An output-pointing triangle with input and output leads, +/− input
//! markers, and optional bias-supply terminals on the triangle's top and
//! bottom edges.

use faraday_core::{
    draw::{PathBuilder, PathError},
    geometry::Point,
    identifier::Id,
};

use crate::element::SymbolDefinition;

/// Triangle edge length along x, from input face to output tip.
const TRIANGLE_DEPTH: f32 = 3.5;

/// Terminals of an [`OpAmpDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpAmpTerminal {
    NonInvertingInput,
    InvertingInput,
    Output,
    BiasPositive,
    BiasNegative,
}

impl From<OpAmpTerminal> for Id {
    fn from(terminal: OpAmpTerminal) -> Id {
        match terminal {
            OpAmpTerminal::NonInvertingInput => Id::new("non-inverting input"),
            OpAmpTerminal::InvertingInput => Id::new("inverting input"),
            OpAmpTerminal::Output => Id::new("output"),
            OpAmpTerminal::BiasPositive => Id::new("V+"),
            OpAmpTerminal::BiasNegative => Id::new("V-"),
        }
    }
}

/// Op-amp with configurable input polarity placement and optional bias
/// terminals.
#[derive(Debug, Clone)]
pub struct OpAmpDefinition {
    non_inverting_on_top: bool,
    include_bias_terminals: bool,
}

impl Default for OpAmpDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl OpAmpDefinition {
    pub fn new() -> Self {
        Self {
            non_inverting_on_top: true,
            include_bias_terminals: false,
        }
    }

    /// Puts the inverting input on the top row instead.
    pub fn with_inverting_on_top(mut self) -> Self {
        self.non_inverting_on_top = false;
        self
    }

    /// Adds V+ / V− supply leads and terminals.
    pub fn with_bias_terminals(mut self) -> Self {
        self.include_bias_terminals = true;
        self
    }

    /// Half-height of the triangle at its vertical symmetry axis.
    fn half_width_at_center() -> f32 {
        TRIANGLE_DEPTH / f32::sqrt(3.0) / 2.0
    }

    fn input_leads() -> [[Point; 2]; 2] {
        [
            [Point::flat(-1.75, 1.0), Point::flat(-2.75, 1.0)],
            [Point::flat(-1.75, -1.0), Point::flat(-2.75, -1.0)],
        ]
    }

    fn output_lead() -> [Point; 2] {
        [Point::flat(1.75, 0.0), Point::flat(2.75, 0.0)]
    }

    fn bias_leads() -> [[Point; 2]; 2] {
        let half = Self::half_width_at_center();
        [
            [Point::flat(0.0, half), Point::flat(0.0, half + 1.0)],
            [Point::flat(0.0, -half), Point::flat(0.0, -half - 1.0)],
        ]
    }

    /// The +/− polarity markers next to the input leads. `offset` flips the
    /// rows depending on which input sits on top.
    fn polarity_marks(&self) -> [[Point; 2]; 3] {
        let offset = if self.non_inverting_on_top { 2.0 } else { 0.0 };
        [
            // Vertical stroke of the plus.
            [
                Point::flat(-1.25, -1.25 + offset),
                Point::flat(-1.25, -0.75 + offset),
            ],
            // Horizontal stroke of the plus.
            [
                Point::flat(-1.5, -1.0 + offset),
                Point::flat(-1.0, -1.0 + offset),
            ],
            // The minus on the other row.
            [
                Point::flat(-1.5, 1.0 - offset),
                Point::flat(-1.0, 1.0 - offset),
            ],
        ]
    }
}

impl SymbolDefinition for OpAmpDefinition {
    fn name(&self) -> &'static str {
        "op-amp"
    }

    fn terminals(&self) -> Vec<(Id, Point)> {
        let inputs = Self::input_leads();
        let mut terminals = vec![
            (OpAmpTerminal::NonInvertingInput.into(), inputs[0][1]),
            (OpAmpTerminal::InvertingInput.into(), inputs[1][1]),
            (OpAmpTerminal::Output.into(), Self::output_lead()[1]),
        ];
        if self.include_bias_terminals {
            let bias = Self::bias_leads();
            terminals.push((OpAmpTerminal::BiasPositive.into(), bias[0][1]));
            terminals.push((OpAmpTerminal::BiasNegative.into(), bias[1][1]));
        }
        terminals
    }

    fn build_path(&self, builder: &mut PathBuilder, _stroke_width: f32) -> Result<(), PathError> {
        // The triangle body, drawn as a pointer with its tip at the output
        // corner.
        let output = Self::output_lead();
        builder.pointer(
            output[0],
            output[1],
            TRIANGLE_DEPTH * 2.0 / f32::sqrt(3.0),
            TRIANGLE_DEPTH,
            0.0,
        )?;

        for lead in Self::input_leads() {
            builder.polyline(&lead)?;
        }
        builder.polyline(&Self::output_lead())?;

        if self.include_bias_terminals {
            for lead in Self::bias_leads() {
                builder.polyline(&lead)?;
            }
        }

        for mark in self.polarity_marks() {
            builder.polyline(&mark)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_terminals() {
        let terminals = OpAmpDefinition::new().terminals();
        assert_eq!(terminals.len(), 3);
        assert_eq!(terminals[0].1, Point::flat(-2.75, 1.0));
        assert_eq!(terminals[1].1, Point::flat(-2.75, -1.0));
        assert_eq!(terminals[2].1, Point::flat(2.75, 0.0));
    }

    #[test]
    fn test_bias_terminals_optional() {
        let with_bias = OpAmpDefinition::new().with_bias_terminals();
        let terminals = with_bias.terminals();
        assert_eq!(terminals.len(), 5);
        assert_eq!(terminals[3].0, Id::new("V+"));
        assert_eq!(terminals[4].0, Id::new("V-"));
        assert!(terminals[3].1.y() > 0.0);
        assert!(terminals[4].1.y() < 0.0);
    }

    #[test]
    fn test_polarity_rows_flip() {
        let default_marks = OpAmpDefinition::new().polarity_marks();
        let flipped_marks = OpAmpDefinition::new()
            .with_inverting_on_top()
            .polarity_marks();

        // The plus sits on the top row by default, bottom row when flipped.
        assert!(default_marks[1][0].y() > 0.0);
        assert!(flipped_marks[1][0].y() < 0.0);
    }

    #[test]
    fn test_bias_leads_in_path() {
        let mut plain = PathBuilder::new();
        OpAmpDefinition::new().build_path(&mut plain, 0.15).unwrap();
        let mut biased = PathBuilder::new();
        OpAmpDefinition::new()
            .with_bias_terminals()
            .build_path(&mut biased, 0.15)
            .unwrap();

        assert_eq!(
            biased.build().subpaths().len(),
            plain.build().subpaths().len() + 2
        );
    }
}
