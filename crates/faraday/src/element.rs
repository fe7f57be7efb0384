//! Circuit elements: parametric symbols with named terminals.
//!
//! A [`CircuitElement`] pairs a [`SymbolDefinition`] strategy (which lists
//! terminals and replays outline primitives in the symbol's local frame)
//! with the current affine transform and stroke style. The element owns its
//! terminals; wires read terminal coordinates through the [`TerminalSource`]
//! trait but never mutate them.
//!
//! # Invariants
//!
//! - Terminal world coordinates are always consistent with the element's
//!   current transform: every transform operation moves outline and
//!   terminals together.
//! - Construction either fully succeeds or commits nothing; a definition
//!   with no terminals or invalid geometry is rejected up front.

use std::{cell::RefCell, rc::Rc};

use indexmap::IndexMap;
use log::debug;
use svg::node::element as svg_element;

use faraday_core::{
    apply_stroke,
    draw::{Drawable, Path, PathBuilder, PathError, StrokeDefinition, TERMINAL_MARKER_RATIO, Terminal},
    geometry::{Affine, Bounds, Point},
    identifier::Id,
};

use crate::{config::StyleConfig, error::FaradayError};

/// Shared handle to an element placed in a scene.
pub type ElementHandle = Rc<RefCell<CircuitElement>>;

/// Anything that owns named terminals whose world coordinates can be read.
///
/// Implemented by [`CircuitElement`] and by [`Wire`](crate::wire::Wire), so
/// wire endpoints can be bound to either.
pub trait TerminalSource: std::fmt::Debug {
    /// Short name used in diagnostics.
    fn source_name(&self) -> String;

    /// World-space coordinate of the named terminal.
    fn terminal_coord(&self, terminal: Id) -> Result<Point, FaradayError>;
}

/// A symbol's parametric description: its terminals and the outline
/// primitives that draw it, both in the symbol's local frame.
///
/// Concrete definitions live in the [`symbol`](crate::symbol) catalog; each
/// supplies only its path descriptor and terminal map.
pub trait SymbolDefinition: std::fmt::Debug {
    /// Symbol name used in diagnostics ("resistor", "op-amp", ...).
    fn name(&self) -> &'static str;

    /// Terminal names with their local-frame coordinates.
    fn terminals(&self) -> Vec<(Id, Point)>;

    /// Replays the outline primitives into the builder. `stroke_width` is
    /// the element's current effective width, for symbols that size details
    /// (the transistor's emitter arrow) from it.
    fn build_path(&self, builder: &mut PathBuilder, stroke_width: f32) -> Result<(), PathError>;

    /// Stroke the symbol is drawn with unless restyled.
    fn base_stroke(&self) -> StrokeDefinition {
        StrokeDefinition::default()
    }
}

/// A drawable circuit symbol with parametric geometry and named terminals.
#[derive(Debug)]
pub struct CircuitElement {
    definition: Box<dyn SymbolDefinition>,
    terminals: IndexMap<Id, Terminal>,
    transform: Affine,
    stroke: StrokeDefinition,
    /// Marker-radius-to-stroke-width ratio; recalibrated when a width is set
    /// explicitly so that scaling keeps tracking from the new baseline.
    marker_ratio: f32,
    /// Draw the outline from the far end (affects draw-in animations only).
    reversed: bool,
    local_path: Path,
    path: Path,
}

impl CircuitElement {
    /// Creates an element from a symbol definition, using the symbol's base
    /// stroke.
    ///
    /// # Errors
    ///
    /// Fails when the definition declares no terminals or its geometry is
    /// degenerate.
    pub fn new(definition: impl SymbolDefinition + 'static) -> Result<Self, FaradayError> {
        let stroke = definition.base_stroke();
        Self::from_parts(Box::new(definition), stroke)
    }

    /// Creates an element with the configured style layered over the
    /// symbol's base stroke.
    pub fn with_style(
        definition: impl SymbolDefinition + 'static,
        style: &StyleConfig,
    ) -> Result<Self, FaradayError> {
        let stroke = style
            .apply_to(definition.base_stroke())
            .map_err(FaradayError::Config)?;
        Self::from_parts(Box::new(definition), stroke)
    }

    fn from_parts(
        definition: Box<dyn SymbolDefinition>,
        stroke: StrokeDefinition,
    ) -> Result<Self, FaradayError> {
        let terminal_coords = definition.terminals();
        if terminal_coords.is_empty() {
            return Err(FaradayError::EmptyTerminals {
                symbol: definition.name().to_string(),
            });
        }

        let mut terminals = IndexMap::new();
        for (id, local) in terminal_coords {
            terminals.insert(id, Terminal::new(id, local, stroke.width()));
        }

        let mut builder = PathBuilder::new();
        definition.build_path(&mut builder, stroke.width())?;
        let local_path = builder.build();

        let path = local_path.clone();
        Ok(Self {
            definition,
            terminals,
            transform: Affine::IDENTITY,
            stroke,
            marker_ratio: TERMINAL_MARKER_RATIO,
            reversed: false,
            local_path,
            path,
        })
    }

    /// The symbol name ("resistor", "capacitor", ...).
    pub fn name(&self) -> &'static str {
        self.definition.name()
    }

    /// Iterates over the element's terminal names.
    pub fn terminal_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.terminals.keys().copied()
    }

    /// World-space coordinate of the named terminal.
    ///
    /// # Errors
    ///
    /// Fails with an unknown-terminal error when the name is not defined on
    /// this element.
    pub fn terminal_coord(&self, terminal: impl Into<Id>) -> Result<Point, FaradayError> {
        let terminal = terminal.into();
        let stored = self
            .terminals
            .get(&terminal)
            .ok_or(FaradayError::UnknownTerminal {
                owner: self.name().to_string(),
                terminal,
            })?;
        Ok(self.transform.apply(stored.local()))
    }

    /// Current world-space outline.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current stroke style.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// The element's transform anchor (its translated origin).
    pub fn anchor(&self) -> Point {
        self.transform.anchor()
    }

    /// Shifts the element (outline and terminals together).
    pub fn translate(&mut self, offset: Point) -> &mut Self {
        self.transform.translate(offset);
        self.update_world_path();
        self
    }

    /// Rotates the element about its anchor.
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        self.transform.rotate(angle);
        self.update_world_path();
        self
    }

    /// Uniformly scales the element about its anchor. Stroke width follows
    /// the scale through the terminal markers.
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.transform.scale(factor);
        for terminal in self.terminals.values_mut() {
            terminal.scale_marker(factor.abs());
        }
        self.apply_stroke_scale();
        self.update_world_path();
        self
    }

    /// Scales with independent x and y factors. Marker radii (and with them
    /// the corrected stroke width) follow the area-preserving average.
    pub fn scale_xy(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.transform.scale_xy(sx, sy);
        let factor = (sx * sy).abs().sqrt();
        for terminal in self.terminals.values_mut() {
            terminal.scale_marker(factor);
        }
        self.apply_stroke_scale();
        self.update_world_path();
        self
    }

    /// Reverses outline traversal so a draw-in animation sweeps from the
    /// other end. Purely cosmetic.
    pub fn set_reversed(&mut self, reversed: bool) {
        if self.reversed != reversed {
            self.reversed = reversed;
            self.local_path = self.local_path.reversed();
            self.update_world_path();
        }
    }

    /// Sets an explicit stroke width, detaching it from the current scale:
    /// the width sticks, and later scaling resumes tracking from it.
    pub fn set_stroke_width(&mut self, width: f32) {
        if width != 0.0 {
            if let Some(first) = self.terminals.values().next() {
                self.marker_ratio = first.marker_radius() / width;
            }
        }
        self.stroke.set_width(width);
    }

    /// Sets the stroke color.
    pub fn set_stroke_color(&mut self, color: faraday_core::color::Color) {
        self.stroke.set_color(color);
    }

    /// Recomputes the stroke width from the terminal-marker size so that
    /// line thickness stays visually proportional under scaling. Runs once
    /// per frame as a style correction; harmless to call more often.
    pub fn apply_stroke_scale(&mut self) {
        if let Some(first) = self.terminals.values().next() {
            if self.marker_ratio != 0.0 {
                self.stroke.set_width(first.marker_radius() / self.marker_ratio);
            }
        }
    }

    /// Computes and applies the rigid translation that makes the named
    /// source terminal coincide with `dest`'s terminal. Returns the applied
    /// translation; `dest` is left unmoved.
    ///
    /// ```no_run
    /// # use faraday::element::CircuitElement;
    /// # use faraday::symbol::{CapacitorDefinition, ResistorDefinition};
    /// # let mut resistor = CircuitElement::new(ResistorDefinition::new())?;
    /// # let capacitor = CircuitElement::new(CapacitorDefinition::new())?;
    /// resistor.connect_terminals("right", &capacitor, "left")?;
    /// # Ok::<(), faraday::FaradayError>(())
    /// ```
    pub fn connect_terminals(
        &mut self,
        source: impl Into<Id>,
        dest: &dyn TerminalSource,
        dest_terminal: impl Into<Id>,
    ) -> Result<Point, FaradayError> {
        let source = source.into();
        let dest_terminal = dest_terminal.into();
        let offset = dest
            .terminal_coord(dest_terminal)?
            .sub_point(self.terminal_coord(source)?);
        self.translate(offset);
        debug!(
            element = self.name(),
            dx = offset.x(),
            dy = offset.y();
            "aligned terminals"
        );
        Ok(offset)
    }

    /// Rebuilds the outline from the parametric descriptor and re-applies
    /// the current transform. Call after changing a definition parameter;
    /// idempotent, with no effect beyond this element's own path and stroke
    /// data.
    pub fn regenerate_geometry(&mut self) -> Result<(), FaradayError> {
        self.apply_stroke_scale();
        let mut builder = PathBuilder::new();
        self.definition.build_path(&mut builder, self.stroke.width())?;
        self.local_path = if self.reversed {
            builder.build().reversed()
        } else {
            builder.build()
        };
        self.update_world_path();
        Ok(())
    }

    /// Wraps the element into a shared scene handle.
    pub fn into_handle(self) -> ElementHandle {
        Rc::new(RefCell::new(self))
    }

    fn update_world_path(&mut self) {
        self.path = self.local_path.transform(&self.transform);
    }
}

impl TerminalSource for CircuitElement {
    fn source_name(&self) -> String {
        self.name().to_string()
    }

    fn terminal_coord(&self, terminal: Id) -> Result<Point, FaradayError> {
        CircuitElement::terminal_coord(self, terminal)
    }
}

impl Drawable for CircuitElement {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let path = svg_element::Path::new()
            .set("d", self.path.to_svg_data())
            .set("fill", "none");
        Box::new(apply_stroke!(path, self.stroke))
    }

    fn bounds(&self) -> Option<Bounds> {
        self.path.bounds()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use faraday_core::draw::DEFAULT_STROKE_WIDTH;

    use super::*;
    use crate::symbol::{CapacitorDefinition, ResistorDefinition, ResistorTerminal};

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = 1e-4);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = 1e-4);
        assert_approx_eq!(f32, actual.z(), expected.z(), epsilon = 1e-4);
    }

    #[test]
    fn test_unknown_terminal_lookup() {
        let resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        let err = resistor.terminal_coord("collector").unwrap_err();
        assert!(matches!(err, FaradayError::UnknownTerminal { .. }));
    }

    #[test]
    fn test_terminal_enum_lookup() {
        let resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        let left = resistor.terminal_coord(ResistorTerminal::Left).unwrap();
        assert_point_eq(left, Point::flat(-2.5, 0.0));
    }

    #[test]
    fn test_terminals_follow_translation() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        resistor.translate(Point::flat(3.0, -1.0));

        let right = resistor.terminal_coord("right").unwrap();
        assert_point_eq(right, Point::flat(5.5, -1.0));
    }

    #[test]
    fn test_terminals_follow_rotation() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        resistor.rotate(FRAC_PI_2);

        // The right lead swings from (2.5, 0) to (0, 2.5).
        let right = resistor.terminal_coord("right").unwrap();
        assert_point_eq(right, Point::flat(0.0, 2.5));
    }

    #[test]
    fn test_transform_composition() {
        // translate then rotate about the anchor then scale
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        resistor
            .translate(Point::flat(1.0, 0.0))
            .rotate(PI)
            .scale(2.0);

        let right = resistor.terminal_coord("right").unwrap();
        assert_point_eq(right, Point::flat(1.0 - 5.0, 0.0));
    }

    #[test]
    fn test_outline_and_terminals_move_together() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        let before: Vec<Point> = resistor.path().anchors().collect();

        resistor.translate(Point::flat(2.0, 2.0));
        let after: Vec<Point> = resistor.path().anchors().collect();

        for (a, b) in before.iter().zip(after.iter()) {
            assert_point_eq(*b, a.add_point(Point::flat(2.0, 2.0)));
        }
    }

    #[test]
    fn test_connect_terminals_aligns_and_leaves_dest_unmoved() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        let mut capacitor = CircuitElement::new(CapacitorDefinition::new()).unwrap();
        capacitor.translate(Point::flat(5.0, 0.0));
        let dest_before = capacitor.terminal_coord("left").unwrap();

        resistor.connect_terminals("right", &capacitor, "left").unwrap();

        let src = resistor.terminal_coord("right").unwrap();
        let dest = capacitor.terminal_coord("left").unwrap();
        assert_point_eq(src, dest);
        assert_point_eq(dest, dest_before);
    }

    #[test]
    fn test_stroke_width_follows_scale() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        assert_approx_eq!(f32, resistor.stroke().width(), DEFAULT_STROKE_WIDTH);

        resistor.scale(2.0);
        assert_approx_eq!(
            f32,
            resistor.stroke().width(),
            DEFAULT_STROKE_WIDTH * 2.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_explicit_stroke_width_sticks() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        resistor.scale(2.0);
        resistor.set_stroke_width(0.1);
        resistor.apply_stroke_scale();
        assert_approx_eq!(f32, resistor.stroke().width(), 0.1, epsilon = 1e-5);

        // Scaling after an explicit width tracks from the new baseline.
        resistor.scale(3.0);
        assert_approx_eq!(f32, resistor.stroke().width(), 0.3, epsilon = 1e-4);
    }

    #[test]
    fn test_regenerate_geometry_is_idempotent() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        resistor.translate(Point::flat(1.0, 2.0)).rotate(0.3);

        let before: Vec<Point> = resistor.path().anchors().collect();
        resistor.regenerate_geometry().unwrap();
        resistor.regenerate_geometry().unwrap();
        let after: Vec<Point> = resistor.path().anchors().collect();

        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(after.iter()) {
            assert_point_eq(*b, *a);
        }
    }

    #[test]
    fn test_reversed_draw_order_keeps_geometry() {
        let mut resistor = CircuitElement::new(ResistorDefinition::new()).unwrap();
        let forward: Vec<Point> = resistor.path().anchors().collect();

        resistor.set_reversed(true);
        let mut backward: Vec<Point> = resistor.path().anchors().collect();
        backward.reverse();

        assert_eq!(forward, backward);

        // Terminals are unaffected by draw order.
        assert_point_eq(
            resistor.terminal_coord("left").unwrap(),
            Point::flat(-2.5, 0.0),
        );
    }

    #[test]
    fn test_with_style_overrides_stroke() {
        let style = StyleConfig::default();
        let element = CircuitElement::with_style(ResistorDefinition::new(), &style).unwrap();
        assert_approx_eq!(f32, element.stroke().width(), style.stroke_width());
    }
}
