//! Wires: two-terminal connectors with live-bound endpoints.
//!
//! A [`Wire`] is a degenerate element: exactly two terminals ("left" and
//! "right") joined by a straight segment. Each endpoint may be *bound*, per
//! axis, to a foreign terminal; bound axes are recomputed from the live
//! target on every refresh, while unbound axes retain whatever coordinate
//! was last explicitly set. Complementary partial bindings on two wires are
//! how the router produces L-shaped connections that re-route as elements
//! move.

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;
use log::trace;
use svg::node::element as svg_element;

use faraday_core::{
    apply_stroke,
    draw::{Drawable, Path, StrokeDefinition, TERMINAL_MARKER_RATIO, Terminal},
    geometry::{Axes, Axis, Bounds, Point},
    identifier::Id,
};

use crate::{element::TerminalSource, error::FaradayError};

/// Shared handle to a terminal source a binding reads from.
pub type TargetHandle = Rc<RefCell<dyn TerminalSource>>;

/// Shared handle to a wire placed in a scene.
pub type WireHandle = Rc<RefCell<Wire>>;

/// Terminals of a [`Wire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireTerminal {
    Left,
    Right,
}

impl From<WireTerminal> for Id {
    fn from(terminal: WireTerminal) -> Id {
        match terminal {
            WireTerminal::Left => Id::new("left"),
            WireTerminal::Right => Id::new("right"),
        }
    }
}

/// A per-axis rule tying a wire endpoint coordinate to a foreign terminal.
#[derive(Clone)]
pub(crate) struct Binding {
    target: TargetHandle,
    terminal: Id,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately shallow: printing the target would recurse through
        // the scene graph.
        f.debug_struct("Binding")
            .field("terminal", &self.terminal)
            .finish_non_exhaustive()
    }
}

/// A straight two-terminal connector.
#[derive(Debug)]
pub struct Wire {
    terminals: IndexMap<Id, Terminal>,
    bindings: IndexMap<Id, [Option<Binding>; 3]>,
    stroke: StrokeDefinition,
    marker_ratio: f32,
    path: Path,
}

impl Default for Wire {
    fn default() -> Self {
        Self::new()
    }
}

impl Wire {
    /// Creates an unbound unit wire from (-1, 0, 0) to (1, 0, 0).
    pub fn new() -> Self {
        let stroke = StrokeDefinition::default();
        let left = Terminal::new(WireTerminal::Left.into(), Point::flat(-1.0, 0.0), stroke.width());
        let right = Terminal::new(WireTerminal::Right.into(), Point::flat(1.0, 0.0), stroke.width());

        let mut terminals = IndexMap::new();
        terminals.insert(left.id(), left);
        terminals.insert(right.id(), right);

        let mut bindings = IndexMap::new();
        bindings.insert(left.id(), [const { None::<Binding> }; 3]);
        bindings.insert(right.id(), [const { None::<Binding> }; 3]);

        let path = Path::line(left.local(), right.local());
        Self {
            terminals,
            bindings,
            stroke,
            marker_ratio: TERMINAL_MARKER_RATIO,
            path,
        }
    }

    /// Wraps the wire into a shared scene handle.
    pub fn into_handle(self) -> WireHandle {
        Rc::new(RefCell::new(self))
    }

    /// Current coordinate of an endpoint.
    pub fn terminal_coord(&self, terminal: impl Into<Id>) -> Result<Point, FaradayError> {
        let terminal = terminal.into();
        self.terminals
            .get(&terminal)
            .map(|t| t.local())
            .ok_or(FaradayError::UnknownTerminal {
                owner: "wire".to_string(),
                terminal,
            })
    }

    /// Explicitly places an endpoint. The stored coordinate is what unbound
    /// axes keep showing; bound axes snap back to their target on the next
    /// refresh.
    pub fn set_terminal_coord(
        &mut self,
        terminal: impl Into<Id>,
        point: Point,
    ) -> Result<(), FaradayError> {
        let terminal = terminal.into();
        let stored = self
            .terminals
            .get_mut(&terminal)
            .ok_or(FaradayError::UnknownTerminal {
                owner: "wire".to_string(),
                terminal,
            })?;
        stored.set_local(point);
        self.rebuild();
        Ok(())
    }

    /// Binds the endpoint's coordinates on the selected axes to a foreign
    /// terminal, replacing any previous binding on those axes; unselected
    /// axes are left untouched. Recomputes the geometry immediately.
    ///
    /// # Errors
    ///
    /// Fails when the endpoint or the target terminal does not exist, or
    /// when the target is this wire itself.
    pub fn bind_terminal(
        &mut self,
        endpoint: impl Into<Id>,
        target: TargetHandle,
        target_terminal: impl Into<Id>,
        axes: Axes,
    ) -> Result<(), FaradayError> {
        let endpoint = endpoint.into();
        let target_terminal = target_terminal.into();

        // A wire being rebound is mutably borrowed by this call, so binding
        // it to itself shows up as the target being unreadable.
        {
            let source = target.try_borrow().map_err(|_| FaradayError::SelfBinding)?;
            source.terminal_coord(target_terminal)?;
        }

        let slots = self
            .bindings
            .get_mut(&endpoint)
            .ok_or(FaradayError::UnknownTerminal {
                owner: "wire".to_string(),
                terminal: endpoint,
            })?;
        for axis in Axis::ALL {
            if axes.contains(axis) {
                slots[axis.index()] = Some(Binding {
                    target: Rc::clone(&target),
                    terminal: target_terminal,
                });
            }
        }

        trace!(endpoint:% = endpoint, terminal:% = target_terminal; "bound wire endpoint");
        self.refresh()
    }

    /// Whether any endpoint has a binding on any axis. Only such wires need
    /// per-frame refreshes.
    pub fn has_bindings(&self) -> bool {
        self.bindings
            .values()
            .any(|slots| slots.iter().any(Option::is_some))
    }

    /// Recomputes endpoint coordinates from live bindings and regenerates
    /// the straight-path geometry. The scene calls this once per frame for
    /// every bound wire; bindings only read foreign terminal state, so the
    /// order across wires does not matter.
    pub fn refresh(&mut self) -> Result<(), FaradayError> {
        for (endpoint, slots) in &self.bindings {
            let stored = self.terminals[endpoint].local();
            let mut updated = stored;
            for axis in Axis::ALL {
                if let Some(binding) = &slots[axis.index()] {
                    let target = binding
                        .target
                        .try_borrow()
                        .map_err(|_| FaradayError::SelfBinding)?;
                    let coord = target.terminal_coord(binding.terminal)?;
                    updated = updated.with_component(axis, coord.component(axis));
                }
            }
            self.terminals[endpoint].set_local(updated);
        }
        self.rebuild();
        Ok(())
    }

    /// Shifts both endpoints' stored coordinates. Bound axes snap back on
    /// the next refresh.
    pub fn translate(&mut self, offset: Point) -> &mut Self {
        for terminal in self.terminals.values_mut() {
            let moved = terminal.local().add_point(offset);
            terminal.set_local(moved);
        }
        self.rebuild();
        self
    }

    /// Uniformly scales the wire about the midpoint of its endpoints. On a
    /// fully bound wire the lasting effect is the stroke-width correction.
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        let left = self.terminals[0].local();
        let right = self.terminals[1].local();
        let mid = left.midpoint(right);
        for terminal in self.terminals.values_mut() {
            let scaled = mid.add_point(terminal.local().sub_point(mid).scale(factor));
            terminal.set_local(scaled);
            terminal.scale_marker(factor.abs());
        }
        self.apply_stroke_scale();
        self.rebuild();
        self
    }

    /// Current stroke style.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Replaces the stroke style wholesale (split parts inherit their
    /// original's stroke this way).
    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    /// Sets an explicit stroke width, detaching it from the current scale.
    pub fn set_stroke_width(&mut self, width: f32) {
        if width != 0.0 {
            if let Some(first) = self.terminals.values().next() {
                self.marker_ratio = first.marker_radius() / width;
            }
        }
        self.stroke.set_width(width);
    }

    /// Per-frame stroke-width correction, mirroring the element policy.
    pub fn apply_stroke_scale(&mut self) {
        if let Some(first) = self.terminals.values().next() {
            if self.marker_ratio != 0.0 {
                self.stroke.set_width(first.marker_radius() / self.marker_ratio);
            }
        }
    }

    /// Current straight-segment geometry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn endpoint_bindings(&self, endpoint: Id) -> [Option<Binding>; 3] {
        self.bindings[&endpoint].clone()
    }

    pub(crate) fn set_endpoint_bindings(&mut self, endpoint: Id, slots: [Option<Binding>; 3]) {
        self.bindings[&endpoint] = slots;
    }

    fn rebuild(&mut self) {
        self.path = Path::line(self.terminals[0].local(), self.terminals[1].local());
    }
}

impl TerminalSource for Wire {
    fn source_name(&self) -> String {
        "wire".to_string()
    }

    fn terminal_coord(&self, terminal: Id) -> Result<Point, FaradayError> {
        Wire::terminal_coord(self, terminal)
    }
}

impl Drawable for Wire {
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
