//! Wire routing between element terminals.
//!
//! The router builds [`Wire`]s whose endpoints are live-bound to element
//! terminals, so connections stay attached when elements move:
//!
//! - [`connect_straight`] joins two terminals with one straight wire.
//! - [`connect_rectilinear`] joins them with an axis-aligned L of two wires
//!   whose shared corner is produced by complementary partial bindings.
//! - [`split_wire`] cuts a wire into two colinear parts.
//! - [`bind_terminal`] replaces the binding of one endpoint.
//!
//! The caller owns the returned handles and decides which scene they join.

use std::{cell::RefCell, rc::Rc, str::FromStr};

use log::debug;

use faraday_core::{
    geometry::{Axes, Point},
    identifier::Id,
};

use crate::{
    element::TerminalSource,
    error::FaradayError,
    wire::{TargetHandle, Wire, WireHandle, WireTerminal},
};

/// Selects which element the rectilinear corner takes its x-coordinate
/// from, and with it which leg is drawn first: `X` puts the corner at
/// `(a.x, b.y)`, `Y` at `(b.x, a.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAxis {
    X,
    Y,
}

impl FromStr for StartAxis {
    type Err = FaradayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            _ => Err(FaradayError::StartAxis(s.to_string())),
        }
    }
}

fn as_target<T: TerminalSource + 'static>(handle: &Rc<RefCell<T>>) -> TargetHandle {
    Rc::clone(handle) as TargetHandle
}

/// Connects two terminals with a single straight wire.
///
/// Both endpoints are bound on all axes, so the wire tracks either element's
/// movements on every frame.
pub fn connect_straight<A, B>(
    a: &Rc<RefCell<A>>,
    a_terminal: impl Into<Id>,
    b: &Rc<RefCell<B>>,
    b_terminal: impl Into<Id>,
) -> Result<WireHandle, FaradayError>
where
    A: TerminalSource + 'static,
    B: TerminalSource + 'static,
{
    let a_terminal = a_terminal.into();
    let b_terminal = b_terminal.into();

    let wire = Wire::new().into_handle();
    {
        let mut wire = wire.borrow_mut();
        wire.bind_terminal(WireTerminal::Left, as_target(a), a_terminal, Axes::ALL)?;
        wire.bind_terminal(WireTerminal::Right, as_target(b), b_terminal, Axes::ALL)?;
    }

    debug!(from:% = a_terminal, to:% = b_terminal; "routed straight wire");
    Ok(wire)
}

/// Connects two terminals with an axis-aligned L of two wires, returned as
/// `(horizontal, vertical)`.
///
/// The corner is `(a.x, b.y)` for [`StartAxis::X`] and `(b.x, a.y)` for
/// [`StartAxis::Y`]; it is held by complementary per-axis bindings, so the L
/// re-routes as either element moves. The endpoint nearer `a` is each
/// wire's "left", which makes draw-in animations start from `a`'s side.
pub fn connect_rectilinear<A, B>(
    a: &Rc<RefCell<A>>,
    a_terminal: impl Into<Id>,
    b: &Rc<RefCell<B>>,
    b_terminal: impl Into<Id>,
    start_axis: StartAxis,
) -> Result<(WireHandle, WireHandle), FaradayError>
where
    A: TerminalSource + 'static,
    B: TerminalSource + 'static,
{
    let a_terminal = a_terminal.into();
    let b_terminal = b_terminal.into();

    let first = Wire::new().into_handle();
    let second = Wire::new().into_handle();

    // The wire leaving `a` runs along one axis to the corner; the corner
    // endpoint mixes one coordinate from each element.
    let (corner_x, corner_x_terminal, corner_y, corner_y_terminal) = match start_axis {
        StartAxis::X => (as_target(a), a_terminal, as_target(b), b_terminal),
        StartAxis::Y => (as_target(b), b_terminal, as_target(a), a_terminal),
    };

    {
        let mut first = first.borrow_mut();
        first.bind_terminal(WireTerminal::Left, as_target(a), a_terminal, Axes::ALL)?;
        first.bind_terminal(
            WireTerminal::Right,
            Rc::clone(&corner_x),
            corner_x_terminal,
            Axes::X,
        )?;
        first.bind_terminal(
            WireTerminal::Right,
            Rc::clone(&corner_y),
            corner_y_terminal,
            Axes::Y,
        )?;
    }
    {
        let mut second = second.borrow_mut();
        second.bind_terminal(WireTerminal::Left, corner_x, corner_x_terminal, Axes::X)?;
        second.bind_terminal(WireTerminal::Left, corner_y, corner_y_terminal, Axes::Y)?;
        second.bind_terminal(WireTerminal::Right, as_target(b), b_terminal, Axes::ALL)?;
    }

    debug!(
        from:% = a_terminal,
        to:% = b_terminal,
        start_axis:? = start_axis;
        "routed rectilinear wires"
    );

    // With the corner at (a.x, b.y) the leg leaving `a` is the vertical one.
    match start_axis {
        StartAxis::X => Ok((second, first)),
        StartAxis::Y => Ok((first, second)),
    }
}

/// Splits a wire into two colinear parts meeting at the fraction `t` along
/// it.
///
/// The left part keeps the original's left-endpoint bindings, the right
/// part its right-endpoint bindings; the shared midpoint is a free point at
/// the computed location until a caller re-binds it. Both parts inherit the
/// original's stroke. The original wire is left untouched; remove it from
/// the scene when replacing it with the parts.
///
/// # Errors
///
/// Fails with a range error unless `0 < t < 1`.
pub fn split_wire(wire: &WireHandle, t: f32) -> Result<(WireHandle, WireHandle), FaradayError> {
    if !(t > 0.0 && t < 1.0) {
        return Err(FaradayError::SplitFraction(t));
    }

    let source = wire.borrow();
    let left_coord = source.terminal_coord(WireTerminal::Left)?;
    let right_coord = source.terminal_coord(WireTerminal::Right)?;
    let mid = left_coord.lerp(right_coord, t);

    let left_id: Id = WireTerminal::Left.into();
    let right_id: Id = WireTerminal::Right.into();

    let mut left_part = Wire::new();
    left_part.set_stroke(source.stroke().clone());
    left_part.set_terminal_coord(left_id, left_coord)?;
    left_part.set_terminal_coord(right_id, mid)?;
    left_part.set_endpoint_bindings(left_id, source.endpoint_bindings(left_id));

    let mut right_part = Wire::new();
    right_part.set_stroke(source.stroke().clone());
    right_part.set_terminal_coord(left_id, mid)?;
    right_part.set_terminal_coord(right_id, right_coord)?;
    right_part.set_endpoint_bindings(right_id, source.endpoint_bindings(right_id));
    drop(source);

    left_part.refresh()?;
    right_part.refresh()?;

    debug!(t = t; "split wire");
    Ok((left_part.into_handle(), right_part.into_handle()))
}

/// Replaces the binding of one wire endpoint on the selected axes.
///
/// Unselected axes keep their existing bindings; the wire's geometry is
/// recomputed immediately.
pub fn bind_terminal<T>(
    wire: &WireHandle,
    endpoint: impl Into<Id>,
    target: &Rc<RefCell<T>>,
    target_terminal: impl Into<Id>,
    axes: Axes,
) -> Result<(), FaradayError>
where
    T: TerminalSource + 'static,
{
    wire.borrow_mut()
        .bind_terminal(endpoint, as_target(target), target_terminal, axes)
}

/// Reads a terminal coordinate from any terminal source handle. Convenience
/// for drivers that hold handles rather than borrowed elements.
pub fn terminal_coord<T>(
    source: &Rc<RefCell<T>>,
    terminal: impl Into<Id>,
) -> Result<Point, FaradayError>
where
    T: TerminalSource + 'static,
{
    source.borrow().terminal_coord(terminal.into())
}
