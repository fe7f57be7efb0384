//! Scene membership and the per-frame scheduler.
//!
//! The external renderer drives animation; the scene's only scheduling
//! surface is [`Scene::advance_frame`], the per-frame callback that
//! refreshes every live-bound wire and applies the stroke-width style
//! correction. Everything runs synchronously on one thread: wires read
//! foreign terminal state but never write it, so the order of refreshes
//! does not matter. Removing a member simply stops further callback work
//! for it; there is nothing in flight to cancel.

use std::rc::Rc;

use log::trace;

use faraday_core::{draw::Drawable, geometry::Bounds};

use crate::{
    config::AppConfig,
    element::{CircuitElement, ElementHandle},
    error::FaradayError,
    wire::WireHandle,
};

/// A collection of elements and wires advanced one frame at a time.
#[derive(Debug, Default)]
pub struct Scene {
    config: AppConfig,
    elements: Vec<ElementHandle>,
    wires: Vec<WireHandle>,
    frame: u64,
}

impl Scene {
    /// Creates an empty scene with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the scene configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Adds an element and returns its shared handle.
    pub fn add_element(&mut self, element: CircuitElement) -> ElementHandle {
        let handle = element.into_handle();
        self.elements.push(Rc::clone(&handle));
        handle
    }

    /// Adds an already-shared element handle.
    pub fn add_element_handle(&mut self, handle: ElementHandle) {
        self.elements.push(handle);
    }

    /// Adds a wire handle (as produced by the router).
    pub fn add_wire(&mut self, wire: WireHandle) {
        self.wires.push(wire);
    }

    /// Adds a rectilinear wire pair.
    pub fn add_wire_pair(&mut self, pair: (WireHandle, WireHandle)) {
        self.wires.push(pair.0);
        self.wires.push(pair.1);
    }

    /// Removes an element; its terminals stop receiving per-frame style
    /// corrections. Returns whether it was present.
    pub fn remove_element(&mut self, handle: &ElementHandle) -> bool {
        let before = self.elements.len();
        self.elements.retain(|member| !Rc::ptr_eq(member, handle));
        self.elements.len() != before
    }

    /// Removes a wire; its bindings stop being refreshed. Returns whether it
    /// was present.
    pub fn remove_wire(&mut self, handle: &WireHandle) -> bool {
        let before = self.wires.len();
        self.wires.retain(|member| !Rc::ptr_eq(member, handle));
        self.wires.len() != before
    }

    /// The elements currently in the scene.
    pub fn elements(&self) -> &[ElementHandle] {
        &self.elements
    }

    /// The wires currently in the scene.
    pub fn wires(&self) -> &[WireHandle] {
        &self.wires
    }

    /// Runs one redraw tick: refreshes every wire that has at least one
    /// binding, then applies the stroke-width correction to all members.
    pub fn advance_frame(&mut self) -> Result<(), FaradayError> {
        self.frame += 1;

        let mut refreshed = 0usize;
        for wire in &self.wires {
            let mut wire = wire.borrow_mut();
            if wire.has_bindings() {
                wire.refresh()?;
                refreshed += 1;
            }
            wire.apply_stroke_scale();
        }
        for element in &self.elements {
            element.borrow_mut().apply_stroke_scale();
        }

        trace!(frame = self.frame, refreshed = refreshed; "advanced frame");
        Ok(())
    }

    /// Number of frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// World-space bounds over every member's geometry, or `None` for an
    /// empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        let element_bounds = self
            .elements
            .iter()
            .filter_map(|element| element.borrow().bounds());
        let wire_bounds = self.wires.iter().filter_map(|wire| wire.borrow().bounds());

        element_bounds
            .chain(wire_bounds)
            .reduce(|acc, bounds| acc.merge(bounds))
    }
}
