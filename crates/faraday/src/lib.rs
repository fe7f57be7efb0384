//! Faraday - animated circuit-diagram components.
//!
//! Faraday provides drawable circuit symbols (resistor, capacitor,
//! inductor, battery, ground, BJT, op-amp, current source, function
//! generator) as parametric vector paths with named terminals, plus a wire
//! router that keeps connectors attached while elements move. Rendering,
//! animation interpolation, camera and typesetting belong to an external
//! renderer; Faraday owns the terminal-aware geometry underneath.
//!
//! # Example
//!
//! ```
//! use faraday::{
//!     element::CircuitElement,
//!     router::{self, StartAxis},
//!     scene::Scene,
//!     symbol::{CapacitorDefinition, ResistorDefinition},
//! };
//! use faraday_core::geometry::Point;
//!
//! let mut scene = Scene::new();
//! let resistor = scene.add_element(CircuitElement::new(ResistorDefinition::new())?);
//! let capacitor = scene.add_element(CircuitElement::new(CapacitorDefinition::new())?);
//! capacitor.borrow_mut().translate(Point::flat(6.0, 2.0));
//!
//! let pair = router::connect_rectilinear(&resistor, "right", &capacitor, "left", StartAxis::X)?;
//! scene.add_wire_pair(pair);
//!
//! // Moving an element and ticking the scene re-routes its wires.
//! resistor.borrow_mut().translate(Point::flat(0.0, -1.0));
//! scene.advance_frame()?;
//! # Ok::<(), faraday::FaradayError>(())
//! ```

pub mod config;
pub mod element;
pub mod export;
pub mod router;
pub mod scene;
pub mod symbol;
pub mod wire;

mod error;

pub use error::FaradayError;

pub use faraday_core::{color, draw, geometry, identifier};
