//! The circuit symbol catalog.
//!
//! Each symbol is a small [`SymbolDefinition`](crate::element::SymbolDefinition)
//! strategy supplying only its terminal map and path descriptor; the shared
//! element abstraction does everything else. Symbols are authored around
//! their own origin in diagram units and expose a closed terminal enum
//! convertible to [`Id`](faraday_core::identifier::Id).

mod battery;
mod bjt;
mod capacitor;
mod current_source;
mod function_generator;
mod ground;
mod inductor;
mod op_amp;
mod resistor;

pub use battery::{BatteryDefinition, BatteryTerminal};
pub use bjt::{BjtNpnDefinition, BjtTerminal};
pub use capacitor::{CapacitorDefinition, CapacitorTerminal};
pub use current_source::{CurrentSourceDefinition, CurrentSourceTerminal};
pub use function_generator::{FunctionGeneratorDefinition, FunctionGeneratorTerminal};
pub use ground::{GroundDefinition, GroundTerminal};
pub use inductor::{InductorDefinition, InductorTerminal};
pub use op_amp::{OpAmpDefinition, OpAmpTerminal};
pub use resistor::{ResistorDefinition, ResistorTerminal};
