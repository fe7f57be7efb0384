//! Error types for Faraday operations.
//!
//! Every variant is a local precondition violation on the call just made:
//! nothing is retried, and no operation commits partial geometry before
//! failing.

use thiserror::Error;

use faraday_core::{draw::PathError, identifier::Id};

/// The main error type for Faraday operations.
#[derive(Debug, Error)]
pub enum FaradayError {
    /// A terminal name was looked up on an element or wire that does not
    /// define it.
    #[error("unknown terminal `{terminal}` on `{owner}`")]
    UnknownTerminal { owner: String, terminal: Id },

    /// A symbol definition declared no terminals.
    #[error("symbol `{symbol}` defines no terminals")]
    EmptyTerminals { symbol: String },

    /// A wire split fraction outside the open interval (0, 1).
    #[error("split fraction {0} is outside the open interval (0, 1)")]
    SplitFraction(f32),

    /// An unrecognized rectilinear start axis.
    #[error("invalid start axis `{0}`, valid values: x, y")]
    StartAxis(String),

    /// A wire endpoint was bound to a terminal of its own wire.
    #[error("wire endpoint cannot track a terminal of its own wire")]
    SelfBinding,

    /// Invalid path geometry (degenerate pointer direction, zero arc sweep,
    /// too-short polyline).
    #[error(transparent)]
    Path(#[from] PathError),

    /// A configuration value failed to parse.
    #[error("configuration error: {0}")]
    Config(String),
}
