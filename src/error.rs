//! Error types for annotation engine operations.
//!
//! Every variant is recoverable. A rejected operation never mutates the
//! session; the host decides whether to surface `EngineError::notice`.

use thiserror::Error;

use crate::model::ZoneId;

/// Coarse classification of engine rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A proposed edge would cross an existing edge of the same shape
    Crossing,
    /// `finish` called with too few points
    InsufficientPoints,
    /// Nothing to act on; never shown to the user
    NoOp,
}

/// Reasons an engine operation can be rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// New edge from the last chain point crosses an earlier edge
    #[error("Lines cannot cross each other!")]
    EdgeCrossing,

    /// Closing edge (last point back to first) crosses an earlier edge
    #[error("Closing line would cross an existing edge!")]
    ClosingEdgeCrossing,

    /// Zone closed with fewer than 3 vertices
    #[error("Need at least 3 points to close a zone")]
    TooFewZonePoints {
        /// Number of points in the chain
        have: usize,
    },

    /// Counting line finished with fewer than 2 points
    #[error("Draw at least 2 points for a line")]
    TooFewLinePoints {
        /// Number of points in the draft
        have: usize,
    },

    /// Undo with no in-progress point and no completed shape
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Delete of an id that is not present
    #[error("Zone not found: {id}")]
    ZoneNotFound {
        /// The missing zone id
        id: ZoneId,
    },

    /// Output dimension of zero requested
    #[error("Output dimension must be positive")]
    ZeroDimension,
}

impl EngineError {
    /// Taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::EdgeCrossing | EngineError::ClosingEdgeCrossing => ErrorKind::Crossing,
            EngineError::TooFewZonePoints { .. } | EngineError::TooFewLinePoints { .. } => {
                ErrorKind::InsufficientPoints
            }
            EngineError::NothingToUndo
            | EngineError::ZoneNotFound { .. }
            | EngineError::ZeroDimension => ErrorKind::NoOp,
        }
    }

    /// Whether this rejection should stay invisible to the user.
    pub fn is_silent(&self) -> bool {
        self.kind() == ErrorKind::NoOp
    }

    /// User-facing message, or `None` for silent no-ops.
    pub fn notice(&self) -> Option<String> {
        (!self.is_silent()).then(|| self.to_string())
    }
}
