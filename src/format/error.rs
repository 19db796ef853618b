//! Error types for output encoding.

use thiserror::Error;

use crate::session::Mode;

/// Errors that can occur while encoding annotations to text.
#[derive(Error, Debug)]
pub enum FormatError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No format registered under this id
    #[error("Unknown output format: {id}")]
    UnknownFormat {
        /// The id that was requested
        id: String,
    },

    /// Format exists but encodes the other mode's shapes
    #[error("Format '{id}' encodes {expected}, not {requested}")]
    ModeMismatch {
        id: String,
        expected: &'static str,
        requested: &'static str,
    },
}

impl FormatError {
    /// Create an unknown format error.
    pub fn unknown_format(id: impl Into<String>) -> Self {
        Self::UnknownFormat { id: id.into() }
    }

    /// Create a mode mismatch error.
    pub fn mode_mismatch(id: impl Into<String>, expected: Mode, requested: Mode) -> Self {
        Self::ModeMismatch {
            id: id.into(),
            expected: expected.name(),
            requested: requested.name(),
        }
    }
}
