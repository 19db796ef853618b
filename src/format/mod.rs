//! Text export of the drawn shapes.
//!
//! Each mode has its own set of layouts; the user picks one per mode with a
//! `FormatSelection`. Encoders only read logical coordinates and round them
//! to integers at the last moment.
//!
//! ## Formats
//!
//! - **json** (ROI): one JSON array of `{"x","y"}` objects per zone
//! - **flat** (ROI): one `[x;y;...]` list per zone
//! - **standard** (People): one `line-crossing-<Role>=...` entry per line
//! - **combined** (People): Entry and Exit each merged with the Main line
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zonedraw::format::{FormatRegistry, FormatSelection};
//!
//! let registry = FormatRegistry::new();
//! let text = registry.encode(&session, Mode::Roi, &FormatSelection::default())?;
//! ```

mod error;
pub mod formats;
mod registry;
mod traits;

pub use error::FormatError;
pub use registry::FormatRegistry;
pub use traits::{FormatSelection, OutputFormat, PeopleFormat, RoiFormat};

use crate::session::{AnnotationSession, Mode};

/// Encode `mode`'s shapes with the built-in formats.
pub fn encode(
    session: &AnnotationSession,
    mode: Mode,
    selection: &FormatSelection,
) -> Result<String, FormatError> {
    FormatRegistry::new().encode(session, mode, selection)
}
