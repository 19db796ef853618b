//! ROI zones as flat semicolon lists.

use crate::format::error::FormatError;
use crate::format::formats::semicolon_list;
use crate::format::traits::OutputFormat;
use crate::session::{AnnotationSession, Mode};

/// One `[x;y;x;y;...]` list per zone, zones separated by newlines.
pub struct RoiFlatFormat;

impl OutputFormat for RoiFlatFormat {
    fn id(&self) -> &'static str {
        "flat"
    }

    fn display_name(&self) -> &'static str {
        "Flat"
    }

    fn description(&self) -> &'static str {
        "[x; y; x; y; …] flat integers"
    }

    fn mode(&self) -> Mode {
        Mode::Roi
    }

    fn encode(&self, session: &AnnotationSession) -> Result<String, FormatError> {
        Ok(session
            .roi()
            .polygons()
            .iter()
            .map(|polygon| format!("[{}]", semicolon_list(polygon.vertices.iter().copied())))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
