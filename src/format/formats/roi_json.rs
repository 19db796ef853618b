//! ROI zones as JSON point arrays.

use serde::Serialize;

use crate::format::error::FormatError;
use crate::format::formats::integer_point;
use crate::format::traits::OutputFormat;
use crate::session::{AnnotationSession, Mode};

/// One JSON array per zone, zones separated by newlines.
///
/// Example: `[{"x":0,"y":0},{"x":10,"y":0},{"x":5,"y":10}]`
pub struct RoiJsonFormat;

#[derive(Serialize)]
struct JsonPoint {
    x: i64,
    y: i64,
}

impl OutputFormat for RoiJsonFormat {
    fn id(&self) -> &'static str {
        "json"
    }

    fn display_name(&self) -> &'static str {
        "JSON"
    }

    fn description(&self) -> &'static str {
        "{\"x\": int, \"y\": int} per point"
    }

    fn mode(&self) -> Mode {
        Mode::Roi
    }

    fn encode(&self, session: &AnnotationSession) -> Result<String, FormatError> {
        let mut lines = Vec::with_capacity(session.roi().polygons().len());
        for polygon in session.roi().polygons() {
            let points: Vec<JsonPoint> = polygon
                .vertices
                .iter()
                .map(|&p| {
                    let (x, y) = integer_point(p);
                    JsonPoint { x, y }
                })
                .collect();
            lines.push(serde_json::to_string(&points)?);
        }
        Ok(lines.join("\n"))
    }
}
