//! Shape data: ROI zones and people-counting lines.

mod counting_line;
mod polygon;

pub use counting_line::{CountingLine, LineDraft, LinePoint, MIN_LINE_POINTS, Role};
pub use polygon::{
    MIN_POLYGON_VERTICES, Polygon, PolygonDraft, ZoneId, is_simple_polygon, palette_color,
};
