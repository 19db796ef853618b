//! Render-ready view of the active mode.
//!
//! The host paints whatever `RenderModel` describes; nothing here touches a
//! drawing surface. All coordinates are display space.

use serde::Serialize;

use crate::color_utils::to_hex;
use crate::constants::{LINE_LABEL_OFFSET, MAX_SURFACE_HEIGHT};
use crate::geometry::{self, Extent, Point};
use crate::model::{CountingLine, Polygon, Role, ZoneId, palette_color};
use crate::session::{AnnotationSession, Mode, OutputSize};

/// What kind of shape a `RenderShape` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    Zone { id: ZoneId },
    Line { role: Role },
}

/// A completed shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderShape {
    #[serde(flatten)]
    pub kind: ShapeKind,
    pub label: String,
    /// `#rrggbb`
    pub color: String,
    pub points: Vec<Point>,
    /// Where the label is centered
    pub label_anchor: Point,
    /// Closed zones are filled; lines get an arrowhead at the last point
    pub closed: bool,
    pub point_count: usize,
}

impl RenderShape {
    fn zone(polygon: &Polygon) -> Self {
        let points = polygon.display_vertices.clone();
        Self {
            kind: ShapeKind::Zone { id: polygon.id },
            label: polygon.label(),
            color: to_hex(polygon.color),
            label_anchor: geometry::centroid(&points).unwrap_or_default(),
            closed: true,
            point_count: polygon.len(),
            points,
        }
    }

    fn line(line: &CountingLine) -> Self {
        let points: Vec<Point> = line.display_points().collect();
        let label_anchor = points
            .first()
            .map(|p| Point::new(p.x, p.y - LINE_LABEL_OFFSET))
            .unwrap_or_default();
        Self {
            kind: ShapeKind::Line { role: line.role },
            label: line.role.label().to_string(),
            color: to_hex(line.color()),
            label_anchor,
            closed: false,
            point_count: line.len(),
            points,
        }
    }
}

/// The shape being drawn, with the dashed segment to the pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftShape {
    pub color: String,
    pub points: Vec<Point>,
    /// From the last placed point to the hover position
    pub preview: Option<[Point; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Done,
    Active,
    Pending,
}

/// One row of the Main/Entry/Exit step indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleProgress {
    pub role: Role,
    pub label: &'static str,
    pub color: String,
    pub state: StepState,
    pub point_count: usize,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub mode: Mode,
    pub surface: Extent,
    pub shapes: Vec<RenderShape>,
    pub draft: Option<DraftShape>,
    /// Empty in ROI mode
    pub progress: Vec<RoleProgress>,
}

impl RenderModel {
    /// Build the model for the session's active mode.
    pub fn build(session: &AnnotationSession, hover: Option<Point>) -> Self {
        let (shapes, draft, progress) = match session.mode() {
            Mode::Roi => {
                let roi = session.roi();
                let shapes = roi.polygons().iter().map(RenderShape::zone).collect();
                let draft = draft_shape(
                    roi.draft().points().to_vec(),
                    palette_color(roi.next_id()),
                    hover,
                );
                (shapes, draft, Vec::new())
            }
            Mode::People => {
                let people = session.people();
                let shapes = people.lines().map(RenderShape::line).collect();
                let current = people.current_role();
                let draft = draft_shape(
                    people.draft().points().iter().map(|p| p.display).collect(),
                    current.color(),
                    hover,
                );
                let progress = Role::ALL
                    .iter()
                    .map(|&role| {
                        let line = people.line(role);
                        let state = match line {
                            Some(_) => StepState::Done,
                            None if role == current => StepState::Active,
                            None => StepState::Pending,
                        };
                        RoleProgress {
                            role,
                            label: role.label(),
                            color: to_hex(role.color()),
                            state,
                            point_count: line.map_or(0, CountingLine::len),
                        }
                    })
                    .collect();
                (shapes, draft, progress)
            }
        };

        Self {
            mode: session.mode(),
            surface: session.surface(),
            shapes,
            draft,
            progress,
        }
    }
}

fn draft_shape(points: Vec<Point>, color: [u8; 3], hover: Option<Point>) -> Option<DraftShape> {
    let last = *points.last()?;
    Some(DraftShape {
        color: to_hex(color),
        preview: hover.map(|h| [last, h]),
        points,
    })
}

/// Surface size for a container `available_width` wide showing an image of
/// `output`'s aspect ratio, capped at `MAX_SURFACE_HEIGHT`.
pub fn fit_surface(available_width: f32, output: OutputSize) -> Extent {
    let aspect = output.width as f32 / output.height as f32;
    let height = (available_width / aspect).min(MAX_SURFACE_HEIGHT);
    Extent::new(available_width.round(), height.round())
}
