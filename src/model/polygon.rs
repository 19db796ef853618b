//! ROI zone polygons and the in-progress vertex chain.

use serde::{Deserialize, Serialize};

use crate::constants::ROI_PALETTE;
use crate::geometry::{self, Point};

/// Unique identifier for a zone. Assigned from 1 upward and never reused.
pub type ZoneId = u32;

/// Minimum number of vertices required to close a zone.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Palette color for a zone id: `(id - 1) mod palette size`.
pub fn palette_color(id: ZoneId) -> [u8; 3] {
    let index = (id.max(1) - 1) as usize % ROI_PALETTE.len();
    ROI_PALETTE[index]
}

/// Whether no two non-adjacent edges of the closed polygon cross.
///
/// The closing edge (last vertex back to the first) is included.
pub fn is_simple_polygon(vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < MIN_POLYGON_VERTICES {
        return false;
    }
    let edge = |i: usize| (vertices[i], vertices[(i + 1) % n]);
    for i in 0..n {
        for j in (i + 2)..n {
            // First and last edges meet at vertex 0
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = edge(i);
            let (c, d) = edge(j);
            if geometry::intersects(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

/// A closed ROI zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Zone identifier, also used for the label ("ROI 3").
    pub id: ZoneId,
    /// RGB color picked from the palette by id.
    pub color: [u8; 3],
    /// Vertices in logical (output) space, in drawing order.
    pub vertices: Vec<Point>,
    /// The same vertices on the display surface they were drawn on.
    /// Render-only: never exported and never rescaled.
    #[serde(skip)]
    pub display_vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(id: ZoneId, vertices: Vec<Point>, display_vertices: Vec<Point>) -> Self {
        Self {
            id,
            color: palette_color(id),
            vertices,
            display_vertices,
        }
    }

    /// Label shown next to the zone.
    pub fn label(&self) -> String {
        format!("ROI {}", self.id)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Vertices placed so far for a zone that has not been closed yet.
///
/// Points are kept in display space only; they are converted to logical
/// space once, when the chain is closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonDraft {
    points: Vec<Point>,
}

impl PolygonDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether the edge from the last point to `candidate` would cross any
    /// earlier, non-adjacent edge of the chain.
    pub fn edge_would_cross(&self, candidate: Point) -> bool {
        let pts = &self.points;
        if pts.len() < 2 {
            return false;
        }
        let last = pts[pts.len() - 1];
        // Edge (n-2, n-1) shares `last` and is skipped
        pts.windows(2)
            .take(pts.len() - 2)
            .any(|edge| geometry::intersects(edge[0], edge[1], last, candidate))
    }

    /// Whether the closing edge (last point back to the first) would cross
    /// any non-adjacent edge of the chain.
    pub fn closing_edge_crosses(&self) -> bool {
        let pts = &self.points;
        let n = pts.len();
        if n < MIN_POLYGON_VERTICES {
            return false;
        }
        let (first, last) = (pts[0], pts[n - 1]);
        // Edges 0 and n-2 touch the closing edge's endpoints
        (1..n - 2).any(|i| geometry::intersects(last, first, pts[i], pts[i + 1]))
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub(crate) fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    pub(crate) fn take(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(points: &[(f32, f32)]) -> PolygonDraft {
        let mut d = PolygonDraft::new();
        for &(x, y) in points {
            d.push(Point::new(x, y));
        }
        d
    }

    #[test]
    fn test_palette_color_cycles() {
        assert_eq!(palette_color(1), ROI_PALETTE[0]);
        assert_eq!(palette_color(10), ROI_PALETTE[9]);
        assert_eq!(palette_color(11), ROI_PALETTE[0]);
        assert_eq!(palette_color(23), ROI_PALETTE[2]);
    }

    #[test]
    fn test_polygon_label_and_color() {
        let poly = Polygon::new(3, vec![Point::new(0.0, 0.0); 3], Vec::new());
        assert_eq!(poly.label(), "ROI 3");
        assert_eq!(poly.color, ROI_PALETTE[2]);
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn test_edge_would_cross() {
        let d = draft(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]);
        // (5,10) -> (5,-5) crosses edge 0-1
        assert!(d.edge_would_cross(Point::new(5.0, -5.0)));
        // (5,10) -> (0,10) crosses nothing
        assert!(!d.edge_would_cross(Point::new(0.0, 10.0)));
    }

    #[test]
    fn test_short_chain_never_crosses() {
        assert!(!draft(&[]).edge_would_cross(Point::new(1.0, 1.0)));
        assert!(!draft(&[(0.0, 0.0)]).edge_would_cross(Point::new(1.0, 1.0)));
        assert!(!draft(&[(0.0, 0.0), (10.0, 0.0)]).edge_would_cross(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_closing_edge_crosses() {
        // Bow-tie: the crossing is between drawn edges, not on the closing edge
        let d = draft(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(!d.closing_edge_crosses());

        // (20,5) -> (0,0) passes through (10,2.5) on edge 1-2
        let d = draft(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 5.0)]);
        assert!(d.closing_edge_crosses());

        let square = draft(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(!square.closing_edge_crosses());
    }

    #[test]
    fn test_is_simple_polygon() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        assert!(is_simple_polygon(&square));

        let bowtie = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        assert!(!is_simple_polygon(&bowtie));
        assert!(!is_simple_polygon(&square[..2]));
    }

    #[test]
    fn test_take_empties_draft() {
        let mut d = draft(&[(1.0, 1.0), (2.0, 2.0)]);
        let pts = d.take();
        assert_eq!(pts.len(), 2);
        assert!(d.is_empty());
    }
}
