//! Coordinate-space mathematics and segment tests.
//!
//! Everything here is a pure function over plain values. Two coordinate
//! spaces are in play:
//! - display space: positions on the host's drawing surface, whose size
//!   changes whenever the viewport does
//! - logical space: positions in the user-chosen output resolution, which is
//!   what gets exported
//!
//! Both spaces share a top-left origin and differ only by a per-axis scale.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A 2D point. Which space it lives in is decided by the field holding it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both sides strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Turn direction of the triple `p -> q -> r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

/// Orientation of `r` relative to the directed line `p -> q`.
///
/// Uses the sign of `(r.y - p.y) * (q.x - p.x) - (q.y - p.y) * (r.x - p.x)`.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let cross = (r.y - p.y) * (q.x - p.x) - (q.y - p.y) * (r.x - p.x);
    match cross.partial_cmp(&0.0) {
        Some(Ordering::Greater) => Orientation::CounterClockwise,
        Some(Ordering::Less) => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

/// Whether segment `ab` properly crosses segment `cd`.
///
/// Segments that share an endpoint (exact coordinate equality) never count
/// as crossing, so consecutive polygon edges can meet at their vertex.
pub fn intersects(a: Point, b: Point, c: Point, d: Point) -> bool {
    if a == c || a == d || b == c || b == d {
        return false;
    }
    orientation(a, c, d) != orientation(b, c, d) && orientation(a, b, c) != orientation(a, b, d)
}

/// Round to the nearest half unit.
#[inline]
pub fn round_half(value: f32) -> f32 {
    (value * 2.0).round() / 2.0
}

/// Map a display-space point into logical space, rounded to half units.
pub fn to_logical(point: Point, display: Extent, logical: Extent) -> Point {
    Point {
        x: round_half(point.x * logical.width / display.width),
        y: round_half(point.y * logical.height / display.height),
    }
}

/// Map a logical-space point back onto the display surface (unrounded).
pub fn to_display(point: Point, display: Extent, logical: Extent) -> Point {
    Point {
        x: point.x * display.width / logical.width,
        y: point.y * display.height / logical.height,
    }
}

/// Scale a logical point by per-axis factors, re-rounding to half units.
pub fn rescale_point(point: Point, scale_x: f32, scale_y: f32) -> Point {
    Point {
        x: round_half(point.x * scale_x),
        y: round_half(point.y * scale_y),
    }
}

/// Mean of the given vertices, or `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f32;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}
