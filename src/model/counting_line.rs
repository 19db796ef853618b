//! People-counting line roles and polylines.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Minimum number of points for a finished counting line.
pub const MIN_LINE_POINTS: usize = 2;

/// The three lines of a line-crossing definition, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The boundary line people cross
    #[default]
    Main,
    /// Reference polyline pointing in the entry direction
    Entry,
    /// Reference polyline pointing in the exit direction
    Exit,
}

impl Role {
    /// All roles in drawing order.
    pub const ALL: [Role; 3] = [Role::Main, Role::Entry, Role::Exit];

    /// Fixed slot index (0, 1, 2).
    pub fn index(self) -> usize {
        match self {
            Role::Main => 0,
            Role::Entry => 1,
            Role::Exit => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Role> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Main => "Main Line",
            Role::Entry => "Entry Direction",
            Role::Exit => "Exit Direction",
        }
    }

    /// Key used by the exported line-crossing text.
    pub fn key(self) -> &'static str {
        match self {
            Role::Main => "line-crossing-Main",
            Role::Entry => "line-crossing-Entry",
            Role::Exit => "line-crossing-Exit",
        }
    }

    /// Fixed RGB color for this role.
    pub fn color(self) -> [u8; 3] {
        match self {
            Role::Main => [0x22, 0xc5, 0x5e],
            Role::Entry => [0x3b, 0x82, 0xf6],
            Role::Exit => [0xf9, 0x73, 0x16],
        }
    }

    /// The role after this one, clamped at `Exit`.
    pub fn next_clamped(self) -> Role {
        match self {
            Role::Main => Role::Entry,
            Role::Entry | Role::Exit => Role::Exit,
        }
    }
}

/// A counting-line point carrying both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Position on the display surface it was placed on
    pub display: Point,
    /// Position in logical output space (half-unit rounded)
    pub logical: Point,
}

impl LinePoint {
    pub fn new(display: Point, logical: Point) -> Self {
        Self { display, logical }
    }
}

/// A finished counting line for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountingLine {
    pub role: Role,
    pub points: Vec<LinePoint>,
}

impl CountingLine {
    pub fn new(role: Role, points: Vec<LinePoint>) -> Self {
        Self { role, points }
    }

    pub fn color(&self) -> [u8; 3] {
        self.role.color()
    }

    pub fn logical_points(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.points.iter().map(|p| p.logical)
    }

    pub fn display_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|p| p.display)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Points placed so far for the line currently being drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDraft {
    points: Vec<LinePoint>,
}

impl LineDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn points_mut(&mut self) -> &mut [LinePoint] {
        &mut self.points
    }

    pub(crate) fn push(&mut self, point: LinePoint) {
        self.points.push(point);
    }

    pub(crate) fn pop(&mut self) -> Option<LinePoint> {
        self.points.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    pub(crate) fn take(&mut self) -> Vec<LinePoint> {
        std::mem::take(&mut self.points)
    }
}
