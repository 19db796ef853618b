//! The annotation session: the single owned value every engine operation
//! reads and writes.
//!
//! Each drawing mode keeps its own working record (`RoiState`,
//! `PeopleState`). Switching modes only changes which record receives input;
//! completed shapes and half-drawn drafts of the other mode stay untouched.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, HEIGHT_PRESETS, SIZE_PRESETS, WIDTH_PRESETS,
};
use crate::geometry::Extent;
use crate::model::{CountingLine, LineDraft, Polygon, PolygonDraft, Role, ZoneId};

/// Which kind of markup receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Drawing closed ROI zones
    #[default]
    Roi,
    /// Drawing the Main/Entry/Exit counting lines
    People,
}

impl Mode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Roi => "ROI Zones",
            Mode::People => "People Count",
        }
    }
}

/// Axis of the logical output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

/// Logical output dimensions, in whole output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn extent(&self) -> Extent {
        Extent::new(self.width as f32, self.height as f32)
    }

    /// Copy with one axis replaced.
    pub fn with_axis(self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Width => Self { width: value, ..self },
            Axis::Height => Self { height: value, ..self },
        }
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_WIDTH, DEFAULT_OUTPUT_HEIGHT)
    }
}

/// A named output size a host offers as a single choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizePreset {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

impl SizePreset {
    pub fn size(&self) -> OutputSize {
        OutputSize::new(self.width, self.height)
    }
}

/// Everything an output-size picker lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPresets {
    pub widths: &'static [u32],
    pub heights: &'static [u32],
    pub sizes: Vec<SizePreset>,
}

impl OutputPresets {
    pub fn standard() -> Self {
        Self {
            widths: &WIDTH_PRESETS,
            heights: &HEIGHT_PRESETS,
            sizes: SIZE_PRESETS
                .iter()
                .map(|&(label, width, height)| SizePreset {
                    label,
                    width,
                    height,
                })
                .collect(),
        }
    }
}

/// ROI mode working record.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiState {
    /// Closed zones, in insertion (and therefore id) order
    pub(crate) polygons: Vec<Polygon>,
    /// Chain being drawn, display space
    pub(crate) draft: PolygonDraft,
    /// Id handed to the next closed zone
    pub(crate) next_id: ZoneId,
}

impl Default for RoiState {
    fn default() -> Self {
        Self {
            polygons: Vec::new(),
            draft: PolygonDraft::new(),
            next_id: 1,
        }
    }
}

impl RoiState {
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn draft(&self) -> &PolygonDraft {
        &self.draft
    }

    pub fn next_id(&self) -> ZoneId {
        self.next_id
    }

    pub fn polygon(&self, id: ZoneId) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.id == id)
    }
}

/// PEOPLE mode working record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeopleState {
    /// One slot per role, indexed by `Role::index`
    pub(crate) lines: [Option<CountingLine>; 3],
    /// Line being drawn for `cursor`
    pub(crate) draft: LineDraft,
    /// Role the next finished line is stored under
    pub(crate) cursor: Role,
}

impl PeopleState {
    pub fn line(&self, role: Role) -> Option<&CountingLine> {
        self.lines[role.index()].as_ref()
    }

    /// Occupied lines in role order.
    pub fn lines(&self) -> impl Iterator<Item = &CountingLine> {
        self.lines.iter().flatten()
    }

    pub fn draft(&self) -> &LineDraft {
        &self.draft
    }

    pub fn current_role(&self) -> Role {
        self.cursor
    }

    /// True when Main, Entry and Exit are all drawn.
    pub fn is_complete(&self) -> bool {
        self.lines.iter().all(Option::is_some)
    }

    /// Highest role that currently holds a line.
    pub fn highest_occupied(&self) -> Option<Role> {
        Role::ALL
            .iter()
            .rev()
            .copied()
            .find(|role| self.lines[role.index()].is_some())
    }
}

/// All annotation state for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSession {
    pub(crate) mode: Mode,
    pub(crate) roi: RoiState,
    pub(crate) people: PeopleState,
    pub(crate) output: OutputSize,
    /// Last display-surface size reported by the host
    pub(crate) surface: Extent,
}

impl AnnotationSession {
    /// Create an empty session with the given logical output size.
    ///
    /// Until the host reports a surface size the display surface is assumed
    /// to match the output size.
    pub fn new(output: OutputSize) -> Self {
        Self {
            mode: Mode::default(),
            roi: RoiState::default(),
            people: PeopleState::default(),
            output,
            surface: output.extent(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn roi(&self) -> &RoiState {
        &self.roi
    }

    pub fn people(&self) -> &PeopleState {
        &self.people
    }

    pub fn output_size(&self) -> OutputSize {
        self.output
    }

    pub fn surface(&self) -> Extent {
        self.surface
    }

    /// Whether the active mode has a shape in progress.
    pub fn is_drawing(&self) -> bool {
        match self.mode {
            Mode::Roi => !self.roi.draft.is_empty(),
            Mode::People => !self.people.draft.is_empty(),
        }
    }
}

impl Default for AnnotationSession {
    fn default() -> Self {
        Self::new(OutputSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = AnnotationSession::default();
        assert_eq!(session.mode(), Mode::Roi);
        assert_eq!(session.output_size(), OutputSize::new(1280, 720));
        assert_eq!(session.surface(), Extent::new(1280.0, 720.0));
        assert_eq!(session.roi().next_id(), 1);
        assert_eq!(session.people().current_role(), Role::Main);
        assert!(!session.is_drawing());
    }

    #[test]
    fn test_output_size_with_axis() {
        let size = OutputSize::new(1280, 720);
        assert_eq!(size.with_axis(Axis::Width, 640), OutputSize::new(640, 720));
        assert_eq!(size.with_axis(Axis::Height, 1080), OutputSize::new(1280, 1080));
    }

    #[test]
    fn test_standard_presets() {
        let presets = OutputPresets::standard();
        assert_eq!(presets.widths, &[640, 1280, 1920, 3840]);
        assert_eq!(presets.heights, &[360, 720, 1080, 2160]);
        assert_eq!(presets.sizes.len(), 4);
        assert_eq!(presets.sizes[1].size(), OutputSize::default());
        assert_eq!(presets.sizes[3].label, "4K");
        assert_eq!(presets.sizes[3].size(), OutputSize::new(3840, 2160));
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_string(&Mode::Roi).unwrap(), "\"roi\"");
        let mode: Mode = serde_json::from_str("\"people\"").unwrap();
        assert_eq!(mode, Mode::People);
    }

    #[test]
    fn test_highest_occupied() {
        let mut people = PeopleState::default();
        assert_eq!(people.highest_occupied(), None);
        people.lines[Role::Entry.index()] = Some(CountingLine::new(Role::Entry, Vec::new()));
        assert_eq!(people.highest_occupied(), Some(Role::Entry));
        assert!(!people.is_complete());
    }
}
