//! Trait definitions for output format implementations.

use serde::{Deserialize, Serialize};

use crate::format::error::FormatError;
use crate::session::{AnnotationSession, Mode};

/// Trait for text encoders of one mode's shapes.
///
/// Encoders are pure: the same session always yields the same text, and an
/// empty string means there is nothing to export yet.
pub trait OutputFormat: Send + Sync {
    /// Unique identifier for this format (e.g., "json", "combined").
    fn id(&self) -> &'static str;

    /// Human-readable name for UI display.
    fn display_name(&self) -> &'static str;

    /// One-line description of the produced layout.
    fn description(&self) -> &'static str;

    /// Which mode's shapes this format encodes.
    fn mode(&self) -> Mode;

    /// Encode the session's shapes for `self.mode()`.
    fn encode(&self, session: &AnnotationSession) -> Result<String, FormatError>;
}

/// Output layout for ROI zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiFormat {
    /// `[{"x":1,"y":2},...]` per zone
    #[default]
    Json,
    /// `[1;2;...]` per zone
    Flat,
}

impl RoiFormat {
    pub fn id(&self) -> &'static str {
        match self {
            RoiFormat::Json => "json",
            RoiFormat::Flat => "flat",
        }
    }
}

/// Output layout for counting lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeopleFormat {
    /// One line per drawn role
    #[default]
    Standard,
    /// Entry and Exit each merged with the Main line
    Combined,
}

impl PeopleFormat {
    pub fn id(&self) -> &'static str {
        match self {
            PeopleFormat::Standard => "standard",
            PeopleFormat::Combined => "combined",
        }
    }
}

/// The chosen output format for each mode, picked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatSelection {
    #[serde(default)]
    pub roi: RoiFormat,
    #[serde(default)]
    pub people: PeopleFormat,
}

impl FormatSelection {
    /// Create a new selection with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ROI format.
    pub fn roi(mut self, format: RoiFormat) -> Self {
        self.roi = format;
        self
    }

    /// Set the people-count format.
    pub fn people(mut self, format: PeopleFormat) -> Self {
        self.people = format;
        self
    }

    /// Format id selected for `mode`.
    pub fn id_for(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Roi => self.roi.id(),
            Mode::People => self.people.id(),
        }
    }
}
