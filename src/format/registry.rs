//! Format registry for discovering and accessing output formats.

use crate::format::error::FormatError;
use crate::format::formats::{
    PeopleCombinedFormat, PeopleStandardFormat, RoiFlatFormat, RoiJsonFormat,
};
use crate::format::traits::{FormatSelection, OutputFormat};
use crate::session::{AnnotationSession, Mode};

/// Registry of available output formats.
///
/// All built-in formats are registered on creation, in the order they are
/// offered to the user.
pub struct FormatRegistry {
    formats: Vec<Box<dyn OutputFormat>>,
}

impl FormatRegistry {
    /// Create a new registry with all built-in formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: Vec::new(),
        };

        registry.register(Box::new(RoiJsonFormat));
        registry.register(Box::new(RoiFlatFormat));
        registry.register(Box::new(PeopleStandardFormat));
        registry.register(Box::new(PeopleCombinedFormat));

        registry
    }

    /// Register a format implementation, replacing any with the same id.
    pub fn register(&mut self, format: Box<dyn OutputFormat>) {
        self.formats.retain(|f| f.id() != format.id());
        self.formats.push(format);
    }

    /// Get a format by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn OutputFormat> {
        self.formats
            .iter()
            .find(|f| f.id() == id)
            .map(|f| f.as_ref())
    }

    /// Formats that encode `mode`'s shapes.
    pub fn for_mode(&self, mode: Mode) -> Vec<&dyn OutputFormat> {
        self.formats
            .iter()
            .filter(|f| f.mode() == mode)
            .map(|f| f.as_ref())
            .collect()
    }

    /// Get all registered formats.
    pub fn all(&self) -> Vec<&dyn OutputFormat> {
        self.formats.iter().map(|f| f.as_ref()).collect()
    }

    /// Get all format IDs.
    pub fn ids(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.id()).collect()
    }

    /// Encode `mode`'s shapes with the format registered under `id`.
    pub fn encode_with(
        &self,
        id: &str,
        mode: Mode,
        session: &AnnotationSession,
    ) -> Result<String, FormatError> {
        let format = self.get(id).ok_or_else(|| FormatError::unknown_format(id))?;
        if format.mode() != mode {
            return Err(FormatError::mode_mismatch(id, format.mode(), mode));
        }
        format.encode(session)
    }

    /// Encode the shapes of `mode` using the selected format for that mode.
    pub fn encode(
        &self,
        session: &AnnotationSession,
        mode: Mode,
        selection: &FormatSelection,
    ) -> Result<String, FormatError> {
        self.encode_with(selection.id_for(mode), mode, session)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_formats() {
        let registry = FormatRegistry::new();

        assert!(registry.get("json").is_some());
        assert!(registry.get("flat").is_some());
        assert!(registry.get("standard").is_some());
        assert!(registry.get("combined").is_some());
        assert!(registry.get("coco").is_none());
        assert_eq!(registry.ids(), vec!["json", "flat", "standard", "combined"]);
    }

    #[test]
    fn test_formats_by_mode() {
        let registry = FormatRegistry::new();

        let roi: Vec<_> = registry.for_mode(Mode::Roi).iter().map(|f| f.id()).collect();
        assert_eq!(roi, vec!["json", "flat"]);

        let people: Vec<_> = registry
            .for_mode(Mode::People)
            .iter()
            .map(|f| f.id())
            .collect();
        assert_eq!(people, vec!["standard", "combined"]);
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = FormatRegistry::new();
        registry.register(Box::new(RoiJsonFormat));
        assert_eq!(registry.all().len(), 4);
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::new();
        let err = registry
            .encode_with("yolo", Mode::Roi, &AnnotationSession::default())
            .unwrap_err();
        assert!(matches!(err, FormatError::UnknownFormat { ref id } if id == "yolo"));
    }

    #[test]
    fn test_mode_mismatch() {
        let registry = FormatRegistry::new();
        let err = registry
            .encode_with("combined", Mode::Roi, &AnnotationSession::default())
            .unwrap_err();
        assert!(matches!(err, FormatError::ModeMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "Format 'combined' encodes People Count, not ROI Zones"
        );
    }

    #[test]
    fn test_empty_session_encodes_empty() {
        let registry = FormatRegistry::new();
        let session = AnnotationSession::default();
        for format in registry.all() {
            assert_eq!(format.encode(&session).unwrap(), "", "{}", format.id());
        }
    }
}
