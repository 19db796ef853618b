//! Annotation engine operations.
//!
//! All operations validate first and mutate only on success, so a returned
//! `Err` always means the session is exactly as it was before the call.
//! Mode dispatch is an exhaustive `match` on `Mode` in every operation.

use crate::error::EngineError;
use crate::geometry::{self, Extent, Point};
use crate::model::{
    CountingLine, LinePoint, MIN_LINE_POINTS, MIN_POLYGON_VERTICES, Polygon, Role, ZoneId,
};
use crate::session::{AnnotationSession, Mode, OutputSize, PeopleState, RoiState};

/// What a successful `finish` produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finished {
    /// A zone was closed and received this id
    Zone(ZoneId),
    /// The line for this role was stored
    Line(Role),
}

/// What a successful `undo` removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undone {
    /// The last in-progress point
    Point,
    /// The most recently closed zone
    Zone(ZoneId),
    /// The line at the highest occupied role
    Line(Role),
}

impl AnnotationSession {
    /// Place a point on the active mode's in-progress shape.
    ///
    /// `surface` is the display surface size the point was measured on.
    pub fn add_point(&mut self, point: Point, surface: Extent) -> Result<(), EngineError> {
        match self.mode {
            Mode::Roi => {
                if self.roi.draft.edge_would_cross(point) {
                    log::warn!(
                        "Rejected point ({:.1}, {:.1}): edge would cross the chain",
                        point.x,
                        point.y
                    );
                    return Err(EngineError::EdgeCrossing);
                }
                self.resize_surface(surface);
                self.roi.draft.push(point);
                log::debug!(
                    "📍 ROI point ({:.1}, {:.1}), chain length {}",
                    point.x,
                    point.y,
                    self.roi.draft.len()
                );
            }
            Mode::People => {
                self.resize_surface(surface);
                let logical = geometry::to_logical(point, self.surface, self.output.extent());
                self.people.draft.push(LinePoint::new(point, logical));
                log::debug!(
                    "📍 {} point ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    self.people.cursor.label(),
                    point.x,
                    point.y,
                    logical.x,
                    logical.y
                );
            }
        }
        Ok(())
    }

    /// Complete the active mode's in-progress shape.
    pub fn finish(&mut self) -> Result<Finished, EngineError> {
        match self.mode {
            Mode::Roi => {
                let surface = self.surface;
                let output = self.output;
                close_zone(&mut self.roi, surface, output)
            }
            Mode::People => finish_line(&mut self.people),
        }
    }

    /// Discard the active mode's in-progress shape.
    pub fn cancel(&mut self) {
        match self.mode {
            Mode::Roi => self.roi.draft.clear(),
            Mode::People => self.people.draft.clear(),
        }
        log::debug!("✖️ Cancelled in-progress {} shape", self.mode.name());
    }

    /// Step back once within the active mode.
    ///
    /// Removes the last in-progress point if there is one, otherwise the most
    /// recently completed shape of the mode.
    pub fn undo(&mut self) -> Result<Undone, EngineError> {
        let undone = match self.mode {
            Mode::Roi => undo_roi(&mut self.roi),
            Mode::People => undo_people(&mut self.people),
        }?;
        log::debug!("⏪ Undo in {}: {:?}", self.mode.name(), undone);
        Ok(undone)
    }

    /// Remove the zone with the given id. Other zones keep their ids and colors.
    pub fn delete_polygon(&mut self, id: ZoneId) -> Result<Polygon, EngineError> {
        let index = self
            .roi
            .polygons
            .iter()
            .position(|p| p.id == id)
            .ok_or(EngineError::ZoneNotFound { id })?;
        let removed = self.roi.polygons.remove(index);
        log::debug!("🗑️ Deleted {}", removed.label());
        Ok(removed)
    }

    /// Switch the active mode. Shape data and drafts of both modes are kept.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("🔄 Mode: {} -> {}", self.mode.name(), mode.name());
            self.mode = mode;
        }
    }

    /// Drop every shape and draft of both modes. Zone ids restart at 1.
    pub fn clear_all(&mut self) {
        self.roi = RoiState::default();
        self.people = PeopleState::default();
        log::debug!("🧹 Cleared all annotations");
    }

    /// Adopt a freshly decoded image: its pixel size becomes the output size
    /// (no rescale, since all shapes are dropped).
    pub fn load_image(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::ZeroDimension);
        }
        self.output = OutputSize::new(width, height);
        self.clear_all();
        log::info!("Loaded image, output size {}x{}", width, height);
        Ok(())
    }

    /// Record the host's current drawing-surface size.
    ///
    /// Degenerate sizes are ignored so later conversions stay finite.
    pub fn resize_surface(&mut self, surface: Extent) {
        if !surface.is_valid() {
            log::warn!(
                "Ignoring invalid surface size {}x{}",
                surface.width,
                surface.height
            );
            return;
        }
        self.surface = surface;
    }
}

fn close_zone(
    roi: &mut RoiState,
    surface: Extent,
    output: OutputSize,
) -> Result<Finished, EngineError> {
    let have = roi.draft.len();
    if have < MIN_POLYGON_VERTICES {
        log::warn!("Cannot close zone with {} points", have);
        return Err(EngineError::TooFewZonePoints { have });
    }
    if roi.draft.closing_edge_crosses() {
        log::warn!("Cannot close zone: closing edge crosses the chain");
        return Err(EngineError::ClosingEdgeCrossing);
    }

    let display = roi.draft.take();
    let logical = display
        .iter()
        .map(|&p| geometry::to_logical(p, surface, output.extent()))
        .collect();
    let id = roi.next_id;
    roi.next_id += 1;
    let polygon = Polygon::new(id, logical, display);
    log::debug!("✅ Closed {} with {} vertices", polygon.label(), polygon.len());
    roi.polygons.push(polygon);
    Ok(Finished::Zone(id))
}

fn finish_line(people: &mut PeopleState) -> Result<Finished, EngineError> {
    let have = people.draft.len();
    if have < MIN_LINE_POINTS {
        log::warn!("Cannot finish line with {} points", have);
        return Err(EngineError::TooFewLinePoints { have });
    }

    let role = people.cursor;
    let line = CountingLine::new(role, people.draft.take());
    log::debug!("✅ Stored {} with {} points", role.label(), line.len());
    people.lines[role.index()] = Some(line);
    // Exit stays current once reached, so finishing again redraws it
    people.cursor = role.next_clamped();
    Ok(Finished::Line(role))
}

fn undo_roi(roi: &mut RoiState) -> Result<Undone, EngineError> {
    if roi.draft.pop().is_some() {
        return Ok(Undone::Point);
    }
    // Insertion order, not id order; ids are never handed out again
    match roi.polygons.pop() {
        Some(polygon) => Ok(Undone::Zone(polygon.id)),
        None => Err(EngineError::NothingToUndo),
    }
}

fn undo_people(people: &mut PeopleState) -> Result<Undone, EngineError> {
    if people.draft.pop().is_some() {
        return Ok(Undone::Point);
    }
    let role = people
        .highest_occupied()
        .ok_or(EngineError::NothingToUndo)?;
    people.lines[role.index()] = None;
    people.cursor = role;
    Ok(Undone::Line(role))
}
