//! Output-dimension changes.
//!
//! When the user picks a new logical output size, every stored logical
//! coordinate is scaled by the per-axis ratio and re-rounded to half units.
//! Display-space coordinates are left alone: they still describe where the
//! shapes sit on the current drawing surface.
//!
//! The rescale runs under the same `&mut AnnotationSession` borrow as every
//! engine operation, so no point can be added or finished halfway through.

use crate::error::EngineError;
use crate::geometry::{self, Point};
use crate::session::{AnnotationSession, Axis, OutputSize};

/// Per-axis factors taking coordinates from one output size to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f32,
    pub y: f32,
}

impl ScaleFactors {
    pub fn between(old: OutputSize, new: OutputSize) -> Self {
        Self {
            x: new.width as f32 / old.width as f32,
            y: new.height as f32 / old.height as f32,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.x == 1.0 && self.y == 1.0
    }

    fn apply(&self, point: &mut Point) {
        *point = geometry::rescale_point(*point, self.x, self.y);
    }
}

impl AnnotationSession {
    /// Change one axis of the logical output size, holding the other.
    ///
    /// Rescales the logical vertices of every zone, the logical points of
    /// every counting line and of the in-progress line. The ROI chain is
    /// display-only and needs no update.
    pub fn set_output_dimension(&mut self, axis: Axis, value: u32) -> Result<(), EngineError> {
        if value == 0 {
            return Err(EngineError::ZeroDimension);
        }
        let old = self.output;
        let new = old.with_axis(axis, value);
        let scale = ScaleFactors::between(old, new);
        if !scale.is_identity() {
            self.rescale_logical(scale);
        }
        self.output = new;
        log::debug!(
            "📐 Output size {}x{} -> {}x{} (scale {:.4}, {:.4})",
            old.width,
            old.height,
            new.width,
            new.height,
            scale.x,
            scale.y
        );
        Ok(())
    }

    fn rescale_logical(&mut self, scale: ScaleFactors) {
        for polygon in &mut self.roi.polygons {
            polygon.vertices.iter_mut().for_each(|p| scale.apply(p));
        }
        for line in self.people.lines.iter_mut().flatten() {
            line.points
                .iter_mut()
                .for_each(|p| scale.apply(&mut p.logical));
        }
        self.people
            .draft
            .points_mut()
            .iter_mut()
            .for_each(|p| scale.apply(&mut p.logical));
    }
}
