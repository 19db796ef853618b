//! Commands and the serialized command queue.
//!
//! Every change to a session arrives as a `Command`: pointer events, the
//! discrete finish/cancel/undo actions and output-dimension changes alike.
//! The queue applies them one at a time, each to completion, so a rescale
//! can never interleave with a point placement.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::engine::{Finished, Undone};
use crate::error::EngineError;
use crate::geometry::{Extent, Point};
use crate::model::ZoneId;
use crate::session::{AnnotationSession, Axis, Mode};

/// A single host request against the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Click at `(x, y)` on a surface of the given size
    AddPoint {
        x: f32,
        y: f32,
        surface_width: f32,
        surface_height: f32,
    },
    Finish,
    Cancel,
    Undo,
    SetMode {
        mode: Mode,
    },
    DeletePolygon {
        id: ZoneId,
    },
    SetOutputDimension {
        axis: Axis,
        value: u32,
    },
    /// A new image was decoded with this pixel size
    LoadImage {
        width: u32,
        height: u32,
    },
    ClearAll,
    ResizeSurface {
        width: f32,
        height: f32,
    },
}

impl Command {
    /// Convenience constructor for a click.
    pub fn add_point(point: Point, surface: Extent) -> Self {
        Command::AddPoint {
            x: point.x,
            y: point.y,
            surface_width: surface.width,
            surface_height: surface.height,
        }
    }
}

/// What a successfully applied command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    PointAdded,
    Finished(Finished),
    Cancelled,
    Undone(Undone),
    ModeChanged(Mode),
    Deleted(ZoneId),
    Rescaled,
    ImageLoaded,
    Cleared,
    SurfaceResized,
}

impl AnnotationSession {
    /// Apply one command to completion.
    pub fn apply(&mut self, command: &Command) -> Result<Applied, EngineError> {
        match *command {
            Command::AddPoint {
                x,
                y,
                surface_width,
                surface_height,
            } => self
                .add_point(Point::new(x, y), Extent::new(surface_width, surface_height))
                .map(|()| Applied::PointAdded),
            Command::Finish => self.finish().map(Applied::Finished),
            Command::Cancel => {
                self.cancel();
                Ok(Applied::Cancelled)
            }
            Command::Undo => self.undo().map(Applied::Undone),
            Command::SetMode { mode } => {
                self.set_mode(mode);
                Ok(Applied::ModeChanged(mode))
            }
            Command::DeletePolygon { id } => self.delete_polygon(id).map(|p| Applied::Deleted(p.id)),
            Command::SetOutputDimension { axis, value } => self
                .set_output_dimension(axis, value)
                .map(|()| Applied::Rescaled),
            Command::LoadImage { width, height } => self
                .load_image(width, height)
                .map(|()| Applied::ImageLoaded),
            Command::ClearAll => {
                self.clear_all();
                Ok(Applied::Cleared)
            }
            Command::ResizeSurface { width, height } => {
                self.resize_surface(Extent::new(width, height));
                Ok(Applied::SurfaceResized)
            }
        }
    }
}

/// Result of one queued command.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub command: Command,
    pub result: Result<Applied, EngineError>,
}

/// FIFO of pending commands for one session.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending command in arrival order.
    ///
    /// A rejected command does not stop the ones queued after it.
    pub fn run(&mut self, session: &mut AnnotationSession) -> Vec<Processed> {
        let mut processed = Vec::with_capacity(self.pending.len());
        while let Some(command) = self.pending.pop_front() {
            let result = session.apply(&command);
            if let Err(ref e) = result {
                log::debug!("⛔ {:?} rejected: {}", command, e);
            }
            processed.push(Processed { command, result });
        }
        processed
    }
}

impl Extend<Command> for CommandQueue {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::session::OutputSize;

    fn click(x: f32, y: f32) -> Command {
        Command::add_point(Point::new(x, y), Extent::new(100.0, 100.0))
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_string(&click(1.0, 2.0)).unwrap();
        assert_eq!(
            json,
            r#"{"command":"add_point","x":1.0,"y":2.0,"surface_width":100.0,"surface_height":100.0}"#
        );

        let cmd: Command = serde_json::from_str(r#"{"command":"finish"}"#).unwrap();
        assert_eq!(cmd, Command::Finish);

        let cmd: Command =
            serde_json::from_str(r#"{"command":"set_output_dimension","axis":"width","value":640}"#)
                .unwrap();
        assert_eq!(
            cmd,
            Command::SetOutputDimension {
                axis: Axis::Width,
                value: 640
            }
        );

        let cmd: Command =
            serde_json::from_str(r#"{"command":"set_mode","mode":"people"}"#).unwrap();
        assert_eq!(cmd, Command::SetMode { mode: Mode::People });
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(serde_json::from_str::<Command>(r#"{"command":"redo"}"#).is_err());
    }

    #[test]
    fn test_queue_runs_in_order() {
        let mut session = AnnotationSession::new(OutputSize::new(100, 100));
        let mut queue = CommandQueue::new();
        queue.extend([
            click(0.0, 0.0),
            click(10.0, 0.0),
            click(5.0, 10.0),
            Command::Finish,
            Command::SetMode { mode: Mode::People },
            click(0.0, 50.0),
            click(100.0, 50.0),
            Command::Finish,
        ]);
        assert_eq!(queue.len(), 8);

        let processed = queue.run(&mut session);
        assert!(queue.is_empty());
        assert_eq!(processed.len(), 8);
        assert_eq!(
            processed[3].result,
            Ok(Applied::Finished(Finished::Zone(1)))
        );
        assert_eq!(
            processed[7].result,
            Ok(Applied::Finished(Finished::Line(Role::Main)))
        );
        assert_eq!(session.roi().polygons().len(), 1);
        assert!(session.people().line(Role::Main).is_some());
    }

    #[test]
    fn test_rejection_does_not_stop_queue() {
        let mut session = AnnotationSession::new(OutputSize::new(100, 100));
        let mut queue = CommandQueue::new();
        queue.extend([
            Command::Undo,
            Command::Finish,
            click(0.0, 0.0),
            Command::DeletePolygon { id: 9 },
        ]);

        let processed = queue.run(&mut session);
        assert_eq!(processed[0].result, Err(EngineError::NothingToUndo));
        assert_eq!(
            processed[1].result,
            Err(EngineError::TooFewZonePoints { have: 0 })
        );
        assert_eq!(processed[2].result, Ok(Applied::PointAdded));
        assert_eq!(
            processed[3].result,
            Err(EngineError::ZoneNotFound { id: 9 })
        );
        assert_eq!(session.roi().draft().len(), 1);
    }

    #[test]
    fn test_rescale_between_points_is_serialized() {
        let mut session = AnnotationSession::new(OutputSize::new(100, 100));
        let mut queue = CommandQueue::new();
        queue.extend([
            Command::SetMode { mode: Mode::People },
            click(10.0, 10.0),
            Command::SetOutputDimension {
                axis: Axis::Width,
                value: 200,
            },
            click(20.0, 20.0),
        ]);
        queue.run(&mut session);

        let draft = session.people().draft().points();
        assert_eq!(draft[0].logical, Point::new(20.0, 10.0));
        assert_eq!(draft[1].logical, Point::new(40.0, 20.0));
    }

    #[test]
    fn test_load_image_and_clear() {
        let mut session = AnnotationSession::new(OutputSize::new(100, 100));
        session.apply(&click(1.0, 1.0)).unwrap();
        assert_eq!(
            session.apply(&Command::LoadImage {
                width: 1920,
                height: 1080
            }),
            Ok(Applied::ImageLoaded)
        );
        assert_eq!(session.output_size(), OutputSize::new(1920, 1080));
        assert!(session.roi().draft().is_empty());
        assert_eq!(session.apply(&Command::ClearAll), Ok(Applied::Cleared));
    }
}
