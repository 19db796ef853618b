//! zonedraw - ROI zone and line-crossing annotation core
//!
//! Tracks in-progress and completed shapes for two drawing modes (closed ROI
//! zones and the Main/Entry/Exit counting lines), rejects self-crossing
//! edges, maps between the on-screen drawing surface and an independently
//! sized logical output space, and encodes the result as text.
//!
//! Hosts drive an [`Annotator`] with commands or raw input events and read
//! back a [`RenderModel`] and the encoded output.

pub mod annotator;
mod color_utils;
pub mod command;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod format;
pub mod geometry;
pub mod input;
pub mod model;
pub mod notice;
pub mod render;
mod rescale;
pub mod session;

pub use annotator::Annotator;
pub use command::{Applied, Command, CommandQueue, Processed};
pub use config::{AppConfig, ConfigError, LogLevel};
pub use engine::{Finished, Undone};
pub use error::{EngineError, ErrorKind};
pub use format::{FormatError, FormatRegistry, FormatSelection, OutputFormat};
pub use geometry::{Extent, Point};
pub use render::RenderModel;
pub use rescale::ScaleFactors;
pub use session::{AnnotationSession, Axis, Mode, OutputPresets, OutputSize, SizePreset};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
