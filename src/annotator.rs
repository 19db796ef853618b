//! The object a host drives.
//!
//! `Annotator` owns one session together with its command queue, the live
//! notice, the per-mode output format choice and the key bindings. Hosts feed
//! it input events or commands and read back the render model and the
//! encoded output.

use crate::command::{Applied, Command, CommandQueue, Processed};
use crate::config::AppConfig;
use crate::error::EngineError;
use crate::format::{
    FormatError, FormatRegistry, FormatSelection, OutputFormat, PeopleFormat, RoiFormat,
};
use crate::geometry::{Extent, Point};
use crate::input::{self, KeyBindings, KeyEvent, PointerEvent};
use crate::notice::NoticeBoard;
use crate::render::{self, RenderModel};
use crate::session::{AnnotationSession, Axis, Mode, OutputPresets, OutputSize};

pub struct Annotator {
    session: AnnotationSession,
    queue: CommandQueue,
    notices: NoticeBoard,
    registry: FormatRegistry,
    formats: FormatSelection,
    keybindings: KeyBindings,
    /// Pointer position over the surface, display space
    hover: Option<Point>,
}

impl Annotator {
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            session: AnnotationSession::new(config.preferences.output_size()),
            queue: CommandQueue::new(),
            notices: NoticeBoard::with_duration(config.preferences.notice_duration()),
            registry: FormatRegistry::new(),
            formats: config.formats,
            keybindings: config.keybindings.clone(),
            hover: None,
        }
    }

    pub fn session(&self) -> &AnnotationSession {
        &self.session
    }

    pub fn formats(&self) -> FormatSelection {
        self.formats
    }

    pub fn set_roi_format(&mut self, format: RoiFormat) {
        self.formats.roi = format;
    }

    pub fn set_people_format(&mut self, format: PeopleFormat) {
        self.formats.people = format;
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    /// Queue a command without applying it.
    pub fn submit(&mut self, command: Command) {
        self.queue.push(command);
    }

    /// Apply everything queued, posting a notice for each visible rejection.
    pub fn process(&mut self) -> Vec<Processed> {
        let processed = self.queue.run(&mut self.session);
        for item in &processed {
            if let Err(e) = &item.result {
                self.report(e);
            }
        }
        processed
    }

    /// Apply `command` right away, after anything already queued.
    pub fn execute(&mut self, command: Command) -> Result<Applied, EngineError> {
        self.process();
        let result = self.session.apply(&command);
        if let Err(e) = &result {
            self.report(e);
        }
        result
    }

    /// Handle a key press; `None` if the key is not bound.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<Result<Applied, EngineError>> {
        let command = input::command_for_key(&self.keybindings, event)?;
        Some(self.execute(command))
    }

    /// Handle a click on the surface; `None` for ignored buttons.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Result<Applied, EngineError>> {
        let command = input::command_for_pointer(event)?;
        Some(self.execute(command))
    }

    /// Set both output axes in one step. Width and height are queued back
    /// to back so nothing else is applied between them.
    pub fn apply_size(&mut self, size: OutputSize) -> Vec<Processed> {
        self.submit(Command::SetOutputDimension {
            axis: Axis::Width,
            value: size.width,
        });
        self.submit(Command::SetOutputDimension {
            axis: Axis::Height,
            value: size.height,
        });
        self.process()
    }

    pub fn presets(&self) -> OutputPresets {
        OutputPresets::standard()
    }

    /// Surface to lay out for the current output size.
    pub fn fit_surface(&self, available_width: f32) -> Extent {
        render::fit_surface(available_width, self.session.output_size())
    }

    /// Track the pointer for the dashed preview segment.
    pub fn set_hover(&mut self, hover: Option<Point>) {
        self.hover = hover;
    }

    pub fn render(&self) -> RenderModel {
        RenderModel::build(&self.session, self.hover)
    }

    /// Encoded output of the active mode.
    pub fn output(&self) -> Result<String, FormatError> {
        self.output_for(self.session.mode())
    }

    /// Encoded output of `mode`, whichever mode is active.
    pub fn output_for(&self, mode: Mode) -> Result<String, FormatError> {
        self.registry.encode(&self.session, mode, &self.formats)
    }

    /// The selected format for the active mode.
    pub fn active_format(&self) -> Option<&dyn OutputFormat> {
        self.registry.get(self.formats.id_for(self.session.mode()))
    }

    /// Live notice text, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notices.current()
    }

    /// Drop an expired notice; returns true if the host should redraw.
    pub fn tick(&mut self) -> bool {
        self.notices.expire()
    }

    fn report(&mut self, error: &EngineError) {
        if let Some(message) = error.notice() {
            log::warn!("{}", message);
            self.notices.post(message);
        }
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}
