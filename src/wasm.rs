//! Browser binding.
//!
//! `WasmAnnotator` wraps an `Annotator` for JavaScript hosts. Points arrive
//! in canvas pixels together with the canvas size; the render model goes
//! back as JSON for the host to paint.

use wasm_bindgen::prelude::*;

use crate::annotator::Annotator;
use crate::command::Command;
use crate::config::{AppConfig, LogLevel};
use crate::format::{PeopleFormat, RoiFormat};
use crate::geometry::{Extent, Point};
use crate::input::{Key, KeyEvent, Modifiers};
use crate::session::{Axis, Mode, OutputSize};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        // A logger is already installed
        return;
    }
    LogLevel::default().apply();
    log::info!("zonedraw wasm starting");
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_mode(mode: &str) -> Result<Mode, JsValue> {
    match mode {
        "roi" => Ok(Mode::Roi),
        "people" => Ok(Mode::People),
        other => Err(js_error(format!("unknown mode '{}'", other))),
    }
}

#[wasm_bindgen]
pub struct WasmAnnotator {
    inner: Annotator,
}

#[wasm_bindgen]
impl WasmAnnotator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmAnnotator {
        WasmAnnotator {
            inner: Annotator::new(),
        }
    }

    /// Build from a JSON config document.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<WasmAnnotator, JsValue> {
        let config = AppConfig::from_json(json).map_err(js_error)?;
        config.preferences.log_level.apply();
        Ok(WasmAnnotator {
            inner: Annotator::from_config(&config),
        })
    }

    /// Returns the notice text when the point was rejected.
    #[wasm_bindgen(js_name = addPoint)]
    pub fn add_point(
        &mut self,
        x: f32,
        y: f32,
        canvas_width: f32,
        canvas_height: f32,
    ) -> Option<String> {
        let surface = Extent::new(canvas_width, canvas_height);
        self.run(Command::add_point(Point::new(x, y), surface))
    }

    pub fn finish(&mut self) -> Option<String> {
        self.run(Command::Finish)
    }

    pub fn cancel(&mut self) {
        self.run(Command::Cancel);
    }

    pub fn undo(&mut self) {
        self.run(Command::Undo);
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.run(Command::ClearAll);
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = parse_mode(mode)?;
        self.run(Command::SetMode { mode });
        Ok(())
    }

    #[wasm_bindgen(js_name = deletePolygon)]
    pub fn delete_polygon(&mut self, id: u32) {
        self.run(Command::DeletePolygon { id });
    }

    #[wasm_bindgen(js_name = setOutputWidth)]
    pub fn set_output_width(&mut self, value: u32) {
        self.run(Command::SetOutputDimension {
            axis: Axis::Width,
            value,
        });
    }

    #[wasm_bindgen(js_name = setOutputHeight)]
    pub fn set_output_height(&mut self, value: u32) {
        self.run(Command::SetOutputDimension {
            axis: Axis::Height,
            value,
        });
    }

    /// Apply a quick preset; returns the first notice if a step was rejected.
    #[wasm_bindgen(js_name = applyPreset)]
    pub fn apply_preset(&mut self, width: u32, height: u32) -> Option<String> {
        self.inner
            .apply_size(OutputSize::new(width, height))
            .into_iter()
            .find_map(|p| p.result.err().and_then(|e| e.notice()))
    }

    /// Width, height and quick presets as JSON.
    #[wasm_bindgen(js_name = presetsJson)]
    pub fn presets_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.presets()).map_err(js_error)
    }

    /// `[width, height]` of the canvas to lay out in `available_width`.
    #[wasm_bindgen(js_name = fitSurface)]
    pub fn fit_surface(&self, available_width: f32) -> Vec<f32> {
        let surface = self.inner.fit_surface(available_width);
        vec![surface.width, surface.height]
    }

    /// Call once the host has decoded an image.
    #[wasm_bindgen(js_name = loadImage)]
    pub fn load_image(&mut self, width: u32, height: u32) {
        self.run(Command::LoadImage { width, height });
    }

    #[wasm_bindgen(js_name = resizeCanvas)]
    pub fn resize_canvas(&mut self, width: f32, height: f32) {
        self.run(Command::ResizeSurface { width, height });
    }

    /// Pointer moved over the canvas; pass no arguments when it leaves.
    #[wasm_bindgen(js_name = setHover)]
    pub fn set_hover(&mut self, x: Option<f32>, y: Option<f32>) {
        let hover = x.zip(y).map(|(x, y)| Point::new(x, y));
        self.inner.set_hover(hover);
    }

    /// Handle a `keydown`; returns true when the key was consumed.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str, ctrl: bool, meta: bool, in_text_field: bool) -> bool {
        let Some(key) = Key::parse(key) else {
            return false;
        };
        let event = KeyEvent {
            key,
            modifiers: Modifiers {
                ctrl,
                meta,
                shift: false,
            },
            in_text_field,
        };
        self.inner.handle_key(&event).is_some()
    }

    #[wasm_bindgen(js_name = setRoiFormat)]
    pub fn set_roi_format(&mut self, id: &str) -> Result<(), JsValue> {
        let format = match id {
            "json" => RoiFormat::Json,
            "flat" => RoiFormat::Flat,
            other => return Err(js_error(format!("unknown ROI format '{}'", other))),
        };
        self.inner.set_roi_format(format);
        Ok(())
    }

    #[wasm_bindgen(js_name = setPeopleFormat)]
    pub fn set_people_format(&mut self, id: &str) -> Result<(), JsValue> {
        let format = match id {
            "standard" => PeopleFormat::Standard,
            "combined" => PeopleFormat::Combined,
            other => return Err(js_error(format!("unknown people format '{}'", other))),
        };
        self.inner.set_people_format(format);
        Ok(())
    }

    /// Encoded text for the active mode.
    pub fn output(&self) -> Result<String, JsValue> {
        self.inner.output().map_err(js_error)
    }

    /// Description of the active mode's format.
    #[wasm_bindgen(js_name = formatDescription)]
    pub fn format_description(&self) -> String {
        self.inner
            .active_format()
            .map(|f| f.description().to_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = renderJson)]
    pub fn render_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.render()).map_err(js_error)
    }

    /// Current notice, if one is showing.
    pub fn notice(&mut self) -> Option<String> {
        self.inner.tick();
        self.inner.notice().map(str::to_string)
    }

    #[wasm_bindgen(js_name = keyHint)]
    pub fn key_hint(&self) -> String {
        self.inner.keybindings().hint()
    }
}

impl WasmAnnotator {
    fn run(&mut self, command: Command) -> Option<String> {
        self.inner.execute(command).err().and_then(|e| e.notice())
    }
}

impl Default for WasmAnnotator {
    fn default() -> Self {
        Self::new()
    }
}
