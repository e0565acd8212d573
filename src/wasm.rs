//! WebAssembly bindings via wasm-bindgen for browser integration.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build --target web --features web
//! ```
//!
//! # JavaScript Example
//!
//! ```javascript
//! import init, { volpanel_init, VolumePanel } from './volpanel.js';
//!
//! await init();
//! volpanel_init();
//!
//! // `renderer` exposes setGeometryMinX(), setSteps(), getMaxStepsNumber(), ...
//! const panel = new VolumePanel(renderer, JSON.stringify(renderer.getConfig()));
//!
//! for (const control of JSON.parse(panel.controls_json())) {
//!     const widget = gui.add(state, control.name /* ... */);
//!     widget.onChange(v => panel.on_change(control.name, v));
//!     widget.onFinishChange(v => panel.on_finish_change(control.name, v));
//! }
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::binder::{Binder, ControlEvents, Dispatch};
use crate::config::PanelConfig;
use crate::presets::{ColorStop, Extent};
use crate::renderer::Renderer;
use crate::state::{ConfigState, ControlInfo, ControlKind, FieldId, FieldValue, UpdatePolicy};

// ═══════════════════════════════════════════════════════════════════════════
// Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the wasm module. Call this once before using any other functions.
/// Sets up panic hooks and console logging.
#[wasm_bindgen]
pub fn volpanel_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Imported renderer
// ═══════════════════════════════════════════════════════════════════════════

#[wasm_bindgen]
extern "C" {
    /// The page's volume renderer object.
    pub type JsRenderer;

    #[wasm_bindgen(method, js_name = setGeometryMinX)]
    fn set_geometry_min_x(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setGeometryMaxX)]
    fn set_geometry_max_x(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setGeometryMinY)]
    fn set_geometry_min_y(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setGeometryMaxY)]
    fn set_geometry_max_y(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setGeometryMinZ)]
    fn set_geometry_min_z(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setGeometryMaxZ)]
    fn set_geometry_max_z(this: &JsRenderer, value: f64);

    #[wasm_bindgen(method, js_name = setSteps)]
    fn set_steps(this: &JsRenderer, steps: u32);
    #[wasm_bindgen(method, js_name = getMaxStepsNumber)]
    fn get_max_steps_number(this: &JsRenderer) -> u32;
    #[wasm_bindgen(method, js_name = setSlicesRange)]
    fn set_slices_range(this: &JsRenderer, start: u32, end: u32);
    #[wasm_bindgen(method, js_name = setAutoStepsOn)]
    fn set_auto_steps_on(this: &JsRenderer, on: bool);
    #[wasm_bindgen(method, js_name = setAbsorptionMode)]
    fn set_absorption_mode(this: &JsRenderer, mode: u32);
    #[wasm_bindgen(method, js_name = setColorFactor)]
    fn set_color_factor(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setOpacityFactor)]
    fn set_opacity_factor(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setGrayMinValue)]
    fn set_gray_min_value(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setGrayMaxValue)]
    fn set_gray_max_value(this: &JsRenderer, value: f64);
    #[wasm_bindgen(method, js_name = setRenderSize)]
    fn set_render_size(this: &JsRenderer, width: JsValue, height: JsValue);
    #[wasm_bindgen(method, js_name = setRenderCanvasSize)]
    fn set_render_canvas_size(this: &JsRenderer, width: JsValue, height: JsValue);
    #[wasm_bindgen(method, js_name = setRowCol)]
    fn set_row_col(this: &JsRenderer, rows: u32, cols: u32);
    #[wasm_bindgen(method, js_name = setTransferFunctionByColors)]
    fn set_transfer_function_by_colors(this: &JsRenderer, stops: JsValue);
    #[wasm_bindgen(method, js_name = applyThresholding)]
    fn apply_thresholding(this: &JsRenderer, method: &str);
}

fn extent_to_js(extent: Extent) -> JsValue {
    match extent {
        Extent::Pixels(px) => JsValue::from_f64(f64::from(px)),
        Extent::Wildcard => JsValue::from_str("*"),
    }
}

impl Renderer for JsRenderer {
    fn set_geometry_min_x(&mut self, value: f64) {
        JsRenderer::set_geometry_min_x(self, value);
    }

    fn set_geometry_max_x(&mut self, value: f64) {
        JsRenderer::set_geometry_max_x(self, value);
    }

    fn set_geometry_min_y(&mut self, value: f64) {
        JsRenderer::set_geometry_min_y(self, value);
    }

    fn set_geometry_max_y(&mut self, value: f64) {
        JsRenderer::set_geometry_max_y(self, value);
    }

    fn set_geometry_min_z(&mut self, value: f64) {
        JsRenderer::set_geometry_min_z(self, value);
    }

    fn set_geometry_max_z(&mut self, value: f64) {
        JsRenderer::set_geometry_max_z(self, value);
    }

    fn set_steps(&mut self, steps: u32) {
        JsRenderer::set_steps(self, steps);
    }

    fn max_steps_number(&self) -> u32 {
        self.get_max_steps_number()
    }

    fn set_slices_range(&mut self, start: u32, end: u32) {
        JsRenderer::set_slices_range(self, start, end);
    }

    fn set_auto_steps_on(&mut self, on: bool) {
        JsRenderer::set_auto_steps_on(self, on);
    }

    fn set_absorption_mode(&mut self, mode: u32) {
        JsRenderer::set_absorption_mode(self, mode);
    }

    fn set_color_factor(&mut self, value: f64) {
        JsRenderer::set_color_factor(self, value);
    }

    fn set_opacity_factor(&mut self, value: f64) {
        JsRenderer::set_opacity_factor(self, value);
    }

    fn set_gray_min_value(&mut self, value: f64) {
        JsRenderer::set_gray_min_value(self, value);
    }

    fn set_gray_max_value(&mut self, value: f64) {
        JsRenderer::set_gray_max_value(self, value);
    }

    fn set_render_size(&mut self, width: Extent, height: Extent) {
        JsRenderer::set_render_size(self, extent_to_js(width), extent_to_js(height));
    }

    fn set_render_canvas_size(&mut self, width: Extent, height: Extent) {
        JsRenderer::set_render_canvas_size(self, extent_to_js(width), extent_to_js(height));
    }

    fn set_row_col(&mut self, rows: u32, cols: u32) {
        JsRenderer::set_row_col(self, rows, cols);
    }

    fn set_transfer_function_by_colors(&mut self, stops: &[ColorStop]) {
        let stops = serde_json::to_string(stops)
            .map_err(|e| JsValue::from_str(&e.to_string()))
            .and_then(|json| js_sys::JSON::parse(&json));
        match stops {
            Ok(stops) => JsRenderer::set_transfer_function_by_colors(self, stops),
            Err(e) => log::error!("Error encoding color stops: {:?}", e),
        }
    }

    fn apply_thresholding(&mut self, method: &str) {
        JsRenderer::apply_thresholding(self, method);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Control descriptors
// ═══════════════════════════════════════════════════════════════════════════

/// JSON shape of a control for JavaScript front ends.
#[derive(Serialize)]
struct ControlJson<'a> {
    name: &'a str,
    kind: &'static str,
    deferred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<&'a [String]>,
}

impl<'a> From<&'a ControlInfo> for ControlJson<'a> {
    fn from(info: &'a ControlInfo) -> Self {
        let mut json = ControlJson {
            name: info.name,
            kind: "",
            deferred: info.policy == UpdatePolicy::Deferred,
            min: None,
            max: None,
            step: None,
            options: None,
        };
        match &info.kind {
            ControlKind::Slider { min, max, step } => {
                json.kind = "slider";
                json.min = Some(*min);
                json.max = Some(*max);
                json.step = Some(*step);
            }
            ControlKind::Checkbox => json.kind = "checkbox",
            ControlKind::Select { options } => {
                json.kind = "select";
                json.options = Some(options.as_slice());
            }
            ControlKind::Text => json.kind = "text",
        }
        json
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Panel
// ═══════════════════════════════════════════════════════════════════════════

/// Control panel bound to a JavaScript renderer.
#[wasm_bindgen]
pub struct VolumePanel {
    inner: Binder<JsRenderer>,
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn field_from_js(name: &str) -> Result<FieldId, JsValue> {
    name.parse::<FieldId>().map_err(to_js_error)
}

fn value_from_js(value: &JsValue) -> Result<FieldValue, JsValue> {
    if let Some(b) = value.as_bool() {
        Ok(FieldValue::Bool(b))
    } else if let Some(n) = value.as_f64() {
        Ok(FieldValue::Float(n))
    } else if let Some(s) = value.as_string() {
        Ok(FieldValue::Text(s))
    } else {
        Err(JsValue::from_str("expected a boolean, number or string"))
    }
}

fn value_to_js(value: &FieldValue) -> JsValue {
    match value {
        FieldValue::Float(v) => JsValue::from_f64(*v),
        FieldValue::Int(v) => JsValue::from_f64(*v as f64),
        FieldValue::Bool(v) => JsValue::from_bool(*v),
        FieldValue::Text(v) => JsValue::from_str(v),
        FieldValue::Choice(v) => JsValue::from_f64(f64::from(*v)),
    }
}

#[wasm_bindgen]
impl VolumePanel {
    /// Bind to `renderer`, seeding values from its configuration JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(renderer: JsRenderer, snapshot_json: &str) -> Result<VolumePanel, JsValue> {
        Self::new_with_config(renderer, snapshot_json, "{}")
    }

    /// Bind with custom widget ranges (partial JSON allowed).
    pub fn new_with_config(
        renderer: JsRenderer,
        snapshot_json: &str,
        config_json: &str,
    ) -> Result<VolumePanel, JsValue> {
        let value: serde_json::Value = serde_json::from_str(snapshot_json).map_err(to_js_error)?;
        let state = ConfigState::seed(&value).map_err(to_js_error)?;
        let config = PanelConfig::from_json(config_json).map_err(to_js_error)?;

        Ok(VolumePanel {
            inner: Binder::with_config(state, renderer, config),
        })
    }

    /// Report an in-progress change. Returns `true` if the renderer was called.
    pub fn on_change(&mut self, field: &str, value: JsValue) -> Result<bool, JsValue> {
        let field = field_from_js(field)?;
        let value = value_from_js(&value)?;
        let dispatch = self
            .inner
            .on_immediate_change(field, value)
            .map_err(to_js_error)?;
        Ok(matches!(dispatch, Dispatch::Sent(_)))
    }

    /// Report a finished edit. Returns `true` if the renderer was called.
    pub fn on_finish_change(&mut self, field: &str, value: JsValue) -> Result<bool, JsValue> {
        let field = field_from_js(field)?;
        let value = value_from_js(&value)?;
        let dispatch = self.inner.on_commit(field, value).map_err(to_js_error)?;
        Ok(matches!(dispatch, Dispatch::Sent(_)))
    }

    /// Value the widget for `field` should show.
    pub fn display(&self, field: &str) -> Result<JsValue, JsValue> {
        let field = field_from_js(field)?;
        Ok(value_to_js(&self.inner.display(field)))
    }

    /// Re-read the renderer configuration without calling any setter.
    pub fn reseed(&mut self, snapshot_json: &str) -> Result<(), JsValue> {
        let value: serde_json::Value = serde_json::from_str(snapshot_json).map_err(to_js_error)?;
        self.inner.reseed(&value).map_err(to_js_error)
    }

    /// Control descriptors as a JSON array, in panel order.
    pub fn controls_json(&self) -> Result<String, JsValue> {
        let controls: Vec<ControlJson<'_>> =
            self.inner.controls().iter().map(ControlJson::from).collect();
        serde_json::to_string(&controls).map_err(|e| {
            log::error!("Error encoding control descriptors: {:?}", e);
            to_js_error(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::panel_controls;

    #[test]
    fn test_control_json_shape() {
        let controls = panel_controls(&PanelConfig::default(), 512);
        let json: Vec<ControlJson<'_>> = controls.iter().map(ControlJson::from).collect();
        let value = serde_json::to_value(&json).unwrap();

        let steps = &value[FieldId::Steps.slot()];
        assert_eq!(steps["kind"], "slider");
        assert_eq!(steps["deferred"], true);
        assert_eq!(steps["max"], 512.0);

        let thresholding = &value[FieldId::Thresholding.slot()];
        assert_eq!(thresholding["kind"], "select");
        assert_eq!(
            thresholding["options"],
            serde_json::json!(["otsu", "isodata", "yen", "li", "no"])
        );
        assert!(thresholding.get("min").is_none());
    }
}
