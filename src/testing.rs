// src/testing.rs
//
// Renderer double shared by unit tests.

use crate::presets::{ColorStop, Extent};
use crate::renderer::{Renderer, RendererCall};

/// Records every renderer write in order.
pub struct Recorder {
    pub calls: Vec<RendererCall>,
    max_steps: u32,
}

impl Recorder {
    pub fn new(max_steps: u32) -> Self {
        Self {
            calls: Vec::new(),
            max_steps,
        }
    }
}

impl Renderer for Recorder {
    fn set_geometry_min_x(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGeometryMinX(value));
    }

    fn set_geometry_max_x(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGeometryMaxX(value));
    }

    fn set_geometry_min_y(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGeometryMinY(value));
    }

    fn set_geometry_max_y(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGeometryMaxY(value));
    }

    fn set_geometry_min_z(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGeometryMinZ(value));
    }

    fn set_geometry_max_z(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGeometryMaxZ(value));
    }

    fn set_steps(&mut self, steps: u32) {
        self.calls.push(RendererCall::SetSteps(steps));
    }

    fn max_steps_number(&self) -> u32 {
        self.max_steps
    }

    fn set_slices_range(&mut self, start: u32, end: u32) {
        self.calls.push(RendererCall::SetSlicesRange { start, end });
    }

    fn set_auto_steps_on(&mut self, on: bool) {
        self.calls.push(RendererCall::SetAutoStepsOn(on));
    }

    fn set_absorption_mode(&mut self, mode: u32) {
        self.calls.push(RendererCall::SetAbsorptionMode(mode));
    }

    fn set_color_factor(&mut self, value: f64) {
        self.calls.push(RendererCall::SetColorFactor(value));
    }

    fn set_opacity_factor(&mut self, value: f64) {
        self.calls.push(RendererCall::SetOpacityFactor(value));
    }

    fn set_gray_min_value(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGrayMinValue(value));
    }

    fn set_gray_max_value(&mut self, value: f64) {
        self.calls.push(RendererCall::SetGrayMaxValue(value));
    }

    fn set_render_size(&mut self, width: Extent, height: Extent) {
        self.calls.push(RendererCall::SetRenderSize { width, height });
    }

    fn set_render_canvas_size(&mut self, width: Extent, height: Extent) {
        self.calls
            .push(RendererCall::SetRenderCanvasSize { width, height });
    }

    fn set_row_col(&mut self, rows: u32, cols: u32) {
        self.calls.push(RendererCall::SetRowCol { rows, cols });
    }

    fn set_transfer_function_by_colors(&mut self, stops: &[ColorStop]) {
        self.calls
            .push(RendererCall::SetTransferFunctionByColors(stops.to_vec()));
    }

    fn apply_thresholding(&mut self, method: &str) {
        self.calls
            .push(RendererCall::ApplyThresholding(method.to_string()));
    }
}

/// Snapshot text matching what the renderer reports at startup.
pub const SNAPSHOT: &str = r#"{
    "slices_range": [0, 256],
    "gray_min": 0.1,
    "gray_max": 0.9,
    "row_col": [4, 3],
    "steps": 120,
    "absorption_mode": 1,
    "opacity_factor": 25.0,
    "color_factor": 3.5,
    "x_min": 0.0,
    "x_max": 1.0,
    "y_min": 0.0,
    "y_max": 1.0,
    "z_min": 0.2,
    "z_max": 0.8,
    "auto_steps": false
}"#;

pub fn snapshot() -> serde_json::Value {
    serde_json::from_str(SNAPSHOT).unwrap()
}

/// The snapshot with one key removed.
pub fn snapshot_without(key: &str) -> serde_json::Value {
    let mut value = snapshot();
    value.as_object_mut().unwrap().remove(key);
    value
}
