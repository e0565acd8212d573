// src/main.rs
//
// Sanity run: bind a panel to a logging renderer and replay a short
// editing session.

use log::info;

use volpanel::{
    Binder, ColorStop, ControlEvents, Extent, FieldId, FieldValue, PanelError, Renderer,
};

/// ===============================
/// Logging renderer
/// ===============================

struct LogRenderer {
    max_steps: u32,
    calls: usize,
}

impl LogRenderer {
    fn record(&mut self, what: std::fmt::Arguments<'_>) {
        self.calls += 1;
        info!("renderer <- {}", what);
    }
}

impl Renderer for LogRenderer {
    fn set_geometry_min_x(&mut self, value: f64) {
        self.record(format_args!("setGeometryMinX({})", value));
    }

    fn set_geometry_max_x(&mut self, value: f64) {
        self.record(format_args!("setGeometryMaxX({})", value));
    }

    fn set_geometry_min_y(&mut self, value: f64) {
        self.record(format_args!("setGeometryMinY({})", value));
    }

    fn set_geometry_max_y(&mut self, value: f64) {
        self.record(format_args!("setGeometryMaxY({})", value));
    }

    fn set_geometry_min_z(&mut self, value: f64) {
        self.record(format_args!("setGeometryMinZ({})", value));
    }

    fn set_geometry_max_z(&mut self, value: f64) {
        self.record(format_args!("setGeometryMaxZ({})", value));
    }

    fn set_steps(&mut self, steps: u32) {
        self.record(format_args!("setSteps({})", steps));
    }

    fn max_steps_number(&self) -> u32 {
        self.max_steps
    }

    fn set_slices_range(&mut self, start: u32, end: u32) {
        self.record(format_args!("setSlicesRange({}, {})", start, end));
    }

    fn set_auto_steps_on(&mut self, on: bool) {
        self.record(format_args!("setAutoStepsOn({})", on));
    }

    fn set_absorption_mode(&mut self, mode: u32) {
        self.record(format_args!("setAbsorptionMode({})", mode));
    }

    fn set_color_factor(&mut self, value: f64) {
        self.record(format_args!("setColorFactor({})", value));
    }

    fn set_opacity_factor(&mut self, value: f64) {
        self.record(format_args!("setOpacityFactor({})", value));
    }

    fn set_gray_min_value(&mut self, value: f64) {
        self.record(format_args!("setGrayMinValue({})", value));
    }

    fn set_gray_max_value(&mut self, value: f64) {
        self.record(format_args!("setGrayMaxValue({})", value));
    }

    fn set_render_size(&mut self, width: Extent, height: Extent) {
        self.record(format_args!("setRenderSize({}, {})", width, height));
    }

    fn set_render_canvas_size(&mut self, width: Extent, height: Extent) {
        self.record(format_args!("setRenderCanvasSize({}, {})", width, height));
    }

    fn set_row_col(&mut self, rows: u32, cols: u32) {
        self.record(format_args!("setRowCol({}, {})", rows, cols));
    }

    fn set_transfer_function_by_colors(&mut self, stops: &[ColorStop]) {
        let stops: Vec<String> = stops
            .iter()
            .map(|s| format!("{}@{}", s.color, s.pos))
            .collect();
        self.record(format_args!(
            "setTransferFunctionByColors([{}])",
            stops.join(", ")
        ));
    }

    fn apply_thresholding(&mut self, method: &str) {
        self.record(format_args!("applyThresholding({})", method));
    }
}

const SNAPSHOT: &str = r#"{
    "slices_range": [0, 512],
    "gray_min": 0.0,
    "gray_max": 1.0,
    "row_col": [16, 16],
    "steps": 256,
    "absorption_mode": 0,
    "opacity_factor": 40.0,
    "color_factor": 3.0,
    "x_min": 0.0,
    "x_max": 1.0,
    "y_min": 0.0,
    "y_max": 1.0,
    "z_min": 0.0,
    "z_max": 1.0,
    "auto_steps": false
}"#;

/// ===============================
/// Main
/// ===============================

fn main() -> Result<(), PanelError> {
    simple_logger::init_with_level(log::Level::Debug).ok();

    let snapshot: serde_json::Value = serde_json::from_str(SNAPSHOT)?;
    let renderer = LogRenderer {
        max_steps: 1024,
        calls: 0,
    };
    let mut binder = Binder::bind(renderer, &snapshot)?;

    // Slider drag on an immediate field
    for v in [0.1, 0.2, 0.3] {
        binder.on_immediate_change(FieldId::GrayMin, FieldValue::Float(v))?;
    }

    // Slider drag on a deferred field, then release
    for n in [300, 400, 500] {
        binder.on_immediate_change(FieldId::Steps, FieldValue::Int(n))?;
    }
    binder.on_commit(FieldId::Steps, FieldValue::Int(500))?;

    binder.on_commit(FieldId::NumberSlices, FieldValue::Int(500))?;
    binder.on_commit(FieldId::RenderSize, FieldValue::from("7"))?;
    binder.on_commit(FieldId::RenderCanvasSize, FieldValue::from("7"))?;
    binder.on_commit(FieldId::Colormap, FieldValue::from("0"))?;
    binder.on_commit(FieldId::Thresholding, FieldValue::from("0"))?;

    // A typo in the tile layout is rejected and the panel keeps going
    if let Err(err) = binder.on_commit(FieldId::RowCol, FieldValue::from("4-7")) {
        info!("edit rejected: {} (showing {})", err, binder.display(FieldId::RowCol));
    }
    binder.on_commit(FieldId::RowCol, FieldValue::from("4x7"))?;

    for control in binder.controls() {
        info!(
            "{:<20} {}",
            control.name,
            control.format(&binder.display(control.field))
        );
    }

    info!("Sanity run completed: {} renderer calls.", binder.renderer().calls);
    Ok(())
}
