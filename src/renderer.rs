// src/renderer.rs
//
// Outbound contract towards the volume renderer.
//
// Every write is first expressed as a `RendererCall` value, then applied
// through the `Renderer` trait.

use crate::presets::{ColorStop, Extent};

/// Setter surface of the volume renderer.
///
/// Calls are synchronous and fire-and-forget from the binder's point of view.
pub trait Renderer {
    fn set_geometry_min_x(&mut self, value: f64);
    fn set_geometry_max_x(&mut self, value: f64);
    fn set_geometry_min_y(&mut self, value: f64);
    fn set_geometry_max_y(&mut self, value: f64);
    fn set_geometry_min_z(&mut self, value: f64);
    fn set_geometry_max_z(&mut self, value: f64);

    fn set_steps(&mut self, steps: u32);

    /// Upper bound for the steps control, queried once at bind time.
    fn max_steps_number(&self) -> u32;

    fn set_slices_range(&mut self, start: u32, end: u32);
    fn set_auto_steps_on(&mut self, on: bool);
    fn set_absorption_mode(&mut self, mode: u32);
    fn set_color_factor(&mut self, value: f64);
    fn set_opacity_factor(&mut self, value: f64);
    fn set_gray_min_value(&mut self, value: f64);
    fn set_gray_max_value(&mut self, value: f64);
    fn set_render_size(&mut self, width: Extent, height: Extent);
    fn set_render_canvas_size(&mut self, width: Extent, height: Extent);
    fn set_row_col(&mut self, rows: u32, cols: u32);
    fn set_transfer_function_by_colors(&mut self, stops: &[ColorStop]);
    fn apply_thresholding(&mut self, method: &str);
}

/// A single renderer write, produced by decoding a committed edit.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererCall {
    SetGeometryMinX(f64),
    SetGeometryMaxX(f64),
    SetGeometryMinY(f64),
    SetGeometryMaxY(f64),
    SetGeometryMinZ(f64),
    SetGeometryMaxZ(f64),
    SetSteps(u32),
    SetSlicesRange { start: u32, end: u32 },
    SetAutoStepsOn(bool),
    SetAbsorptionMode(u32),
    SetColorFactor(f64),
    SetOpacityFactor(f64),
    SetGrayMinValue(f64),
    SetGrayMaxValue(f64),
    SetRenderSize { width: Extent, height: Extent },
    SetRenderCanvasSize { width: Extent, height: Extent },
    SetRowCol { rows: u32, cols: u32 },
    SetTransferFunctionByColors(Vec<ColorStop>),
    ApplyThresholding(String),
}

impl RendererCall {
    /// Forward this call to a renderer.
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            RendererCall::SetGeometryMinX(v) => renderer.set_geometry_min_x(*v),
            RendererCall::SetGeometryMaxX(v) => renderer.set_geometry_max_x(*v),
            RendererCall::SetGeometryMinY(v) => renderer.set_geometry_min_y(*v),
            RendererCall::SetGeometryMaxY(v) => renderer.set_geometry_max_y(*v),
            RendererCall::SetGeometryMinZ(v) => renderer.set_geometry_min_z(*v),
            RendererCall::SetGeometryMaxZ(v) => renderer.set_geometry_max_z(*v),
            RendererCall::SetSteps(steps) => renderer.set_steps(*steps),
            RendererCall::SetSlicesRange { start, end } => renderer.set_slices_range(*start, *end),
            RendererCall::SetAutoStepsOn(on) => renderer.set_auto_steps_on(*on),
            RendererCall::SetAbsorptionMode(mode) => renderer.set_absorption_mode(*mode),
            RendererCall::SetColorFactor(v) => renderer.set_color_factor(*v),
            RendererCall::SetOpacityFactor(v) => renderer.set_opacity_factor(*v),
            RendererCall::SetGrayMinValue(v) => renderer.set_gray_min_value(*v),
            RendererCall::SetGrayMaxValue(v) => renderer.set_gray_max_value(*v),
            RendererCall::SetRenderSize { width, height } => {
                renderer.set_render_size(*width, *height)
            }
            RendererCall::SetRenderCanvasSize { width, height } => {
                renderer.set_render_canvas_size(*width, *height)
            }
            RendererCall::SetRowCol { rows, cols } => renderer.set_row_col(*rows, *cols),
            RendererCall::SetTransferFunctionByColors(stops) => {
                renderer.set_transfer_function_by_colors(stops)
            }
            RendererCall::ApplyThresholding(method) => renderer.apply_thresholding(method),
        }
    }
}
