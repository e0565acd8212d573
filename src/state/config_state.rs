// src/state/config_state.rs
//
// Current value of every panel control.

use serde_json::Value;

use crate::decode::{RowCol, Setting};
use crate::error::PanelError;
use crate::presets::{AbsorptionMode, CanvasSize, Colormap, RenderSize, Thresholding};

use super::{FieldId, FieldValue, Snapshot};

/// The panel's record of current values, one per session.
///
/// Seeded from the renderer snapshot, then mutated only by edits. Setters do
/// no range checks; slider limits are advisory and the renderer clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub steps: u32,
    pub number_slices: u32,
    pub auto_steps: bool,
    pub absorption_mode: AbsorptionMode,
    pub color_factor: f64,
    pub opacity_factor: f64,
    pub gray_min: f64,
    pub gray_max: f64,

    /// Last one-shot selection; starts at the "default" sentinel
    pub render_size: RenderSize,
    pub render_canvas_size: CanvasSize,

    pub row_col: RowCol,

    pub colormap: Colormap,
    pub thresholding: Thresholding,
}

impl ConfigState {
    /// Build a state from a renderer snapshot.
    ///
    /// Either every field is populated or an error is returned; there is no
    /// partially seeded state.
    pub fn seed(snapshot: &Value) -> Result<Self, PanelError> {
        Self::from_snapshot(&Snapshot::from_value(snapshot)?)
    }

    pub fn from_snapshot(snap: &Snapshot) -> Result<Self, PanelError> {
        let absorption_mode = AbsorptionMode::try_from(snap.absorption_mode).map_err(|index| {
            PanelError::UnknownEnumIndex {
                field: FieldId::AbsorptionMode,
                index: i64::from(index),
            }
        })?;

        Ok(Self {
            x_min: snap.x_min,
            x_max: snap.x_max,
            y_min: snap.y_min,
            y_max: snap.y_max,
            z_min: snap.z_min,
            z_max: snap.z_max,
            steps: snap.steps,
            number_slices: snap.slices_range[1],
            auto_steps: snap.auto_steps,
            absorption_mode,
            color_factor: snap.color_factor,
            opacity_factor: snap.opacity_factor,
            gray_min: snap.gray_min,
            gray_max: snap.gray_max,
            render_size: RenderSize::default(),
            render_canvas_size: CanvasSize::default(),
            row_col: RowCol::new(snap.row_col[0], snap.row_col[1]),
            colormap: Colormap::default(),
            thresholding: Thresholding::default(),
        })
    }

    /// Refresh snapshot-backed fields, keeping one-shot selections.
    ///
    /// On error the state is left as it was.
    pub fn reseed(&mut self, snapshot: &Value) -> Result<(), PanelError> {
        let fresh = Self::seed(snapshot)?;
        *self = Self {
            render_size: self.render_size,
            render_canvas_size: self.render_canvas_size,
            colormap: self.colormap,
            thresholding: self.thresholding,
            ..fresh
        };
        Ok(())
    }

    /// Typed value of a field.
    pub fn get(&self, field: FieldId) -> Setting {
        match field {
            FieldId::XMin => Setting::XMin(self.x_min),
            FieldId::XMax => Setting::XMax(self.x_max),
            FieldId::YMin => Setting::YMin(self.y_min),
            FieldId::YMax => Setting::YMax(self.y_max),
            FieldId::ZMin => Setting::ZMin(self.z_min),
            FieldId::ZMax => Setting::ZMax(self.z_max),
            FieldId::Steps => Setting::Steps(self.steps),
            FieldId::NumberSlices => Setting::NumberSlices(self.number_slices),
            FieldId::AutoSteps => Setting::AutoSteps(self.auto_steps),
            FieldId::AbsorptionMode => Setting::AbsorptionMode(self.absorption_mode),
            FieldId::ColorFactor => Setting::ColorFactor(self.color_factor),
            FieldId::OpacityFactor => Setting::OpacityFactor(self.opacity_factor),
            FieldId::GrayMin => Setting::GrayMin(self.gray_min),
            FieldId::GrayMax => Setting::GrayMax(self.gray_max),
            FieldId::RenderSize => Setting::RenderSize(self.render_size),
            FieldId::RenderCanvasSize => Setting::RenderCanvasSize(self.render_canvas_size),
            FieldId::RowCol => Setting::RowCol(self.row_col),
            FieldId::Colormap => Setting::Colormap(self.colormap),
            FieldId::Thresholding => Setting::Thresholding(self.thresholding),
        }
    }

    /// Store a typed value.
    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::XMin(v) => self.x_min = v,
            Setting::XMax(v) => self.x_max = v,
            Setting::YMin(v) => self.y_min = v,
            Setting::YMax(v) => self.y_max = v,
            Setting::ZMin(v) => self.z_min = v,
            Setting::ZMax(v) => self.z_max = v,
            Setting::Steps(n) => self.steps = n,
            Setting::NumberSlices(n) => self.number_slices = n,
            Setting::AutoSteps(on) => self.auto_steps = on,
            Setting::AbsorptionMode(mode) => self.absorption_mode = mode,
            Setting::ColorFactor(v) => self.color_factor = v,
            Setting::OpacityFactor(v) => self.opacity_factor = v,
            Setting::GrayMin(v) => self.gray_min = v,
            Setting::GrayMax(v) => self.gray_max = v,
            Setting::RenderSize(size) => self.render_size = size,
            Setting::RenderCanvasSize(size) => self.render_canvas_size = size,
            Setting::RowCol(rc) => self.row_col = rc,
            Setting::Colormap(map) => self.colormap = map,
            Setting::Thresholding(method) => self.thresholding = method,
        }
    }

    /// Display value of a field.
    pub fn value(&self, field: FieldId) -> FieldValue {
        self.get(field).display()
    }

    /// Coerce and store a display value. Nothing is stored on error.
    pub fn set(&mut self, field: FieldId, value: &FieldValue) -> Result<(), PanelError> {
        let setting = Setting::decode(field, value)?;
        self.apply(setting);
        Ok(())
    }
}
