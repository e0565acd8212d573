// src/state/snapshot.rs
//
// Renderer configuration snapshot consumed when the panel is bound.

use serde::Deserialize;
use serde_json::Value;

use crate::error::PanelError;

/// Keys every snapshot must carry.
pub const REQUIRED_KEYS: [&str; 15] = [
    "slices_range",
    "gray_min",
    "gray_max",
    "row_col",
    "steps",
    "absorption_mode",
    "opacity_factor",
    "color_factor",
    "x_min",
    "x_max",
    "y_min",
    "y_max",
    "z_min",
    "z_max",
    "auto_steps",
];

/// Authoritative renderer state at session start.
///
/// Extra keys are ignored; the renderer's configuration carries more than the
/// panel exposes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    /// `[start, end]`; only the end is exposed as the slice count
    pub slices_range: [u32; 2],
    pub gray_min: f64,
    pub gray_max: f64,
    /// `[rows, cols]`
    pub row_col: [u32; 2],
    pub steps: u32,
    pub absorption_mode: u32,
    pub opacity_factor: f64,
    pub color_factor: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub auto_steps: bool,
}

impl Snapshot {
    /// Decode a snapshot, reporting the first absent key by name.
    pub fn from_value(value: &Value) -> Result<Self, PanelError> {
        if let Some(object) = value.as_object() {
            if let Some(key) = REQUIRED_KEYS.into_iter().find(|key| !object.contains_key(*key)) {
                return Err(PanelError::MissingField { key });
            }
        }
        Ok(Snapshot::deserialize(value)?)
    }

    /// Parse snapshot JSON text.
    pub fn from_json(text: &str) -> Result<Self, PanelError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}
