// src/config.rs
//
// Advisory widget ranges for the panel.

use serde::Deserialize;

const DEFAULT_MIN_STEPS: u32 = 10;
const DEFAULT_MAX_SLICES: u32 = 2048;
const DEFAULT_BOUND_STEP: f64 = 0.1;
const DEFAULT_FACTOR_STEP: f64 = 0.1;
const DEFAULT_MAX_COLOR_FACTOR: f64 = 20.0;
const DEFAULT_MAX_OPACITY_FACTOR: f64 = 50.0;

/// Slider limits and increments handed to front ends.
///
/// These only shape the widgets. Values outside them are still forwarded;
/// the renderer owns clamping.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Floor of the steps slider (its ceiling comes from the renderer).
    pub min_steps: u32,
    /// Ceiling of the slice count slider.
    pub max_slices: u32,
    /// Increment for geometry bounds and gray levels.
    pub bound_step: f64,
    /// Increment for color and opacity factors.
    pub factor_step: f64,
    pub max_color_factor: f64,
    pub max_opacity_factor: f64,
}

impl PanelConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_steps: DEFAULT_MIN_STEPS,
            max_slices: DEFAULT_MAX_SLICES,
            bound_step: DEFAULT_BOUND_STEP,
            factor_step: DEFAULT_FACTOR_STEP,
            max_color_factor: DEFAULT_MAX_COLOR_FACTOR,
            max_opacity_factor: DEFAULT_MAX_OPACITY_FACTOR,
        }
    }
}
