// src/state/param_info.rs
//
// Control metadata for UI display.

use crate::config::PanelConfig;
use crate::presets::{AbsorptionMode, CanvasSize, Colormap, RenderSize, Thresholding};

use super::{FieldId, FieldValue, UpdatePolicy};

/// Widget shape for a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    /// Numeric slider
    Slider { min: f64, max: f64, step: f64 },
    /// Boolean toggle
    Checkbox,
    /// Drop-down; option `i` maps to index `i`
    Select { options: Vec<String> },
    /// Free text
    Text,
}

/// Metadata describing one control.
///
/// Used by front ends to:
/// - Pick the widget (slider, checkbox, select, text box)
/// - Set advisory ranges and increments
/// - Decide whether to report every change or only the final one
#[derive(Debug, Clone)]
pub struct ControlInfo {
    pub field: FieldId,

    /// Key used by front ends and in snapshots
    pub name: &'static str,

    pub kind: ControlKind,

    pub policy: UpdatePolicy,
}

impl ControlInfo {
    pub fn new(field: FieldId, kind: ControlKind) -> Self {
        Self {
            field,
            name: field.name(),
            kind,
            policy: field.policy(),
        }
    }

    fn slider(field: FieldId, min: f64, max: f64, step: f64) -> Self {
        Self::new(field, ControlKind::Slider { min, max, step })
    }

    fn select<I, S>(field: FieldId, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = labels.into_iter().map(Into::into).collect();
        Self::new(field, ControlKind::Select { options })
    }

    /// Whether `value` lies inside the advisory range. Non-slider controls
    /// accept anything their decoder accepts.
    pub fn in_range(&self, value: &FieldValue) -> bool {
        let ControlKind::Slider { min, max, .. } = self.kind else {
            return true;
        };
        let v = match value {
            FieldValue::Float(v) => *v,
            FieldValue::Int(v) => *v as f64,
            _ => return true,
        };
        (min..=max).contains(&v)
    }

    /// Format a value for display.
    pub fn format(&self, value: &FieldValue) -> String {
        match (&self.kind, value) {
            (ControlKind::Slider { step, .. }, FieldValue::Float(v)) => {
                let precision = if *step >= 1.0 { 0 } else { 1 };
                format!("{:.prec$}", v, prec = precision)
            }
            (ControlKind::Select { options }, FieldValue::Choice(i)) => options
                .get(*i as usize)
                .cloned()
                .unwrap_or_else(|| value.to_string()),
            _ => value.to_string(),
        }
    }
}

/// Build the control table in panel order.
pub fn panel_controls(config: &PanelConfig, max_steps: u32) -> Vec<ControlInfo> {
    FieldId::ALL
        .into_iter()
        .map(|field| control_for(field, config, max_steps))
        .collect()
}

fn control_for(field: FieldId, config: &PanelConfig, max_steps: u32) -> ControlInfo {
    match field {
        FieldId::XMin
        | FieldId::XMax
        | FieldId::YMin
        | FieldId::YMax
        | FieldId::ZMin
        | FieldId::ZMax
        | FieldId::GrayMin
        | FieldId::GrayMax => ControlInfo::slider(field, 0.0, 1.0, config.bound_step),
        FieldId::Steps => ControlInfo::slider(
            field,
            f64::from(config.min_steps),
            f64::from(max_steps),
            1.0,
        ),
        FieldId::NumberSlices => {
            ControlInfo::slider(field, 1.0, f64::from(config.max_slices), 1.0)
        }
        FieldId::AutoSteps => ControlInfo::new(field, ControlKind::Checkbox),
        FieldId::AbsorptionMode => {
            ControlInfo::select(field, AbsorptionMode::ALL.map(AbsorptionMode::label))
        }
        FieldId::ColorFactor => {
            ControlInfo::slider(field, 0.0, config.max_color_factor, config.factor_step)
        }
        FieldId::OpacityFactor => {
            ControlInfo::slider(field, 0.0, config.max_opacity_factor, config.factor_step)
        }
        FieldId::RenderSize => ControlInfo::select(field, RenderSize::labels()),
        FieldId::RenderCanvasSize => ControlInfo::select(field, CanvasSize::labels()),
        FieldId::RowCol => ControlInfo::new(field, ControlKind::Text),
        FieldId::Colormap => ControlInfo::select(field, Colormap::ALL.map(Colormap::label)),
        FieldId::Thresholding => {
            ControlInfo::select(field, Thresholding::ALL.map(Thresholding::label))
        }
    }
}
