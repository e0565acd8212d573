// src/state/field.rs
//
// Field identities, display values and update policies.

use std::fmt;
use std::str::FromStr;

/// Identifies one control of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    XMin,
    XMax,
    YMin,
    YMax,
    ZMin,
    ZMax,
    Steps,
    NumberSlices,
    AutoSteps,
    AbsorptionMode,
    ColorFactor,
    OpacityFactor,
    GrayMin,
    GrayMax,
    RenderSize,
    RenderCanvasSize,
    RowCol,
    Colormap,
    Thresholding,
}

impl FieldId {
    pub const COUNT: usize = 19;

    /// All fields in panel order.
    pub const ALL: [FieldId; Self::COUNT] = [
        FieldId::XMin,
        FieldId::XMax,
        FieldId::YMin,
        FieldId::YMax,
        FieldId::ZMin,
        FieldId::ZMax,
        FieldId::Steps,
        FieldId::NumberSlices,
        FieldId::AutoSteps,
        FieldId::AbsorptionMode,
        FieldId::ColorFactor,
        FieldId::OpacityFactor,
        FieldId::GrayMin,
        FieldId::GrayMax,
        FieldId::RenderSize,
        FieldId::RenderCanvasSize,
        FieldId::RowCol,
        FieldId::Colormap,
        FieldId::Thresholding,
    ];

    /// Position in `ALL`, usable as a table index.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Wire name used by front ends.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::XMin => "x_min",
            FieldId::XMax => "x_max",
            FieldId::YMin => "y_min",
            FieldId::YMax => "y_max",
            FieldId::ZMin => "z_min",
            FieldId::ZMax => "z_max",
            FieldId::Steps => "steps",
            FieldId::NumberSlices => "number_slices",
            FieldId::AutoSteps => "auto_steps",
            FieldId::AbsorptionMode => "absorption_mode",
            FieldId::ColorFactor => "color_factor",
            FieldId::OpacityFactor => "opacity_factor",
            FieldId::GrayMin => "gray_min",
            FieldId::GrayMax => "gray_max",
            FieldId::RenderSize => "render_size",
            FieldId::RenderCanvasSize => "render_canvas_size",
            FieldId::RowCol => "row_col",
            FieldId::Colormap => "colormap",
            FieldId::Thresholding => "thresholding",
        }
    }

    /// When edits of this field reach the renderer.
    pub fn policy(self) -> UpdatePolicy {
        match self {
            FieldId::Steps
            | FieldId::NumberSlices
            | FieldId::RenderSize
            | FieldId::RenderCanvasSize
            | FieldId::RowCol
            | FieldId::Colormap
            | FieldId::Thresholding => UpdatePolicy::Deferred,
            _ => UpdatePolicy::Immediate,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Edit trigger policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Every intermediate value is dispatched.
    Immediate,
    /// Only the committed value is dispatched.
    Deferred,
}

/// Value as shown by (or received from) a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
    /// Index into a select's option list
    Choice(u32),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Choice(v) => write!(f, "#{}", v),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}
