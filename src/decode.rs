// src/decode.rs
//
// Translation between widget display values and renderer arguments.
//
// Decoding happens in two steps:
// - `Setting::decode` coerces a `FieldValue` into the field's typed value
//   (enum lookups and the rows/columns composite included).
// - `Setting::renderer_call` packages a typed value as the renderer expects,
//   or yields nothing for sentinel selections.
//
// Nothing here touches `ConfigState`, so a failed decode cannot leave it
// half-updated.

use std::fmt;
use std::str::FromStr;

use crate::error::PanelError;
use crate::presets::{AbsorptionMode, CanvasSize, Colormap, RenderSize, Thresholding};
use crate::renderer::RendererCall;
use crate::state::{FieldId, FieldValue};

/// Tile layout of the view, shown as `"<rows>x<cols>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCol {
    pub rows: u32,
    pub cols: u32,
}

impl RowCol {
    pub const DELIMITER: char = 'x';

    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for RowCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.rows, Self::DELIMITER, self.cols)
    }
}

impl FromStr for RowCol {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PanelError::MalformedCompositeValue {
            value: s.to_string(),
        };
        let mut tokens = s.split(Self::DELIMITER);
        let (Some(rows), Some(cols), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(malformed());
        };
        Ok(Self {
            rows: parse_digits(rows).ok_or_else(malformed)?,
            cols: parse_digits(cols).ok_or_else(malformed)?,
        })
    }
}

/// Strict decimal: no sign, no whitespace.
fn parse_digits(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// A decoded, typed value for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    XMin(f64),
    XMax(f64),
    YMin(f64),
    YMax(f64),
    ZMin(f64),
    ZMax(f64),
    Steps(u32),
    NumberSlices(u32),
    AutoSteps(bool),
    AbsorptionMode(AbsorptionMode),
    ColorFactor(f64),
    OpacityFactor(f64),
    GrayMin(f64),
    GrayMax(f64),
    RenderSize(RenderSize),
    RenderCanvasSize(CanvasSize),
    RowCol(RowCol),
    Colormap(Colormap),
    Thresholding(Thresholding),
}

impl Setting {
    /// Coerce a display value into the typed value of `field`.
    pub fn decode(field: FieldId, value: &FieldValue) -> Result<Self, PanelError> {
        let setting = match field {
            FieldId::XMin => Setting::XMin(as_float(field, value)?),
            FieldId::XMax => Setting::XMax(as_float(field, value)?),
            FieldId::YMin => Setting::YMin(as_float(field, value)?),
            FieldId::YMax => Setting::YMax(as_float(field, value)?),
            FieldId::ZMin => Setting::ZMin(as_float(field, value)?),
            FieldId::ZMax => Setting::ZMax(as_float(field, value)?),
            FieldId::Steps => Setting::Steps(as_count(field, value)?),
            FieldId::NumberSlices => Setting::NumberSlices(as_count(field, value)?),
            FieldId::AutoSteps => match value {
                FieldValue::Bool(on) => Setting::AutoSteps(*on),
                _ => return Err(mismatch(field, "a boolean")),
            },
            FieldId::AbsorptionMode => Setting::AbsorptionMode(as_choice(field, value)?),
            FieldId::ColorFactor => Setting::ColorFactor(as_float(field, value)?),
            FieldId::OpacityFactor => Setting::OpacityFactor(as_float(field, value)?),
            FieldId::GrayMin => Setting::GrayMin(as_float(field, value)?),
            FieldId::GrayMax => Setting::GrayMax(as_float(field, value)?),
            FieldId::RenderSize => Setting::RenderSize(as_choice(field, value)?),
            FieldId::RenderCanvasSize => Setting::RenderCanvasSize(as_choice(field, value)?),
            FieldId::RowCol => match value {
                FieldValue::Text(text) => Setting::RowCol(text.parse()?),
                _ => return Err(mismatch(field, "text of the form <rows>x<cols>")),
            },
            FieldId::Colormap => Setting::Colormap(as_choice(field, value)?),
            FieldId::Thresholding => Setting::Thresholding(as_choice(field, value)?),
        };
        Ok(setting)
    }

    pub fn field(&self) -> FieldId {
        match self {
            Setting::XMin(_) => FieldId::XMin,
            Setting::XMax(_) => FieldId::XMax,
            Setting::YMin(_) => FieldId::YMin,
            Setting::YMax(_) => FieldId::YMax,
            Setting::ZMin(_) => FieldId::ZMin,
            Setting::ZMax(_) => FieldId::ZMax,
            Setting::Steps(_) => FieldId::Steps,
            Setting::NumberSlices(_) => FieldId::NumberSlices,
            Setting::AutoSteps(_) => FieldId::AutoSteps,
            Setting::AbsorptionMode(_) => FieldId::AbsorptionMode,
            Setting::ColorFactor(_) => FieldId::ColorFactor,
            Setting::OpacityFactor(_) => FieldId::OpacityFactor,
            Setting::GrayMin(_) => FieldId::GrayMin,
            Setting::GrayMax(_) => FieldId::GrayMax,
            Setting::RenderSize(_) => FieldId::RenderSize,
            Setting::RenderCanvasSize(_) => FieldId::RenderCanvasSize,
            Setting::RowCol(_) => FieldId::RowCol,
            Setting::Colormap(_) => FieldId::Colormap,
            Setting::Thresholding(_) => FieldId::Thresholding,
        }
    }

    /// Display representation of this value.
    pub fn display(&self) -> FieldValue {
        match *self {
            Setting::XMin(v)
            | Setting::XMax(v)
            | Setting::YMin(v)
            | Setting::YMax(v)
            | Setting::ZMin(v)
            | Setting::ZMax(v)
            | Setting::ColorFactor(v)
            | Setting::OpacityFactor(v)
            | Setting::GrayMin(v)
            | Setting::GrayMax(v) => FieldValue::Float(v),
            Setting::Steps(n) | Setting::NumberSlices(n) => FieldValue::Int(i64::from(n)),
            Setting::AutoSteps(on) => FieldValue::Bool(on),
            Setting::AbsorptionMode(mode) => FieldValue::Choice(mode.index()),
            Setting::RenderSize(size) => FieldValue::Choice(size.index()),
            Setting::RenderCanvasSize(size) => FieldValue::Choice(size.index()),
            Setting::RowCol(rc) => FieldValue::Text(rc.to_string()),
            Setting::Colormap(map) => FieldValue::Choice(map.index()),
            Setting::Thresholding(method) => FieldValue::Choice(method.index()),
        }
    }

    /// The renderer write for this value, `None` for sentinel selections.
    pub fn renderer_call(&self) -> Option<RendererCall> {
        let call = match *self {
            Setting::XMin(v) => RendererCall::SetGeometryMinX(v),
            Setting::XMax(v) => RendererCall::SetGeometryMaxX(v),
            Setting::YMin(v) => RendererCall::SetGeometryMinY(v),
            Setting::YMax(v) => RendererCall::SetGeometryMaxY(v),
            Setting::ZMin(v) => RendererCall::SetGeometryMinZ(v),
            Setting::ZMax(v) => RendererCall::SetGeometryMaxZ(v),
            Setting::Steps(n) => RendererCall::SetSteps(n),
            // The panel only moves the end of the range.
            Setting::NumberSlices(n) => RendererCall::SetSlicesRange { start: 0, end: n },
            Setting::AutoSteps(on) => RendererCall::SetAutoStepsOn(on),
            Setting::AbsorptionMode(mode) => RendererCall::SetAbsorptionMode(mode.index()),
            Setting::ColorFactor(v) => RendererCall::SetColorFactor(v),
            Setting::OpacityFactor(v) => RendererCall::SetOpacityFactor(v),
            Setting::GrayMin(v) => RendererCall::SetGrayMinValue(v),
            Setting::GrayMax(v) => RendererCall::SetGrayMaxValue(v),
            Setting::RenderSize(RenderSize::Size(extent)) => RendererCall::SetRenderSize {
                width: extent,
                height: extent,
            },
            Setting::RenderCanvasSize(CanvasSize::Size(extent)) => {
                RendererCall::SetRenderCanvasSize {
                    width: extent,
                    height: extent,
                }
            }
            Setting::RenderSize(RenderSize::Unchanged)
            | Setting::RenderCanvasSize(CanvasSize::Unchanged) => return None,
            Setting::RowCol(rc) => RendererCall::SetRowCol {
                rows: rc.rows,
                cols: rc.cols,
            },
            Setting::Colormap(map) => {
                RendererCall::SetTransferFunctionByColors(map.stops()?.to_vec())
            }
            Setting::Thresholding(method) => {
                RendererCall::ApplyThresholding(method.method()?.to_string())
            }
        };
        Some(call)
    }
}

fn mismatch(field: FieldId, expected: &'static str) -> PanelError {
    PanelError::TypeMismatch { field, expected }
}

fn as_float(field: FieldId, value: &FieldValue) -> Result<f64, PanelError> {
    match value {
        FieldValue::Float(v) => Ok(*v),
        FieldValue::Int(v) => Ok(*v as f64),
        _ => Err(mismatch(field, "a number")),
    }
}

fn as_count(field: FieldId, value: &FieldValue) -> Result<u32, PanelError> {
    let n = match value {
        FieldValue::Int(v) => *v,
        FieldValue::Float(v) if v.is_finite() => v.round() as i64,
        _ => return Err(mismatch(field, "a whole number")),
    };
    u32::try_from(n).map_err(|_| mismatch(field, "a non-negative whole number"))
}

/// Index of a select, accepting the stringified form widget libraries emit.
fn as_index(field: FieldId, value: &FieldValue) -> Result<u32, PanelError> {
    let index = match value {
        FieldValue::Choice(i) => return Ok(*i),
        FieldValue::Int(i) => *i,
        FieldValue::Float(v) if v.is_finite() && v.fract() == 0.0 => *v as i64,
        FieldValue::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| mismatch(field, "an option index"))?,
        _ => return Err(mismatch(field, "an option index")),
    };
    u32::try_from(index).map_err(|_| PanelError::UnknownEnumIndex { field, index })
}

fn as_choice<T: TryFrom<u32, Error = u32>>(
    field: FieldId,
    value: &FieldValue,
) -> Result<T, PanelError> {
    T::try_from(as_index(field, value)?).map_err(|index| PanelError::UnknownEnumIndex {
        field,
        index: i64::from(index),
    })
}
