// src/presets.rs
//
// Fixed lookup tables behind the enumerated controls.
//
// Each selector is a typed enum with a `TryFrom<u32>` that rejects indices
// outside its table. Sentinel variants ("default", "no") decode to no
// renderer call at all.

use std::fmt;

use serde::Serialize;

/// A render target extent: a pixel count or the renderer's wildcard `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    Pixels(u32),
    Wildcard,
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Pixels(px) => write!(f, "{}", px),
            Extent::Wildcard => write!(f, "*"),
        }
    }
}

/// One stop of a piecewise color gradient over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub pos: f64,
    pub color: &'static str,
}

const fn stop(pos: f64, color: &'static str) -> ColorStop {
    ColorStop { pos, color }
}

// ═══════════════════════════════════════════════════════════════════════════
// Absorption mode
// ═══════════════════════════════════════════════════════════════════════════

/// Ray accumulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsorptionMode {
    #[default]
    Mips,
    XRay,
    MaxProjectionIntensity,
}

impl AbsorptionMode {
    pub const ALL: [AbsorptionMode; 3] = [
        AbsorptionMode::Mips,
        AbsorptionMode::XRay,
        AbsorptionMode::MaxProjectionIntensity,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            AbsorptionMode::Mips => "MIPS",
            AbsorptionMode::XRay => "X-ray",
            AbsorptionMode::MaxProjectionIntensity => "Maximum projection intensity",
        }
    }
}

impl TryFrom<u32> for AbsorptionMode {
    type Error = u32;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::ALL.get(index as usize).copied().ok_or(index)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolution ladders
// ═══════════════════════════════════════════════════════════════════════════

/// Render target size selection. Index 8 is the "default" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderSize {
    Size(Extent),
    #[default]
    Unchanged,
}

const RENDER_SIZE_LADDER: [Extent; 8] = [
    Extent::Pixels(128),
    Extent::Pixels(256),
    Extent::Pixels(512),
    Extent::Pixels(768),
    Extent::Pixels(1024),
    Extent::Pixels(2048),
    Extent::Pixels(4096),
    Extent::Wildcard,
];

/// Canvas size selection. The ladder starts one tier above the render size
/// ladder, so index 7 is the "default" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasSize {
    Size(Extent),
    #[default]
    Unchanged,
}

const CANVAS_SIZE_LADDER: [Extent; 7] = [
    Extent::Pixels(256),
    Extent::Pixels(512),
    Extent::Pixels(768),
    Extent::Pixels(1024),
    Extent::Pixels(2048),
    Extent::Pixels(4096),
    Extent::Wildcard,
];

fn ladder_index(ladder: &[Extent], extent: Extent) -> u32 {
    ladder
        .iter()
        .position(|e| *e == extent)
        .unwrap_or(ladder.len()) as u32
}

fn ladder_labels(ladder: &[Extent]) -> Vec<String> {
    ladder
        .iter()
        .map(Extent::to_string)
        .chain(std::iter::once("default".to_string()))
        .collect()
}

impl RenderSize {
    pub const SENTINEL: u32 = RENDER_SIZE_LADDER.len() as u32;

    pub fn index(self) -> u32 {
        match self {
            RenderSize::Size(extent) => ladder_index(&RENDER_SIZE_LADDER, extent),
            RenderSize::Unchanged => Self::SENTINEL,
        }
    }

    pub fn labels() -> Vec<String> {
        ladder_labels(&RENDER_SIZE_LADDER)
    }
}

impl TryFrom<u32> for RenderSize {
    type Error = u32;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match RENDER_SIZE_LADDER.get(index as usize) {
            Some(extent) => Ok(RenderSize::Size(*extent)),
            None if index == Self::SENTINEL => Ok(RenderSize::Unchanged),
            None => Err(index),
        }
    }
}

impl CanvasSize {
    pub const SENTINEL: u32 = CANVAS_SIZE_LADDER.len() as u32;

    pub fn index(self) -> u32 {
        match self {
            CanvasSize::Size(extent) => ladder_index(&CANVAS_SIZE_LADDER, extent),
            CanvasSize::Unchanged => Self::SENTINEL,
        }
    }

    pub fn labels() -> Vec<String> {
        ladder_labels(&CANVAS_SIZE_LADDER)
    }
}

impl TryFrom<u32> for CanvasSize {
    type Error = u32;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        match CANVAS_SIZE_LADDER.get(index as usize) {
            Some(extent) => Ok(CanvasSize::Size(*extent)),
            None if index == Self::SENTINEL => Ok(CanvasSize::Unchanged),
            None => Err(index),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Colormaps
// ═══════════════════════════════════════════════════════════════════════════

/// Transfer function preset. `Default` leaves the renderer's function alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    Parula,
    Jet,
    Hsv,
    Hot,
    Cool,
    Spring,
    Summer,
    Autumn,
    Winter,
    Gray,
    Bone,
    Copper,
    Pink,
    #[default]
    Default,
}

const PARULA: &[ColorStop] = &[stop(0.0, "#352A87"), stop(1.0, "#F9FB0E")];
const JET: &[ColorStop] = &[stop(0.0, "#0000ff"), stop(1.0, "#ff0000")];
const HSV: &[ColorStop] = &[
    stop(0.0, "#ff0000"),
    stop(0.25, "#00ff00"),
    stop(0.5, "#0000ff"),
    stop(1.0, "#ff0000"),
];
const HOT: &[ColorStop] = &[
    stop(0.0, "#000000"),
    stop(0.25, "#ff0000"),
    stop(0.5, "#ffff00"),
    stop(1.0, "#ffffff"),
];
const COOL: &[ColorStop] = &[stop(0.0, "#00ffff"), stop(1.0, "#E405E4")];
const SPRING: &[ColorStop] = &[stop(0.0, "#E405E4"), stop(1.0, "#FFFF00")];
const SUMMER: &[ColorStop] = &[stop(0.0, "#008066"), stop(1.0, "#FFFF66")];
const AUTUMN: &[ColorStop] = &[stop(0.0, "#ff0000"), stop(1.0, "#ffff00")];
const WINTER: &[ColorStop] = &[stop(0.0, "#0000ff"), stop(1.0, "#00ffff")];
const GRAY: &[ColorStop] = &[stop(0.0, "#000000"), stop(1.0, "#ffffff")];
const BONE: &[ColorStop] = &[
    stop(0.0, "#000000"),
    stop(0.5, "#788798"),
    stop(1.0, "#ffffff"),
];
const COPPER: &[ColorStop] = &[stop(0.0, "#000000"), stop(1.0, "#FFC77F")];
const PINK: &[ColorStop] = &[
    stop(0.0, "#000000"),
    stop(0.25, "#A76C6C"),
    stop(0.5, "#E8E8B4"),
    stop(1.0, "#ffffff"),
];

impl Colormap {
    pub const ALL: [Colormap; 14] = [
        Colormap::Parula,
        Colormap::Jet,
        Colormap::Hsv,
        Colormap::Hot,
        Colormap::Cool,
        Colormap::Spring,
        Colormap::Summer,
        Colormap::Autumn,
        Colormap::Winter,
        Colormap::Gray,
        Colormap::Bone,
        Colormap::Copper,
        Colormap::Pink,
        Colormap::Default,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Colormap::Parula => "parula",
            Colormap::Jet => "jet",
            Colormap::Hsv => "hsv",
            Colormap::Hot => "hot",
            Colormap::Cool => "cool",
            Colormap::Spring => "spring",
            Colormap::Summer => "summer",
            Colormap::Autumn => "autumn",
            Colormap::Winter => "winter",
            Colormap::Gray => "gray",
            Colormap::Bone => "bone",
            Colormap::Copper => "copper",
            Colormap::Pink => "pink",
            Colormap::Default => "default",
        }
    }

    /// Gradient stops for this preset, `None` for `Default`.
    pub fn stops(self) -> Option<&'static [ColorStop]> {
        let stops = match self {
            Colormap::Parula => PARULA,
            Colormap::Jet => JET,
            Colormap::Hsv => HSV,
            Colormap::Hot => HOT,
            Colormap::Cool => COOL,
            Colormap::Spring => SPRING,
            Colormap::Summer => SUMMER,
            Colormap::Autumn => AUTUMN,
            Colormap::Winter => WINTER,
            Colormap::Gray => GRAY,
            Colormap::Bone => BONE,
            Colormap::Copper => COPPER,
            Colormap::Pink => PINK,
            Colormap::Default => return None,
        };
        Some(stops)
    }
}

impl TryFrom<u32> for Colormap {
    type Error = u32;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::ALL.get(index as usize).copied().ok_or(index)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Thresholding
// ═══════════════════════════════════════════════════════════════════════════

/// Automatic thresholding algorithm. `Off` issues no call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thresholding {
    Otsu,
    Isodata,
    Yen,
    Li,
    #[default]
    Off,
}

impl Thresholding {
    pub const ALL: [Thresholding; 5] = [
        Thresholding::Otsu,
        Thresholding::Isodata,
        Thresholding::Yen,
        Thresholding::Li,
        Thresholding::Off,
    ];

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        self.method().unwrap_or("no")
    }

    /// Method name understood by the renderer.
    pub fn method(self) -> Option<&'static str> {
        match self {
            Thresholding::Otsu => Some("otsu"),
            Thresholding::Isodata => Some("isodata"),
            Thresholding::Yen => Some("yen"),
            Thresholding::Li => Some("li"),
            Thresholding::Off => None,
        }
    }
}

impl TryFrom<u32> for Thresholding {
    type Error = u32;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::ALL.get(index as usize).copied().ok_or(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golden(index: u32) -> Vec<(f64, &'static str)> {
        Colormap::try_from(index)
            .unwrap()
            .stops()
            .unwrap()
            .iter()
            .map(|s| (s.pos, s.color))
            .collect()
    }

    #[test]
    fn test_colormap_golden_tables() {
        assert_eq!(golden(0), vec![(0.0, "#352A87"), (1.0, "#F9FB0E")]);
        assert_eq!(golden(1), vec![(0.0, "#0000ff"), (1.0, "#ff0000")]);
        assert_eq!(
            golden(2),
            vec![(0.0, "#ff0000"), (0.25, "#00ff00"), (0.5, "#0000ff"), (1.0, "#ff0000")]
        );
        assert_eq!(
            golden(3),
            vec![(0.0, "#000000"), (0.25, "#ff0000"), (0.5, "#ffff00"), (1.0, "#ffffff")]
        );
        assert_eq!(golden(4), vec![(0.0, "#00ffff"), (1.0, "#E405E4")]);
        assert_eq!(golden(5), vec![(0.0, "#E405E4"), (1.0, "#FFFF00")]);
        assert_eq!(golden(6), vec![(0.0, "#008066"), (1.0, "#FFFF66")]);
        assert_eq!(golden(7), vec![(0.0, "#ff0000"), (1.0, "#ffff00")]);
        assert_eq!(golden(8), vec![(0.0, "#0000ff"), (1.0, "#00ffff")]);
        assert_eq!(golden(9), vec![(0.0, "#000000"), (1.0, "#ffffff")]);
        assert_eq!(
            golden(10),
            vec![(0.0, "#000000"), (0.5, "#788798"), (1.0, "#ffffff")]
        );
        assert_eq!(golden(11), vec![(0.0, "#000000"), (1.0, "#FFC77F")]);
        assert_eq!(
            golden(12),
            vec![(0.0, "#000000"), (0.25, "#A76C6C"), (0.5, "#E8E8B4"), (1.0, "#ffffff")]
        );
    }

    #[test]
    fn test_colormap_default_has_no_stops() {
        assert_eq!(Colormap::try_from(13), Ok(Colormap::Default));
        assert!(Colormap::Default.stops().is_none());
        assert_eq!(Colormap::try_from(14), Err(14));
    }

    #[test]
    fn test_thresholding_methods() {
        let names: Vec<_> = (0..4)
            .map(|i| Thresholding::try_from(i).unwrap().method().unwrap())
            .collect();
        assert_eq!(names, ["otsu", "isodata", "yen", "li"]);
        assert_eq!(Thresholding::try_from(4).unwrap().method(), None);
        assert!(Thresholding::try_from(5).is_err());
    }

    #[test]
    fn test_render_size_ladder() {
        assert_eq!(
            RenderSize::try_from(0),
            Ok(RenderSize::Size(Extent::Pixels(128)))
        );
        assert_eq!(
            RenderSize::try_from(6),
            Ok(RenderSize::Size(Extent::Pixels(4096)))
        );
        assert_eq!(RenderSize::try_from(7), Ok(RenderSize::Size(Extent::Wildcard)));
        assert_eq!(RenderSize::try_from(8), Ok(RenderSize::Unchanged));
        assert_eq!(RenderSize::try_from(9), Err(9));
        assert_eq!(RenderSize::Size(Extent::Pixels(768)).index(), 3);
        assert_eq!(RenderSize::Unchanged.index(), 8);
    }

    #[test]
    fn test_canvas_size_ladder_is_shifted() {
        assert_eq!(
            CanvasSize::try_from(0),
            Ok(CanvasSize::Size(Extent::Pixels(256)))
        );
        assert_eq!(CanvasSize::try_from(6), Ok(CanvasSize::Size(Extent::Wildcard)));
        assert_eq!(CanvasSize::try_from(7), Ok(CanvasSize::Unchanged));
        assert_eq!(CanvasSize::try_from(8), Err(8));
        assert_eq!(
            CanvasSize::labels(),
            ["256", "512", "768", "1024", "2048", "4096", "*", "default"]
        );
    }

    #[test]
    fn test_absorption_labels() {
        let labels: Vec<_> = AbsorptionMode::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["MIPS", "X-ray", "Maximum projection intensity"]);
        assert!(AbsorptionMode::try_from(3).is_err());
    }
}
