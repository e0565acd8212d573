// src/lib.rs
//
// Library entry point for control panel front ends.

mod binder;
mod config;
mod decode;
mod error;
mod presets;
mod renderer;
mod state;

#[cfg(test)]
mod testing;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export key types for Rust consumers
pub use binder::{Binder, ControlEvents, Dispatch};
pub use config::PanelConfig;
pub use decode::{RowCol, Setting};
pub use error::PanelError;
pub use presets::{
    AbsorptionMode, CanvasSize, ColorStop, Colormap, Extent, RenderSize, Thresholding,
};
pub use renderer::{Renderer, RendererCall};
pub use state::{
    ConfigState, ControlInfo, ControlKind, FieldId, FieldValue, REQUIRED_KEYS, Snapshot,
    UnknownField, UpdatePolicy,
};
