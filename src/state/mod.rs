// src/state/mod.rs
//
// Declarative state layer for the control panel.
//
// This module contains the panel's view of the renderer configuration:
// which controls exist, how they are shown, and their current values.
//
// Key principles:
// - One owned `ConfigState` per session, seeded from a renderer snapshot
// - Values change only through decoded edits
// - The renderer never reads these structures

mod config_state;
mod field;
mod param_info;
mod snapshot;

pub use config_state::*;
pub use field::*;
pub use param_info::*;
pub use snapshot::*;
