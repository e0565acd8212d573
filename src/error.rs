// src/error.rs
//
// Error taxonomy for snapshot seeding and per-field edits.

use thiserror::Error;

use crate::state::FieldId;

/// Errors raised while binding the panel or applying an edit.
///
/// `MissingField` and `InvalidSnapshot` abort binding. Every other variant is
/// scoped to a single edit: the stored value is kept and the binder stays usable.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The renderer snapshot lacks a required key.
    #[error("snapshot is missing required key '{key}'")]
    MissingField { key: &'static str },

    /// A snapshot key is present but has the wrong shape or type.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    /// A rows/columns value is not of the form `<rows>x<cols>`.
    #[error("malformed rows x columns value '{value}'")]
    MalformedCompositeValue { value: String },

    /// An enumerated selection outside the field's lookup table.
    #[error("index {index} is not a valid choice for '{field}'")]
    UnknownEnumIndex { field: FieldId, index: i64 },

    /// A display value that cannot be coerced into the field's type.
    #[error("'{field}' expects {expected}")]
    TypeMismatch {
        field: FieldId,
        expected: &'static str,
    },
}

impl PanelError {
    /// Whether the error only affects the edit that produced it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            PanelError::MissingField { .. } | PanelError::InvalidSnapshot(_)
        )
    }
}
