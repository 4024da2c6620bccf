//! Error type for the mapping engine.

use serde_json::Value;
use thiserror::Error;

use json_bind_path::{format_path, Step};

/// Everything that can go wrong while resolving or projecting a field.
///
/// Errors are raised at the point of detection and returned to the
/// record-level driver; there is no partial recovery. The only two
/// conditions deliberately not reported are a missing non-required path and
/// a nullable enum lookup miss, both of which resolve to the absent value.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("missing required value: {path}")]
    MissingRequired { path: String },

    #[error("union types are not supported without an explicit hint: {path}")]
    UnsupportedUnion { path: String },

    #[error("incorrectly typed value received; expected {expected} but got {actual}: {path}")]
    TypeMismatch {
        expected: String,
        actual: String,
        path: String,
    },

    #[error("conflicting write at {path}")]
    PathConflict { path: String },

    #[error("no {name} variant matches raw value {raw}")]
    UnknownEnumValue { name: String, raw: Value },

    #[error("malformed JSON text: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl BindError {
    /// Stamps a field's path onto errors raised below the field layer.
    ///
    /// Coercion and conversion errors carry an empty path placeholder until
    /// the owning field is known; errors that already name a path (such as a
    /// nested record's own failures) keep it.
    pub(crate) fn located(self, path: &[Step]) -> BindError {
        match self {
            BindError::UnsupportedUnion { path: p } if p.is_empty() => {
                BindError::UnsupportedUnion {
                    path: format_path(path),
                }
            }
            BindError::TypeMismatch {
                expected,
                actual,
                path: p,
            } if p.is_empty() => BindError::TypeMismatch {
                expected,
                actual,
                path: format_path(path),
            },
            other => other,
        }
    }
}
