//! Error types for path construction and loading.
//!
//! Only setup-time APIs return these. Per-frame sampling never fails; it
//! falls back to a defined value instead (see `arc_length` and `sampling`).

use thiserror::Error;

use crate::data::Closure;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    /// Fewer keys than a cubic segment needs.
    #[error("path needs at least {min} keys for a {closure:?} curve, got {keys}")]
    DegenerateInput {
        keys: usize,
        min: usize,
        closure: Closure,
    },

    #[error("key {index} has a non-finite position or orientation")]
    NonFinite { index: usize },

    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("path json parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for PathError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl PathError {
    /// Whether the error came from the shape of the key data rather than
    /// configuration or decoding.
    #[inline]
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. } | Self::NonFinite { .. })
    }
}
