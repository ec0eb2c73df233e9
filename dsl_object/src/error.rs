//! Error types produced while building or parsing settings.

use std::sync::Arc;

use thiserror::Error;

/// Shared result type used throughout the crate.
pub type DslResult<T> = Result<T, Arc<DslError>>;

/// Errors that can occur while turning external data into [`crate::Settings`].
///
/// Attribute reads and writes never fail; only conversions at the edges do.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DslError {
    /// A value that should have been a mapping was something else.
    #[error("expected a mapping of settings, found {found}")]
    NotAMapping {
        /// JSON kind of the rejected value.
        found: &'static str,
    },

    /// JSON parsing or typed extraction failed.
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed.
    #[cfg(feature = "toml")]
    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DslError {
    /// Build a [`DslError::NotAMapping`] describing `value`.
    #[must_use]
    pub const fn not_a_mapping(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "a mapping",
        };
        Self::NotAMapping { found }
    }
}
