//! Extensions for mapping errors to `DslResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(DslError::from(e)))`
//! chains when converting parser errors into the crate's
//! `DslResult<T>` alias (`Result<T, Arc<DslError>>`).
//!
//! # Examples
//!
//! ```
//! use dsl_object::{DslResult, DslResultExt};
//!
//! fn parse() -> DslResult<serde_json::Value> {
//!     serde_json::from_str("{\"fat\": true}").into_dsl()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{DslError, DslResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<DslError>`
/// into a `DslResult<T>`.
pub trait DslResultExt<T, E> {
    /// Convert `Result<T, E>` into `DslResult<T>` using `Into<DslError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<DslError>`.
    fn into_dsl(self) -> DslResult<T>;
}

impl<T, E> DslResultExt<T, E> for Result<T, E>
where
    E: Into<DslError>,
{
    fn into_dsl(self) -> DslResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
