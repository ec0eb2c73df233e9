//! Core crate for the `DslObject` configuration building block.
//!
//! A DSL object is a settings holder whose legal attribute names are declared
//! once per type. Each declared name gets an accessor, values live in an open
//! [`Settings`] map, and a whole configuration can be applied incrementally
//! with [`DslObject::configure_from`] (override) or
//! [`DslObject::reverse_merge`] (fill-missing only).
//!
//! The declaration step lives in the companion `dsl_object_macros` crate and is
//! re-exported here as `#[derive(DslObject)]`.
//!
//! ```rust
//! use dsl_object::{DslObject, Settings};
//! use serde_json::json;
//!
//! #[derive(DslObject)]
//! #[dsl(keys(college, combat_boots, fat, so_fat))]
//! struct Mom {
//!     settings: Settings,
//! }
//!
//! let mut momma = Mom::default();
//! momma.combat_boots("wears");
//! momma.configure_with(|m| {
//!     m.fat(true);
//!     m.so_fat("very");
//! });
//!
//! assert_eq!(momma.get_fat(), Some(&json!(true)));
//! assert_eq!(momma.to_hash().len(), 3);
//! ```

extern crate self as dsl_object;

pub use dsl_object_macros::DslObject;

mod error;
pub mod helpers;
mod name;
mod object;
mod result_ext;
mod schema;
mod settings;

pub use error::{DslError, DslResult};
pub use helpers::{DEFAULT_EXIT_CODE, die, dump, safely};
pub use name::{AttributeName, canonical};
pub use object::DslObject;
pub use result_ext::DslResultExt;
pub use schema::AttributeSchema;
pub use settings::{Settings, SettingsSource};

/// Re-exported so derive output can name JSON values without the caller
/// depending on `serde_json` directly.
#[doc(hidden)]
pub use serde_json::Value as __Value;
