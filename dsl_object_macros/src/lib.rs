//! Procedural macros for `dsl_object`.
//!
//! `#[derive(DslObject)]` is the declaration step of a DSL object: it records
//! the type's attribute names in a schema and generates one uniformly behaved
//! accessor pair per name. Subtypes embed their parent in a `#[dsl(base)]`
//! field and inherit its schema and accessors.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `dsl_object::DslObject`.
///
/// Recognised attributes:
///
/// - `#[dsl(keys(a, b, "c"))]` on the struct declares attribute names.
/// - `#[dsl(crate = "path")]` on the struct reaches the core crate through an
///   alias.
/// - `#[dsl(settings)]` marks the `Settings` field (a field named `settings`
///   is picked up without the marker).
/// - `#[dsl(base)]` marks a field holding the parent DSL object.
#[proc_macro_derive(DslObject, attributes(dsl))]
pub fn derive_dsl_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
