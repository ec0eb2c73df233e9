//! Expansion pipeline for `#[derive(DslObject)]`.
//!
//! Parsing validates the input eagerly and produces a [`parse::DslInput`];
//! generation turns that description into the trait impls and accessors.

pub(crate) mod generate;
pub(crate) mod parse;
pub(crate) mod runtime_path;


use proc_macro2::TokenStream;

/// Parse `input` and emit the full derive output.
pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::generate(&parsed))
}
