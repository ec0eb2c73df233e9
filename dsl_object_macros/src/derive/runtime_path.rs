//! Path under which generated code reaches the `dsl_object` runtime.

use proc_macro2::TokenStream;
use quote::quote;

/// Prefix for every runtime item the expansion names (`DslObject`,
/// `Settings`, `__Value`, ...).
///
/// Absolute `::dsl_object` unless the struct renamed the dependency with
/// `#[dsl(crate = "...")]`, in which case that path is used verbatim.
pub(crate) fn runtime_path(renamed: Option<&syn::Path>) -> TokenStream {
    match renamed {
        Some(path) => quote! { #path },
        None => quote! { ::dsl_object },
    }
}
