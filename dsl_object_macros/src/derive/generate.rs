//! Code generation for the `DslObject` derive.
//!
//! The output consists of the `DslObject` impl (schema, construction and
//! settings access), one accessor pair per declared key, and the `Default`,
//! `Display` and `SettingsSource` impls. Types with a base also get
//! `Deref`/`DerefMut` to the parent so inherited accessors resolve.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{DeclaredKey, DslInput, Storage};
use super::runtime_path::runtime_path;

/// Emit the complete derive output for `input`.
pub(crate) fn generate(input: &DslInput) -> TokenStream {
    let krate = runtime_path(input.crate_path.as_ref());
    let object_impl = generate_object_impl(input, &krate);
    let accessors = generate_accessors(input, &krate);
    let trait_impls = generate_trait_impls(input, &krate);
    let deref_impls = generate_deref_impls(input);
    quote! {
        #object_impl
        #accessors
        #trait_impls
        #deref_impls
    }
}

/// Builds the schema expression evaluated once per type.
pub(crate) fn schema_expr(input: &DslInput, krate: &TokenStream) -> TokenStream {
    let owner = input.ident.to_string();
    let names = input.keys.iter().map(|key| key.name.as_str());
    let count = input.keys.len();
    let declared = quote! {
        {
            let names: [&'static str; #count] = [#(#names),*];
            names
        }
    };
    match &input.storage {
        Storage::Settings(_) => quote! {
            #krate::AttributeSchema::new(#owner, #declared)
        },
        Storage::Base { ty, .. } => quote! {
            <#ty as #krate::DslObject>::schema().extend(#owner, #declared)
        },
    }
}

fn generate_object_impl(input: &DslInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let schema = schema_expr(input, krate);
    let defaulted = &input.defaulted;
    let (init, settings, settings_mut) = match &input.storage {
        Storage::Settings(field) => (
            quote! { #field: settings },
            quote! { &self.#field },
            quote! { &mut self.#field },
        ),
        Storage::Base { field, ty } => (
            quote! { #field: <#ty as #krate::DslObject>::from_settings(settings) },
            quote! { #krate::DslObject::settings(&self.#field) },
            quote! { #krate::DslObject::settings_mut(&mut self.#field) },
        ),
    };
    quote! {
        impl #krate::DslObject for #ident {
            fn schema() -> &'static #krate::AttributeSchema {
                static SCHEMA: ::std::sync::OnceLock<#krate::AttributeSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| #schema)
            }

            fn from_settings(settings: #krate::Settings) -> Self {
                Self {
                    #init,
                    #( #defaulted: ::core::default::Default::default(), )*
                }
            }

            fn settings(&self) -> &#krate::Settings {
                #settings
            }

            fn settings_mut(&mut self) -> &mut #krate::Settings {
                #settings_mut
            }
        }
    }
}

/// Generates the setter and, when `with_getter` holds, the `get_` reader for
/// one key.
pub(crate) fn accessor_pair(
    key: &DeclaredKey,
    vis: &syn::Visibility,
    krate: &TokenStream,
    with_getter: bool,
) -> TokenStream {
    let setter = &key.ident;
    let name = key.name.as_str();
    let set_doc = format!(
        "Sets `{name}` unless `value` is null, returning the current value. \
         Pass `()` to read without writing."
    );
    let setter_fn = quote! {
        #[doc = #set_doc]
        #vis fn #setter(
            &mut self,
            value: impl ::core::convert::Into<#krate::__Value>,
        ) -> ::core::option::Option<&#krate::__Value> {
            #krate::DslObject::set(self, #name, value)
        }
    };
    if !with_getter {
        return setter_fn;
    }
    let getter = format_ident!("get_{}", key.name, span = key.ident.span());
    let get_doc = format!("Current value of `{name}`, if set.");
    quote! {
        #setter_fn

        #[doc = #get_doc]
        #[must_use]
        #vis fn #getter(&self) -> ::core::option::Option<&#krate::__Value> {
            #krate::DslObject::get(self, #name)
        }
    }
}

fn generate_accessors(input: &DslInput, krate: &TokenStream) -> TokenStream {
    if input.keys.is_empty() {
        return TokenStream::new();
    }
    let ident = &input.ident;
    // `keys(x, get_x)`: the setter `get_x` already owns that name, so `x` is
    // read through `x(())` or `get("x")`.
    let pairs = input.keys.iter().map(|key| {
        let getter = format!("get_{}", key.name);
        let taken = input.keys.iter().any(|other| other.name == getter);
        accessor_pair(key, &input.vis, krate, !taken)
    });
    quote! {
        impl #ident {
            #( #pairs )*
        }
    }
}

fn generate_trait_impls(input: &DslInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let owner = ident.to_string();
    quote! {
        impl ::core::default::Default for #ident {
            fn default() -> Self {
                <Self as #krate::DslObject>::from_settings(#krate::Settings::new())
            }
        }

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "<{} {}>", #owner, #krate::DslObject::settings(self))
            }
        }

        impl #krate::SettingsSource for #ident {
            fn to_settings(&self) -> #krate::Settings {
                #krate::DslObject::to_hash(self)
            }
        }
    }
}

fn generate_deref_impls(input: &DslInput) -> TokenStream {
    let Storage::Base { field, ty } = &input.storage else {
        return TokenStream::new();
    };
    let ident = &input.ident;
    quote! {
        impl ::core::ops::Deref for #ident {
            type Target = #ty;

            fn deref(&self) -> &Self::Target {
                &self.#field
            }
        }

        impl ::core::ops::DerefMut for #ident {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#field
            }
        }
    }
}
