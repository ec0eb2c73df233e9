//! Parsing utilities for the `DslObject` derive macro.

use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream, Parser};
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Token, Type, Visibility};

/// Everything the generator needs to know about the derived struct.
pub(crate) struct DslInput {
    pub ident: Ident,
    pub vis: Visibility,
    pub keys: Vec<DeclaredKey>,
    pub storage: Storage,
    pub defaulted: Vec<Ident>,
    pub crate_path: Option<syn::Path>,
}

/// One declared attribute name and the accessor identifier it produces.
pub(crate) struct DeclaredKey {
    pub name: String,
    pub ident: Ident,
}

/// Where the derived type keeps its settings.
pub(crate) enum Storage {
    /// A `Settings` field owned directly.
    Settings(Ident),
    /// A parent DSL object whose settings and schema are inherited.
    Base { field: Ident, ty: Type },
}

#[derive(Default)]
struct StructAttrs {
    keys: Vec<DeclaredKey>,
    crate_path: Option<syn::Path>,
}

#[derive(Clone, Copy, Default, PartialEq, Eq)]
enum FieldRole {
    #[default]
    Plain,
    Settings,
    Base,
}

/// A key as written inside `keys(...)`: either an identifier or a string.
enum KeyToken {
    Ident(Ident),
    Str(LitStr),
}

impl Parse for KeyToken {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(LitStr) {
            input.parse().map(Self::Str)
        } else {
            input.call(Ident::parse_any).map(Self::Ident)
        }
    }
}

/// Canonical spelling of a key: trimmed, with one leading `:` removed.
pub(crate) fn canonical(name: &str) -> &str {
    let trimmed = name.trim();
    trimmed.strip_prefix(':').unwrap_or(trimmed).trim_start()
}

/// Builds the setter identifier for a canonical key name.
///
/// Keywords such as `type` become raw identifiers (`r#type`). Path keywords
/// and `_` cannot be raw and are rejected.
fn accessor_ident(name: &str, span: proc_macro2::Span) -> Option<Ident> {
    if matches!(name, "self" | "Self" | "super" | "crate" | "_") {
        return None;
    }
    if let Ok(mut ident) = syn::parse_str::<Ident>(name) {
        ident.set_span(span);
        return Some(ident);
    }
    Ident::parse_any
        .parse_str(name)
        .ok()
        .map(|_| Ident::new_raw(name, span))
}

impl KeyToken {
    fn into_declared(self) -> syn::Result<DeclaredKey> {
        let (name, span) = match self {
            Self::Ident(ident) => (ident.unraw().to_string(), ident.span()),
            Self::Str(lit) => (canonical(&lit.value()).to_owned(), lit.span()),
        };
        let Some(ident) = accessor_ident(&name, span) else {
            return Err(syn::Error::new(
                span,
                format!("`{name}` is not a valid attribute name"),
            ));
        };
        Ok(DeclaredKey { name, ident })
    }
}

/// Iterate all `#[dsl(...)]` attributes once and apply a callback.
fn parse_dsl_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("dsl")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn push_key(keys: &mut Vec<DeclaredKey>, key: DeclaredKey) {
    if !keys.iter().any(|existing| existing.name == key.name) {
        keys.push(key);
    }
}

/// Extracts `#[dsl(...)]` metadata applied to the struct.
///
/// `keys(...)` may appear several times; declarations accumulate and
/// duplicates collapse onto their first spelling.
fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_dsl_attrs(attrs, |meta| {
        if meta.path.is_ident("keys") {
            let content;
            syn::parenthesized!(content in meta.input);
            let tokens = Punctuated::<KeyToken, Token![,]>::parse_terminated(&content)?;
            for token in tokens {
                push_key(&mut out.keys, token.into_declared()?);
            }
            Ok(())
        } else if meta.path.is_ident("crate") {
            let lit: LitStr = meta.value()?.parse()?;
            let path: syn::Path =
                syn::parse_str(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(meta.error("unsupported dsl option; expected `keys(...)` or `crate = \"...\"`"))
        }
    })?;
    Ok(out)
}

fn parse_field_role(attrs: &[Attribute]) -> syn::Result<FieldRole> {
    let mut role = FieldRole::Plain;
    parse_dsl_attrs(attrs, |meta| {
        let next = if meta.path.is_ident("settings") {
            FieldRole::Settings
        } else if meta.path.is_ident("base") {
            FieldRole::Base
        } else {
            return Err(meta.error("unsupported dsl field option; expected `settings` or `base`"));
        };
        if role != FieldRole::Plain && role != next {
            return Err(meta.error("a field cannot be both `settings` and `base`"));
        }
        role = next;
        Ok(())
    })?;
    Ok(role)
}

/// Picks the storage field among the struct's named fields.
///
/// An explicitly marked field wins; otherwise a field named `settings` is
/// used. Every other field is filled with `Default::default()` on
/// construction.
fn select_storage(
    ident: &Ident,
    fields: &[(syn::Field, FieldRole)],
) -> syn::Result<(Storage, Vec<Ident>)> {
    let marked: Vec<_> = fields
        .iter()
        .filter(|(_, role)| *role != FieldRole::Plain)
        .collect();
    let chosen = match marked.as_slice() {
        [] => fields
            .iter()
            .find(|(field, _)| field.ident.as_ref().is_some_and(|i| i == "settings"))
            .map(|(field, _)| (field, FieldRole::Settings)),
        [(field, role)] => Some((field, *role)),
        [_, (second, _), ..] => {
            return Err(syn::Error::new_spanned(
                &second.ident,
                "only one field may be marked `#[dsl(settings)]` or `#[dsl(base)]`",
            ));
        }
    };
    let Some((field, role)) = chosen else {
        return Err(syn::Error::new_spanned(
            ident,
            "DslObject needs a `settings: Settings` field, a `#[dsl(settings)]` field or a `#[dsl(base)]` field",
        ));
    };
    let Some(field_ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "DslObject requires named fields"));
    };
    let storage = if role == FieldRole::Base {
        Storage::Base {
            field: field_ident.clone(),
            ty: field.ty.clone(),
        }
    } else {
        Storage::Settings(field_ident.clone())
    };
    let defaulted = fields
        .iter()
        .filter_map(|(f, _)| f.ident.clone())
        .filter(|i| *i != field_ident)
        .collect();
    Ok((storage, defaulted))
}

/// Gathers information from the user-provided struct.
///
/// Invalid input is rejected here so expansion can fail fast with a span
/// pointing at the offending tokens.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<DslInput> {
    let ident = input.ident.clone();
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "DslObject cannot be derived for generic structs",
        ));
    }
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().cloned().collect::<Vec<_>>(),
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "DslObject requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "DslObject can only be derived for structs",
            ));
        }
    };
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let role = parse_field_role(&field.attrs)?;
        fields.push((field, role));
    }
    let (storage, defaulted) = select_storage(&ident, &fields)?;
    Ok(DslInput {
        ident,
        vis: input.vis.clone(),
        keys: struct_attrs.keys,
        storage,
        defaulted,
        crate_path: struct_attrs.crate_path,
    })
}
