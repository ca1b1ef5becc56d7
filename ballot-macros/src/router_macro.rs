//! Route table macros.
//!
//! This module contains:
//! - `routes!` - Function-like macro producing a checked `[(&str, T); N]` array

use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::{
    Expr, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
};

/// One `"path" => handler` entry.
struct RouteEntry {
    path: LitStr,
    handler: Expr,
}

impl Parse for RouteEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;
        input.parse::<Token![=>]>()?;
        let handler: Expr = input.parse()?;
        Ok(RouteEntry { path, handler })
    }
}

struct RouteList {
    entries: Punctuated<RouteEntry, Token![,]>,
}

impl Parse for RouteList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(RouteList {
            entries: Punctuated::parse_terminated(input)?,
        })
    }
}

/// Checks a single path literal the way the runtime builders do.
fn check_path(lit: &LitStr) -> syn::Result<()> {
    let path = lit.value();
    if !path.starts_with('/') {
        return Err(syn::Error::new(
            lit.span(),
            format!("route path `{}` must start with `/`", path),
        ));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(syn::Error::new(
            lit.span(),
            format!("route path `{}` contains whitespace", path),
        ));
    }
    Ok(())
}

/// Implementation of the `routes!` macro.
pub fn routes_impl(input: TokenStream) -> TokenStream {
    let list = parse_macro_input!(input as RouteList);
    match expand_routes(&list) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Validate every entry and expand to the array literal.
///
/// A repeated path is reported at its second occurrence, with a note pointing
/// at the first.
fn expand_routes(list: &RouteList) -> syn::Result<proc_macro2::TokenStream> {
    let mut seen: HashMap<String, &LitStr> = HashMap::new();
    let mut errors: Option<syn::Error> = None;
    let mut push_error = |err: syn::Error| match errors.as_mut() {
        Some(existing) => existing.combine(err),
        None => errors = Some(err),
    };

    for entry in &list.entries {
        if let Err(err) = check_path(&entry.path) {
            push_error(err);
            continue;
        }
        let path = entry.path.value();
        if let Some(first) = seen.get(&path) {
            push_error(syn::Error::new(
                entry.path.span(),
                format!("route path `{}` is bound more than once", path),
            ));
            push_error(syn::Error::new(first.span(), "first bound here"));
        } else {
            seen.insert(path, &entry.path);
        }
    }

    if let Some(err) = errors {
        return Err(err);
    }

    let pairs = list.entries.iter().map(|entry| {
        let path = &entry.path;
        let handler = &entry.handler;
        quote! { (#path, #handler) }
    });

    Ok(quote! {
        [ #(#pairs),* ]
    })
}
