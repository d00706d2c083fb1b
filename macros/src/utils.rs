//! Utility functions for procedural macros
//!
//! Visibility checks and name handling shared by the derive implementation.

use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::Visibility;

use crate::form_impl::FormFieldReceiver;

/// Check if a field is listed as a form member
///
/// Only plain `pub` fields are visible; restricted visibility such as
/// `pub(crate)` counts as private.
pub fn is_visible(field: &FormFieldReceiver) -> bool {
    !field.skip && matches!(field.vis, Visibility::Public(_))
}

/// The member name reported for a field
pub fn declared_name(ident: &syn::Ident, rename: Option<&str>) -> String {
    rename.map_or_else(|| unraw(ident), str::to_string)
}

/// Field identifier without a raw `r#` prefix
fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

/// Tokens for the `Option<&'static str>` metadata of a field
pub fn metadata_tokens(tags: Option<&str>) -> TokenStream {
    match tags {
        Some(tags) => quote! { ::std::option::Option::Some(#tags) },
        None => quote! { ::std::option::Option::None },
    }
}

/// Check if a type mentions any of the given type parameters
pub fn mentions_any(ty: &syn::Type, params: &[syn::Ident]) -> bool {
    !params.is_empty() && tokens_mention(ty.to_token_stream(), params)
}

fn tokens_mention(tokens: TokenStream, params: &[syn::Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => params.contains(&ident),
        TokenTree::Group(group) => tokens_mention(group.stream(), params),
        _ => false,
    })
}
