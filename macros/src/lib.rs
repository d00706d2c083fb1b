//! Procedural macros for the form-fields crate
//!
//! This crate provides the `Form` derive, which generates the member
//! descriptors the field extractor walks in place of runtime reflection.

use proc_macro::TokenStream;

// Import modules
mod form_impl;
mod utils;

// Tests
#[cfg(test)]
mod tests;

/// Derive macro for describing a struct as a form record
///
/// Every `pub` field becomes a member, in declaration order. Private fields
/// and fields marked `#[form(skip)]` are left out. Member types must
/// implement `form_fields::Member`: strings, numbers, booleans, `char`,
/// `chrono::NaiveDate`, other `Form` structs, and `Option`, `Box`, `Rc`,
/// `Arc` or `&` of those.
///
/// On generic structs, every listed member whose type mentions a type
/// parameter gets a `Member` bound on the generated impls, so
/// `struct Labelled<T> { pub value: T }` implements `Record` exactly when
/// `T: Member`. Skipped and private members add no bounds.
///
/// # Attributes
/// * `#[form(tags = "label=Full Name;name=full_name")]` - metadata string
///   handed to the tag parser
/// * `#[form(rename = "FullName")]` - declared name used instead of the
///   field identifier
/// * `#[form(skip)]` - never list this field
///
/// # Example
///
/// ```ignore
/// #[derive(Default, Form)]
/// struct Signup {
///     #[form(tags = "label=Full Name;name=full_name")]
///     pub name: String,
///
///     pub address: Option<Address>,
///
///     password_hash: String,
/// }
/// ```
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    form_impl::process_derive_form(input)
}
