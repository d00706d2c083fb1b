//! Form derive macro implementation
//!
//! This module turns a struct definition into `Record` and `Member`
//! implementations that list the struct's visible fields.

use darling::{FromDeriveInput, FromField, ast};
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::utils;

/// Receiver for the struct that derives `Form`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(form), supports(struct_named))]
pub struct FormReceiver {
    /// The struct identifier
    pub ident: syn::Ident,
    /// Generic parameters, forwarded to the generated impls
    pub generics: syn::Generics,
    /// The struct data with parsed fields
    pub data: ast::Data<(), FormFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(form))]
pub struct FormFieldReceiver {
    /// The field identifier
    pub ident: Option<syn::Ident>,
    /// The field type
    pub ty: syn::Type,
    /// The field visibility
    pub vis: syn::Visibility,
    /// Metadata string handed to the tag parser
    #[darling(default)]
    pub tags: Option<String>,
    /// Declared name overriding the identifier
    #[darling(default)]
    pub rename: Option<String>,
    /// Leave the field out of the form
    #[darling(default)]
    pub skip: bool,
}

/// Process the Form derive macro
pub fn process_derive_form(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Parse with darling
    let receiver = match FormReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    TokenStream::from(generate_form_impl(&receiver))
}

/// Generate the `Record` and `Member` implementations
pub fn generate_form_impl(receiver: &FormReceiver) -> proc_macro2::TokenStream {
    let struct_name = &receiver.ident;

    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    // Visible members whose type mentions a type parameter must be members too
    let mut generics = receiver.generics.clone();
    let type_params: Vec<syn::Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
    let member_bounds: Vec<syn::WherePredicate> = fields
        .iter()
        .filter(|field| utils::is_visible(field))
        .filter(|field| utils::mentions_any(&field.ty, &type_params))
        .map(|field| {
            let ty = &field.ty;
            syn::parse_quote! { #ty: ::form_fields::Member }
        })
        .collect();
    generics.make_where_clause().predicates.extend(member_bounds);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let members = fields
        .iter()
        .filter(|field| utils::is_visible(field))
        .filter_map(|field| {
            let field_ident = field.ident.as_ref()?;
            let name = utils::declared_name(field_ident, field.rename.as_deref());
            let metadata = utils::metadata_tokens(field.tags.as_deref());

            Some(quote! {
                ::form_fields::MemberInfo::new(#name, #metadata, &self.#field_ident)
            })
        });

    quote! {
        impl #impl_generics ::form_fields::Record for #struct_name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                ::std::stringify!(#struct_name)
            }

            fn members(&self) -> ::std::vec::Vec<::form_fields::MemberInfo<'_>> {
                ::std::vec![#(#members),*]
            }
        }

        impl #impl_generics ::form_fields::Member for #struct_name #ty_generics #where_clause {
            fn kind(&self) -> ::form_fields::MemberKind<'_> {
                ::form_fields::MemberKind::Record(self)
            }
        }
    }
}
