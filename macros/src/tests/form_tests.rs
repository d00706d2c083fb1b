use darling::FromDeriveInput;
use syn::{DeriveInput, parse_quote};

use crate::form_impl::{FormReceiver, generate_form_impl};
use crate::utils;

fn receiver(input: DeriveInput) -> FormReceiver {
    FormReceiver::from_derive_input(&input).expect("valid Form input")
}

fn expand(input: DeriveInput) -> String {
    generate_form_impl(&receiver(input)).to_string()
}

#[test]
fn test_only_public_unskipped_fields_are_members() {
    let parsed = receiver(parse_quote! {
        struct Person {
            pub name: String,
            pub(crate) age: u32,
            secret: String,
            #[form(skip)]
            pub internal: u64,
        }
    });
    let darling::ast::Data::Struct(fields) = &parsed.data else {
        panic!("expected struct data");
    };

    let visible: Vec<_> = fields
        .iter()
        .filter(|field| utils::is_visible(field))
        .map(|field| field.ident.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(visible, ["name"]);
}

#[test]
fn test_declared_names() {
    let ident: syn::Ident = parse_quote!(street);
    assert_eq!(utils::declared_name(&ident, None), "street");
    assert_eq!(utils::declared_name(&ident, Some("Street")), "Street");

    let raw: syn::Ident = parse_quote!(r#type);
    assert_eq!(utils::declared_name(&raw, None), "type");
}

#[test]
fn test_expansion_lists_members_in_order() {
    let expanded = expand(parse_quote! {
        struct Signup {
            #[form(tags = "label=Full Name;name=full_name")]
            pub name: String,
            #[form(rename = "Email")]
            pub email: String,
            password_hash: String,
        }
    });

    let name = expanded.find("\"name\"").expect("name member");
    let email = expanded.find("\"Email\"").expect("renamed email member");
    assert!(name < email);
    assert!(expanded.contains("\"label=Full Name;name=full_name\""));
    assert!(!expanded.contains("password_hash"));
    assert!(expanded.contains(":: form_fields :: Record for Signup"));
    assert!(expanded.contains(":: form_fields :: Member for Signup"));
}

#[test]
fn test_generics_are_forwarded() {
    let expanded = expand(parse_quote! {
        struct Wrapper<T: Clone> where T: Default {
            pub inner: T,
        }
    });
    assert!(expanded.contains("impl < T : Clone > :: form_fields :: Record for Wrapper < T >"));
    assert!(expanded.contains("where T : Default"));
}

#[test]
fn test_generic_member_types_get_member_bounds() {
    let expanded = expand(parse_quote! {
        struct Pair<T, U> {
            pub first: T,
            pub rest: Option<Box<U>>,
            pub label: String,
            hidden: U,
        }
    });
    assert!(expanded.contains("T : :: form_fields :: Member"));
    assert!(expanded.contains("Option < Box < U > > : :: form_fields :: Member"));
    assert!(!expanded.contains("String : :: form_fields :: Member"));
    assert!(!expanded.contains("U : :: form_fields :: Member"));
}

#[test]
fn test_mentions_any() {
    let params: Vec<syn::Ident> = vec![parse_quote!(T)];
    assert!(utils::mentions_any(&parse_quote!(T), &params));
    assert!(utils::mentions_any(&parse_quote!(Vec<(u8, T)>), &params));
    assert!(!utils::mentions_any(&parse_quote!(Tx), &params));
    assert!(!utils::mentions_any(&parse_quote!(String), &[]));
}

#[test]
fn test_rejects_tuple_structs() {
    let input: DeriveInput = parse_quote! {
        struct Point(pub i32, pub i32);
    };
    assert!(FormReceiver::from_derive_input(&input).is_err());
}
