//! Tests for rendering extracted fields into HTML

mod utils;

use form_fields::{Field, Form, FormError, InputTemplate, render, render_fields};
use utils::{Address, Contact, Person, init_logging};

#[test]
fn test_render_with_input_template() {
    init_logging();
    let person = Person {
        name: "stanny".to_string(),
        age: 34,
    };

    let html = render(&InputTemplate::default(), &person).unwrap();

    assert_eq!(
        html,
        concat!(
            r#"<label>Name</label><input type="text" name="Name" placeholder="Name" value="stanny">"#,
            r#"<label>Age</label><input type="text" name="Age" placeholder="Age" value="34">"#,
        )
    );
}

#[test]
fn test_render_keeps_f32_precision() {
    #[derive(Form)]
    struct Price {
        pub amount: f32,
    }

    let html = render(&InputTemplate::default(), &Price { amount: 0.1 }).unwrap();

    assert_eq!(
        html,
        r#"<label>amount</label><input type="text" name="amount" placeholder="amount" value="0.1">"#
    );
}

#[test]
fn test_render_escapes_values() {
    let contact = Contact {
        address: Some(Address {
            street: "<script>alert('x')</script>".to_string(),
            city: "Tom & Jerry".to_string(),
        }),
        ..Contact::default()
    };

    let html = render(&InputTemplate::default(), &contact).unwrap();

    assert!(html.contains(r#"value="&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;""#));
    assert!(html.contains(r#"value="Tom &amp; Jerry""#));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_render_with_closure_template() {
    let template = |field: &Field| -> Result<String, std::fmt::Error> {
        Ok(format!("<{}>", field.name))
    };

    let html = render(&template, &Contact::default()).unwrap();
    assert_eq!(html, "<Email><Address.Street><Address.City><Joined>");
}

#[test]
fn test_render_fails_fast_without_partial_output() {
    let template = |field: &Field| {
        if field.name.starts_with("Address.") {
            Err(std::io::Error::other("unsupported field"))
        } else {
            Ok(field.name.clone())
        }
    };

    let err = render(&template, &Contact::default()).unwrap_err();
    match err {
        FormError::Template { field, .. } => assert_eq!(field, "Address.Street"),
        other => panic!("expected template error, got {other}"),
    }
}

#[test]
fn test_render_propagates_extraction_errors() {
    let err = render(&InputTemplate::default(), &42_i32).unwrap_err();
    assert!(matches!(err, FormError::InvalidInput { .. }));
}

#[test]
fn test_render_fields_uses_customized_fields() {
    let fields = vec![Field::new("Email", "a@b.c").with_input_type("email")];
    let html = render_fields(&InputTemplate::default().with_class("wide"), &fields).unwrap();
    assert_eq!(
        html,
        r#"<label>Email</label><input type="email" name="Email" placeholder="Email" value="a@b.c" class="wide">"#
    );
}
