//! Shared fixtures for the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use form_fields::{Field, Form};

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default, Form)]
pub struct Person {
    #[form(rename = "Name")]
    pub name: String,
    #[form(rename = "Age")]
    pub age: i32,
}

#[derive(Debug, Default, Clone, Form)]
pub struct Address {
    #[form(rename = "Street")]
    pub street: String,
    #[form(rename = "City")]
    pub city: String,
}

#[derive(Debug, Default, Form)]
pub struct Contact {
    #[form(rename = "Email", tags = "label=Email Address;type=email")]
    pub email: String,
    #[form(rename = "Address")]
    pub address: Option<Address>,
    #[form(rename = "Joined")]
    pub joined: NaiveDate,
}

#[derive(Debug, Default, Form)]
pub struct C {
    #[form(rename = "C1")]
    pub c1: String,
    #[form(rename = "C2")]
    pub c2: u64,
}

#[derive(Debug, Default, Form)]
pub struct B {
    #[form(rename = "B1")]
    pub b1: bool,
    #[form(rename = "C")]
    pub c: Option<Box<C>>,
}

#[derive(Debug, Default, Form)]
pub struct A {
    #[form(rename = "B")]
    pub b: B,
    #[form(rename = "A1")]
    pub a1: f64,
}

/// Field names in order
pub fn names(fields: &[Field]) -> Vec<&str> {
    fields.iter().map(|f| f.name.as_str()).collect()
}
