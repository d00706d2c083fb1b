//! Turn any struct into an ordered list of HTML form field descriptors.
//!
//! Derive [`Form`] on a struct and pass it to [`extract_fields`]. Public
//! members become fields in declaration order, nested records are flattened
//! into dotted names, and absent `Option` members still yield their fields
//! with zero values.

// Lets the derive macro's `::form_fields` paths resolve inside this crate.
extern crate self as form_fields;

pub mod config;
pub mod error;
pub mod extract;
pub mod render;
pub mod schema;
pub mod tags;

// Re-export the most common types for easier use
pub use config::FormConfig;
pub use error::{FormError, Result};
pub use extract::{extract_fields, extract_with};
pub use render::{FieldTemplate, InputTemplate, render, render_fields};
pub use schema::{Field, FieldValue, Member, MemberInfo, MemberKind, Record};
pub use tags::{TagMap, parse_tags};

// Procedural macros
pub use form_fields_macros::Form;
