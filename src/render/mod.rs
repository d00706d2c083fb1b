//! Rendering fields into HTML
//!
//! Each field is rendered by a [`FieldTemplate`] and the fragments are
//! concatenated in field order. The first template failure aborts rendering;
//! no partial output is returned.

mod html;

pub use html::{InputTemplate, html_escape};

use std::error::Error as StdError;

use log::warn;

use crate::error::{FormError, Result};
use crate::extract::extract_fields;
use crate::schema::{Field, Member};

/// Renders one field into a markup fragment
pub trait FieldTemplate {
    /// Error reported when a field cannot be rendered
    type Error: StdError + Send + Sync + 'static;

    /// Render a single field
    fn render_field(&self, field: &Field) -> std::result::Result<String, Self::Error>;
}

impl<F, E> FieldTemplate for F
where
    F: Fn(&Field) -> std::result::Result<String, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn render_field(&self, field: &Field) -> std::result::Result<String, E> {
        self(field)
    }
}

/// Extract the fields of a record and render them with `template`
///
/// # Errors
/// Returns the extraction error, or [`FormError::Template`] for the first
/// field the template fails on.
pub fn render<T, M>(template: &T, value: &M) -> Result<String>
where
    T: FieldTemplate + ?Sized,
    M: Member + ?Sized,
{
    render_fields(template, &extract_fields(value)?)
}

/// Render already extracted fields with `template`
///
/// # Errors
/// Returns [`FormError::Template`] for the first field the template fails on.
pub fn render_fields<T>(template: &T, fields: &[Field]) -> Result<String>
where
    T: FieldTemplate + ?Sized,
{
    fields
        .iter()
        .map(|field| {
            template.render_field(field).map_err(|err| {
                warn!("Template failed on field {}: {err}", field.name);
                FormError::template(field.name.as_str(), err)
            })
        })
        .collect()
}
