//! Built-in HTML input template.

use std::convert::Infallible;

use super::FieldTemplate;
use crate::schema::Field;

/// Escape text for use inside an HTML attribute or element
pub fn html_escape(s: impl AsRef<str>) -> String {
    s.as_ref()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders a field as a `<label>` followed by an `<input>`
#[derive(Debug, Clone, Default)]
pub struct InputTemplate {
    /// Optional `class` attribute put on every input
    pub class: Option<String>,
}

impl InputTemplate {
    /// Put a `class` attribute on every rendered input
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl FieldTemplate for InputTemplate {
    type Error = Infallible;

    fn render_field(&self, field: &Field) -> Result<String, Infallible> {
        let class = self
            .class
            .as_ref()
            .map(|class| format!(r#" class="{}""#, html_escape(class)))
            .unwrap_or_default();

        Ok(format!(
            r#"<label>{label}</label><input type="{input_type}" name="{name}" placeholder="{placeholder}" value="{value}"{class}>"#,
            label = html_escape(&field.label),
            input_type = html_escape(&field.input_type),
            name = html_escape(&field.name),
            placeholder = html_escape(&field.placeholder),
            value = html_escape(field.value.to_string()),
        ))
    }
}
