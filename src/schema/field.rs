//! Field descriptors produced by the extractor
//!
//! A [`Field`] is everything a template needs to render one HTML input.

use serde::Serialize;

use super::value::FieldValue;
use crate::config::DEFAULT_INPUT_TYPE;
use crate::tags::TagMap;

/// Tag keys that override a field attribute of the same name
pub const OVERRIDE_KEYS: [&str; 4] = ["label", "name", "type", "placeholder"];

/// Describes a single renderable form field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Display text
    pub label: String,
    /// Value of the input's `name` attribute; dotted for nested members
    pub name: String,
    /// Widget type, such as `text` or `email`
    #[serde(rename = "type")]
    pub input_type: String,
    /// Placeholder text
    pub placeholder: String,
    /// Current value of the member
    pub value: FieldValue,
    /// Raw metadata string declared on the member
    #[serde(skip)]
    pub metadata: Option<&'static str>,
}

impl Field {
    /// Create a leaf field whose label, name and placeholder are all the
    /// member's declared name
    pub fn new(member: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let member = member.into();
        Self {
            label: member.clone(),
            name: member.clone(),
            input_type: DEFAULT_INPUT_TYPE.to_string(),
            placeholder: member,
            value: value.into(),
            metadata: None,
        }
    }

    /// Set the widget type
    #[must_use]
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Attach the member's raw metadata string
    #[must_use]
    pub fn with_metadata(mut self, metadata: Option<&'static str>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Override `label`, `name`, `type` and `placeholder` from parsed tags
    ///
    /// Keys other than [`OVERRIDE_KEYS`] are left for the caller.
    pub fn apply_tags(&mut self, tags: &TagMap) {
        let [label, name, input_type, placeholder] = OVERRIDE_KEYS;
        for (key, slot) in [
            (label, &mut self.label),
            (name, &mut self.name),
            (input_type, &mut self.input_type),
            (placeholder, &mut self.placeholder),
        ] {
            if let Some(value) = tags.get(key) {
                slot.clone_from(value);
            }
        }
    }
}
