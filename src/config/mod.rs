//! Configuration for field extraction.

use serde::{Deserialize, Serialize};

/// Input type given to every leaf field unless a tag overrides it
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Separator placed between member names in nested field names
pub const DEFAULT_SEPARATOR: &str = ".";

/// Configuration for the field extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Widget type assigned to leaf fields
    pub default_input_type: String,
    /// Joins the enclosing member names of a nested field
    pub separator: String,
    /// Parse each member's metadata and apply the presentation overrides
    pub apply_tags: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_input_type: DEFAULT_INPUT_TYPE.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            apply_tags: false,
        }
    }
}

impl FormConfig {
    /// Set the widget type assigned to leaf fields
    #[must_use]
    pub fn with_default_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.default_input_type = input_type.into();
        self
    }

    /// Set the separator used for nested field names
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enable or disable applying member metadata during extraction
    #[must_use]
    pub fn with_apply_tags(mut self, apply_tags: bool) -> Self {
        self.apply_tags = apply_tags;
        self
    }
}
