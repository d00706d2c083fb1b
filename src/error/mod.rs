//! Error handling for form field extraction.

use std::error::Error as StdError;

/// Specialized error type for extracting and rendering form fields
///
/// Both extraction errors describe mistakes in how a record type was declared
/// or called, not problems with the data it holds.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// The value handed to the extractor is not a record
    #[error("invalid value of type `{type_name}`; only records are supported")]
    InvalidInput {
        /// Rust type name of the rejected value
        type_name: &'static str,
    },

    /// A metadata segment is not a single `key=value` pair
    #[error("malformed metadata segment `{segment}` in `{metadata}`; expected `key=value`")]
    MalformedMetadata {
        /// The offending `;`-delimited segment
        segment: String,
        /// The complete metadata string
        metadata: String,
    },

    /// A template failed while rendering one field
    #[error("failed to render field `{field}`: {source}")]
    Template {
        /// Name of the field being rendered
        field: String,
        /// Error reported by the template
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl FormError {
    /// Create an invalid input error for the given type name
    #[must_use]
    pub fn invalid_input(type_name: &'static str) -> Self {
        Self::InvalidInput { type_name }
    }

    /// Create a malformed metadata error
    pub fn malformed_metadata(segment: impl Into<String>, metadata: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            segment: segment.into(),
            metadata: metadata.into(),
        }
    }

    /// Create a template error for the named field
    pub fn template(
        field: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Template {
            field: field.into(),
            source: Box::new(source),
        }
    }
}

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormError>;
