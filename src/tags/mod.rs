//! Parsing of per-member metadata strings
//!
//! A metadata string is a `;`-separated list of `key=value` pairs, for
//! example `label=Full Name;name=full_name`. Nothing is trimmed or unescaped,
//! so values may contain spaces.

use rustc_hash::FxHashMap;

use crate::error::{FormError, Result};

/// Presentation overrides keyed by tag name
pub type TagMap = FxHashMap<String, String>;

/// Parse a member's metadata string into a [`TagMap`]
///
/// Absent or empty metadata yields an empty map. Later duplicates of a key
/// replace earlier ones.
///
/// # Errors
/// Returns [`FormError::MalformedMetadata`] when a segment does not contain
/// exactly one `=`.
pub fn parse_tags(metadata: Option<&str>) -> Result<TagMap> {
    let mut tags = TagMap::default();
    let Some(metadata) = metadata.filter(|m| !m.is_empty()) else {
        return Ok(tags);
    };

    for segment in metadata.split(';') {
        let mut parts = segment.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                tags.insert(key.to_string(), value.to_string());
            }
            _ => return Err(FormError::malformed_metadata(segment, metadata)),
        }
    }

    Ok(tags)
}
