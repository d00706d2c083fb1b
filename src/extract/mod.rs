//! Field extraction
//!
//! Walks a record's members in declaration order and produces one [`Field`]
//! per leaf. Nested records are flattened in place: their fields are
//! inserted where the nesting member was declared, with the member's name
//! prefixed onto each field name (`Address.Street`). Absent `Option`
//! members resolve to the zero value of their type, so every field is still
//! listed.

use log::{debug, trace};

use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::schema::{Field, Member, MemberInfo, MemberKind, Record};
use crate::tags::{TagMap, parse_tags};

/// Extract the form fields of a record using the default configuration
///
/// # Errors
/// Returns [`FormError::InvalidInput`] if `value` does not resolve to a
/// record.
///
/// # Example
/// ```
/// use form_fields::{Form, extract_fields};
///
/// #[derive(Form)]
/// struct Person {
///     #[form(rename = "Name")]
///     pub name: String,
///     #[form(rename = "Age")]
///     pub age: u32,
/// }
///
/// let fields = extract_fields(&Person { name: "stanny".into(), age: 34 }).unwrap();
/// assert_eq!(fields[0].name, "Name");
/// assert_eq!(fields[1].value.to_string(), "34");
/// ```
pub fn extract_fields<T: Member + ?Sized>(value: &T) -> Result<Vec<Field>> {
    extract_with(value, &FormConfig::default())
}

/// Extract the form fields of a record with an explicit configuration
///
/// # Errors
/// Returns [`FormError::InvalidInput`] if `value` does not resolve to a
/// record, and [`FormError::MalformedMetadata`] if tags are applied and a
/// member's metadata cannot be parsed. No fields are returned on error.
pub fn extract_with<T: Member + ?Sized>(value: &T, config: &FormConfig) -> Result<Vec<Field>> {
    let mut fields = Vec::new();
    Extractor { config }.root(value.kind(), std::any::type_name::<T>(), &mut fields)?;
    Ok(fields)
}

struct Extractor<'c> {
    config: &'c FormConfig,
}

impl Extractor<'_> {
    fn root(&self, kind: MemberKind<'_>, type_name: &'static str, fields: &mut Vec<Field>) -> Result<()> {
        match kind {
            MemberKind::Record(record) => {
                self.walk(record, fields)?;
                debug!(
                    "Extracted {} fields from {}",
                    fields.len(),
                    record.type_name()
                );
                Ok(())
            }
            MemberKind::Zero(zero) => self.root(zero.kind(), type_name, fields),
            MemberKind::Leaf(_) => Err(FormError::invalid_input(type_name)),
        }
    }

    fn walk(&self, record: &dyn Record, fields: &mut Vec<Field>) -> Result<()> {
        for member in record.members() {
            let tags = self.tags_for(member.metadata)?;
            self.member(record, &member, member.value.kind(), &tags, fields)?;
        }
        Ok(())
    }

    fn member(
        &self,
        parent: &dyn Record,
        member: &MemberInfo<'_>,
        kind: MemberKind<'_>,
        tags: &TagMap,
        fields: &mut Vec<Field>,
    ) -> Result<()> {
        match kind {
            MemberKind::Zero(zero) => {
                trace!(
                    "{}.{} is absent, using its zero value",
                    parent.type_name(),
                    member.name
                );
                self.member(parent, member, zero.kind(), tags, fields)?;
            }
            MemberKind::Record(nested) => {
                trace!(
                    "Descending into {}.{} ({})",
                    parent.type_name(),
                    member.name,
                    nested.type_name()
                );
                let prefix = tags.get("name").map_or(member.name, String::as_str);
                let start = fields.len();
                self.walk(nested, fields)?;
                for field in &mut fields[start..] {
                    field.name = format!("{prefix}{}{}", self.config.separator, field.name);
                }
            }
            MemberKind::Leaf(value) => {
                trace!(
                    "Reading {}.{} as {}",
                    parent.type_name(),
                    member.name,
                    value.kind_name()
                );
                let mut field = Field::new(member.name, value)
                    .with_input_type(self.config.default_input_type.as_str())
                    .with_metadata(member.metadata);
                field.apply_tags(tags);
                fields.push(field);
            }
        }
        Ok(())
    }

    fn tags_for(&self, metadata: Option<&str>) -> Result<TagMap> {
        if self.config.apply_tags {
            parse_tags(metadata)
        } else {
            Ok(TagMap::default())
        }
    }
}
