//! Data model shared by the extractor and the tag parser
//!
//! Field descriptors, the values they carry, and the traits through which
//! records describe their members.

pub mod field;
pub mod record;
pub mod value;

pub use field::{Field, OVERRIDE_KEYS};
pub use record::{Member, MemberInfo, MemberKind, Record};
pub use value::FieldValue;
