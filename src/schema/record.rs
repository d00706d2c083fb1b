//! Type descriptors for records and their members
//!
//! The extractor never inspects Rust types directly. Every struct deriving
//! [`Form`](crate::Form) implements [`Record`], which lists its visible
//! members in declaration order, and [`Member`], which marks it as a nested
//! record. Leaf types (strings, numbers, booleans, dates) implement
//! [`Member`] here and report their current value.

use std::rc::Rc;
use std::sync::Arc;

use chrono::NaiveDate;

use super::value::FieldValue;

/// A struct whose members can be enumerated as form fields
pub trait Record {
    /// Name of the Rust type, used in log output
    fn type_name(&self) -> &'static str;

    /// Visible members in declaration order
    fn members(&self) -> Vec<MemberInfo<'_>>;
}

/// One visible member of a record
#[derive(Clone, Copy)]
pub struct MemberInfo<'a> {
    /// Declared name of the member
    pub name: &'static str,
    /// Raw metadata string declared on the member
    pub metadata: Option<&'static str>,
    /// The member's current value
    pub value: &'a dyn Member,
}

impl<'a> MemberInfo<'a> {
    /// Describe a member
    #[must_use]
    pub fn new(name: &'static str, metadata: Option<&'static str>, value: &'a dyn Member) -> Self {
        Self {
            name,
            metadata,
            value,
        }
    }
}

impl std::fmt::Debug for MemberInfo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberInfo")
            .field("name", &self.name)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// What a member resolves to once references are followed
pub enum MemberKind<'a> {
    /// A value that becomes exactly one field
    Leaf(FieldValue),
    /// A nested record whose members are flattened into the parent
    Record(&'a dyn Record),
    /// Zero value standing in for an absent reference; resolved again
    Zero(Box<dyn Member>),
}

/// A value that can appear as a record member
///
/// `Option<T>` resolves to `T`, substituting `T::default()` when it holds
/// nothing, so an absent reference still yields every field of its type.
/// `Box`, `Rc`, `Arc` and `&` are always present and resolve to their
/// referent.
pub trait Member {
    /// Resolve this value, following references
    fn kind(&self) -> MemberKind<'_>;
}

impl<T: Member + Default + 'static> Member for Option<T> {
    fn kind(&self) -> MemberKind<'_> {
        match self {
            Some(value) => value.kind(),
            None => MemberKind::Zero(Box::new(T::default())),
        }
    }
}

macro_rules! impl_reference_member {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Member + ?Sized> Member for $ptr<T> {
                fn kind(&self) -> MemberKind<'_> {
                    (**self).kind()
                }
            }
        )*
    };
}

impl_reference_member!(Box, Rc, Arc);

impl<T: Member + ?Sized> Member for &T {
    fn kind(&self) -> MemberKind<'_> {
        (**self).kind()
    }
}

impl Member for str {
    fn kind(&self) -> MemberKind<'_> {
        MemberKind::Leaf(FieldValue::from(self))
    }
}

macro_rules! impl_leaf_member {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Member for $ty {
                fn kind(&self) -> MemberKind<'_> {
                    MemberKind::Leaf(FieldValue::from(self.clone()))
                }
            }
        )*
    };
}

impl_leaf_member!(
    String, bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, NaiveDate,
);
