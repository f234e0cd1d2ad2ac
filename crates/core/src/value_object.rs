//! Value object trait: equality by value, not identity.
//!
//! Records in the audit model are compared by their attribute values. Two
//! separately constructed values with the same attributes compare equal, even
//! though they live at different addresses (`std::ptr::eq` tells them apart).

/// Marker trait for value-compared records.
///
/// ## Equality subsets
///
/// Equality does not have to cover every field. A type may document a narrower
/// key (a person is identified by name only, a product ignores its stock
/// quantity). Whatever the key, `Hash` must agree with `PartialEq`: equal values
/// hash equally.
///
/// ## Absent operands
///
/// Comparisons that may involve a missing value are written as
/// `Option<&T> == Option<&T>`. Two `None`s compare equal; `None` never equals
/// `Some(_)`. There is no second equality form.
///
/// ```ignore
/// let a = Revision::new("Revision 1", at, 1)?;
/// let b = Revision::new("Revision 1", at, 1)?;
/// assert_eq!(a, b);
/// assert!(!std::ptr::eq(&a, &b));
/// assert_eq!(None::<&Revision>, None::<&Revision>);
/// assert_ne!(Some(&a), None);
/// ```
pub trait ValueObject: Clone + PartialEq + Eq + core::hash::Hash + core::fmt::Debug {}
