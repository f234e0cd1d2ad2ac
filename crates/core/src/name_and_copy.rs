//! Name + deep-copy capability shared by every record in the audit model.

use std::borrow::Cow;

/// A record that exposes a human-readable name and can produce an independent
/// copy of itself.
///
/// Each implementing type has exactly one meaning for `name`; there is no
/// separate "base" name hidden behind a derived one. Types that store the name
/// as a single field hand out a borrow, composed names are built on demand.
///
/// `deep_copy` must return a value that shares no mutable state with `self`:
/// mutating either side afterwards is never observable through the other.
pub trait NameAndCopy: Sized {
    /// The canonical name of this record.
    fn name(&self) -> Cow<'_, str>;

    /// Replace the name. Types whose name is composed of several fields may
    /// ignore input they cannot split meaningfully.
    fn set_name(&mut self, name: &str);

    /// Produce an independent copy of the full value graph.
    fn deep_copy(&self) -> Self;
}
