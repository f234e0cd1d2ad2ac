//! Revisions domain module.
//!
//! Audit records: a plain [`Revision`] and a [`WarehouseRevision`] that adds an
//! owned inventory and the people responsible for it.

pub mod revision;
pub mod warehouse;

pub use revision::{REVISION_DATE_FORMAT, Revision};
pub use warehouse::WarehouseRevision;
