//! Products domain module.
//!
//! Inventory items audited by a warehouse revision, implemented purely as
//! deterministic domain logic (no storage, no network).

pub mod product;

pub use product::{
    Availability, MANUFACTURING_DATE_FORMAT, Product, parse_manufacturing_date,
};
