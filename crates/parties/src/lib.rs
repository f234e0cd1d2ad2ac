//! Parties domain module.
//!
//! People responsible for a warehouse revision.

pub mod person;

pub use person::Person;
