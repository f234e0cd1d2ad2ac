//! `stocktake-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product, party
//! and revision crates (no infrastructure concerns).

pub mod error;
pub mod input;
pub mod name_and_copy;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use input::{LineSource, PromptReader, prompt_until};
pub use name_and_copy::NameAndCopy;
pub use value_object::ValueObject;
