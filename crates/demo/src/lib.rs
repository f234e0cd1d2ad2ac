//! `stocktake-demo` — console walkthrough of the warehouse revision model.
//!
//! The library half exists so the script and the array benchmark can be driven
//! from tests and criterion with scripted input.

pub mod config;
pub mod script;
pub mod shelves;

pub use config::DemoConfig;
pub use shelves::{IterationTimings, Shelves, parse_dimensions};
