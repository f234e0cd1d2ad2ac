//! Tracing/logging setup shared by the stocktake binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, init};
