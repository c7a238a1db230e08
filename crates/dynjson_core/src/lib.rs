//! Public library API for crash-free dynamic access to JSON documents.

/// Dynamic document nodes, coercion, field paths, and encoding.
pub mod doc;

pub use doc::{DynamicValue, Error, Kind, Result};
