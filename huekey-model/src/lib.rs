//! Core data model definitions shared across huekey crates.
#![allow(missing_docs)]

pub mod color_value;
pub mod direction;
pub mod error;
pub mod record_id;

// Intentionally curated re-exports for downstream consumers.
pub use color_value::ColorValue;
pub use direction::SortDirection;
pub use error::{ModelError, Result as ModelResult};
pub use record_id::RecordId;
