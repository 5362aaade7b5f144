//! # huekey core
//!
//! Color attribute for a CMS field-modeling framework: every record stores a
//! hex color and a saturation, and records can be sorted by perceived color.
//!
//! ## Overview
//!
//! - **Sorting**: deterministic color-to-sort-key conversion and the stable
//!   ordering of record ids it drives ([`sorting`])
//! - **Codec**: serialization of the stored pair to and from the column
//!   ([`codec`])
//! - **Attribute**: the object the framework calls, wired to its model and
//!   column store through the traits in `huekey-contracts` ([`attribute`])
//! - **Settings**: per-attribute configuration ([`settings`])
//!
//! ## Examples
//!
//! ```
//! use huekey_core::sorting::order;
//! use huekey_model::{ColorValue, RecordId};
//!
//! let colors = vec![
//!     (RecordId(1), ColorValue::new("fafa05", "")),
//!     (RecordId(2), ColorValue::new("", "")),
//!     (RecordId(3), ColorValue::new("000000", "")),
//! ];
//!
//! let sorted = order(colors.iter().map(|(id, value)| (*id, value)), false);
//! assert_eq!(sorted, vec![RecordId(2), RecordId(3), RecordId(1)]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// The attribute object bound to its collaborators
pub mod attribute;
/// Stored-value codec
pub mod codec;
pub mod error;
/// Field declaration data for the form layer
pub mod field;
/// Per-attribute settings
pub mod settings;
/// Color sort keys and ordering
pub mod sorting;

pub use attribute::ColorAttribute;
pub use error::{ColorError, Result};
pub use field::{FieldDefinition, FieldOverrides};
pub use settings::ColorAttributeSettings;
pub use sorting::{ColorSortEngine, HexPolicy, derive_sort_value, order};
