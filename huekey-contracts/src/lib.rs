//! Trait surfaces that describe how the color attribute talks to its host
//! framework.

pub mod host;
pub mod store;

/// Frequently used collaborator traits.
pub mod prelude {
    pub use super::host::{AttributeHost, StaticHost};
    pub use super::store::{RawColorRow, RawColumnStore, StoreError};
}
