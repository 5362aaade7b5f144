//! Sorting module for color attribute values
//!
//! This module provides:
//! - Core traits for sort keys and sort strategies
//! - Color-to-sort-value derivation and the composite sort key
//! - The engine ordering record ids by color
//! - A strategy sorting decoded records in place

pub mod engine;
pub mod keys;
pub mod strategy;
pub mod traits;
pub mod utils;

#[cfg(test)]
mod tests;

pub use engine::*;
pub use keys::*;
pub use strategy::*;
pub use traits::*;
