//! Core traits for sortable values
//!
//! Keys are extracted once per item and compared byte-wise; strategies own
//! the extraction and apply the resulting permutation.

/// Keys that can be compared for sorting
///
/// All sort keys must be comparable and have a representation for an item
/// with no usable data.
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Create a key representing missing/null data
    fn missing() -> Self;

    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;

    /// Compare two keys in the requested direction
    #[inline]
    fn compare_with_order(&self, other: &Self, reverse: bool) -> std::cmp::Ordering {
        if reverse {
            other.cmp(self)
        } else {
            self.cmp(other)
        }
    }
}

/// A sorting strategy applied to a slice in place
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Estimate the computational cost of sorting `len` items
    fn cost_estimate(&self, len: usize) -> SortCost;
}

/// Estimated cost of a sorting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortCost {
    /// O(1) - nothing to reorder
    Trivial,
    /// O(n log n) - key extraction plus a comparison sort
    Moderate,
}
