//! Ordering of record ids by their color values

use super::keys::{ColorSortKey, HexPolicy, derive_sort_value_with};
use super::traits::SortKey;
use huekey_model::{ColorValue, RecordId, SortDirection};
use tracing::debug;

/// Turns color values into sort keys and orders records by them.
///
/// The engine is stateless apart from its [`HexPolicy`]; one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorSortEngine {
    policy: HexPolicy,
}

impl ColorSortEngine {
    pub fn new(policy: HexPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> HexPolicy {
        self.policy
    }

    /// Rank of a hex color, see [`derive_sort_value_with`].
    pub fn derive_sort_value(&self, hex: &str) -> String {
        derive_sort_value_with(hex, self.policy)
    }

    /// Composite key of the value at position `counter` in arrival order.
    pub fn sort_key(&self, value: &ColorValue, counter: usize) -> ColorSortKey {
        let rank = self.derive_sort_value(value.hex());
        ColorSortKey::compose(&rank, value.saturation(), counter)
    }

    /// Order record ids by color, then saturation, then arrival order.
    ///
    /// `colors` must yield records in arrival order; that order decides ties.
    /// Descending output is the exact reverse of ascending output.
    pub fn order<'a, I>(&self, colors: I, direction: SortDirection) -> Vec<RecordId>
    where
        I: IntoIterator<Item = (RecordId, &'a ColorValue)>,
    {
        let mut keyed: Vec<(ColorSortKey, RecordId)> = colors
            .into_iter()
            .enumerate()
            .map(|(counter, (id, value))| (self.sort_key(value, counter), id))
            .collect();

        let reverse = direction.is_descending();
        keyed.sort_by(|a, b| a.0.compare_with_order(&b.0, reverse));

        debug!(
            records = keyed.len(),
            direction = %direction,
            "ordered records by color"
        );

        keyed.into_iter().map(|(_, id)| id).collect()
    }

    /// Positions of `values` in sorted order, for in-place reordering.
    pub(crate) fn sorted_positions<'a, I>(&self, values: I, direction: SortDirection) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a ColorValue>,
    {
        let mut keyed: Vec<(ColorSortKey, usize)> = values
            .into_iter()
            .enumerate()
            .map(|(counter, value)| (self.sort_key(value, counter), counter))
            .collect();

        let reverse = direction.is_descending();
        keyed.sort_by(|a, b| a.0.compare_with_order(&b.0, reverse));
        keyed.into_iter().map(|(_, position)| position).collect()
    }
}

/// Order record ids by color with the default engine.
///
/// `descending == true` yields the exact reverse of the ascending order.
pub fn order<'a, I>(colors: I, descending: bool) -> Vec<RecordId>
where
    I: IntoIterator<Item = (RecordId, &'a ColorValue)>,
{
    ColorSortEngine::default().order(colors, SortDirection::from(descending))
}
