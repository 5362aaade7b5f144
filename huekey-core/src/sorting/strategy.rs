//! Strategy sorting decoded color records in place

use super::engine::ColorSortEngine;
use super::traits::{SortCost, SortStrategy};
use super::utils::reorder_by_indices;
use huekey_model::{ColorValue, RecordId, SortDirection};

/// A decoded record: id plus its color value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRecord {
    pub id: RecordId,
    pub value: ColorValue,
}

impl ColorRecord {
    pub fn new(id: impl Into<RecordId>, value: impl Into<ColorValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Sorts [`ColorRecord`] slices the same way [`ColorSortEngine::order`]
/// orders ids; the slice order on entry is the arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSort {
    engine: ColorSortEngine,
    direction: SortDirection,
}

impl ColorSort {
    pub fn new(engine: ColorSortEngine, direction: SortDirection) -> Self {
        Self { engine, direction }
    }

    pub fn ascending() -> Self {
        Self::new(ColorSortEngine::default(), SortDirection::Ascending)
    }

    pub fn descending() -> Self {
        Self::new(ColorSortEngine::default(), SortDirection::Descending)
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl SortStrategy<ColorRecord> for ColorSort {
    fn sort(&self, items: &mut [ColorRecord]) {
        if items.len() < 2 {
            return;
        }

        let indices = self
            .engine
            .sorted_positions(items.iter().map(|record| &record.value), self.direction);
        reorder_by_indices(items, &indices);
    }

    fn cost_estimate(&self, len: usize) -> SortCost {
        if len < 2 {
            SortCost::Trivial
        } else {
            SortCost::Moderate
        }
    }
}
