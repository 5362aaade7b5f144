//! Tests for color ordering and the record sort strategy

#[cfg(test)]
mod tests {
    use crate::sorting::{
        ColorRecord, ColorSort, ColorSortEngine, HexPolicy, SortCost, SortStrategy, derive_sort_value,
        order, utils::is_sorted_by,
    };
    use huekey_model::{ColorValue, RecordId, SortDirection};

    fn fixture() -> Vec<(RecordId, ColorValue)> {
        [
            (1, "fafa05", ""),
            (2, "fa8405", ""),
            (3, "f605fa", ""),
            (4, "fa053a", "80"),
            (5, "fa053a", "20"),
            (6, "", ""),
            (7, "333", ""),
            (8, "333333", ""),
            (9, "05fafa", ""),
            (10, "05fa63", ""),
            (11, "0511fa", ""),
            (12, "000000", ""),
        ]
        .into_iter()
        .map(|(id, hex, sat)| (RecordId(id), ColorValue::new(hex, sat)))
        .collect()
    }

    fn ids(raw: &[u64]) -> Vec<RecordId> {
        raw.iter().copied().map(RecordId).collect()
    }

    fn order_pairs(pairs: &[(RecordId, ColorValue)], descending: bool) -> Vec<RecordId> {
        order(pairs.iter().map(|(id, value)| (*id, value)), descending)
    }

    #[test]
    fn test_fixture_ascending() {
        let sorted = order_pairs(&fixture(), false);
        assert_eq!(sorted, ids(&[6, 12, 11, 10, 9, 7, 8, 5, 4, 3, 2, 1]));
    }

    #[test]
    fn test_fixture_descending_is_exact_reverse() {
        let pairs = fixture();
        let mut ascending = order_pairs(&pairs, false);
        let descending = order_pairs(&pairs, true);

        assert_eq!(descending, ids(&[1, 2, 3, 4, 5, 8, 7, 9, 10, 11, 12, 6]));
        ascending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn test_empty_input_yields_empty_order() {
        let pairs: Vec<(RecordId, ColorValue)> = Vec::new();
        assert!(order_pairs(&pairs, false).is_empty());
        assert!(order_pairs(&pairs, true).is_empty());
    }

    #[test]
    fn test_empty_hex_sorts_first_regardless_of_saturation() {
        let pairs = vec![
            (RecordId(1), ColorValue::new("000000", "")),
            (RecordId(2), ColorValue::new("", "999")),
            (RecordId(3), ColorValue::new("000", "0")),
        ];

        let sorted = order_pairs(&pairs, false);
        assert_eq!(sorted[0], RecordId(2));
    }

    #[test]
    fn test_ties_keep_arrival_order_in_both_directions() {
        let pairs = vec![
            (RecordId(30), ColorValue::new("abcdef", "5")),
            (RecordId(10), ColorValue::new("abcdef", "5")),
            (RecordId(20), ColorValue::new("abcdef", "5")),
        ];

        assert_eq!(order_pairs(&pairs, false), ids(&[30, 10, 20]));
        assert_eq!(order_pairs(&pairs, true), ids(&[20, 10, 30]));
    }

    #[test]
    fn test_saturation_breaks_color_ties() {
        let pairs = vec![
            (RecordId(1), ColorValue::new("fa053a", "100")),
            (RecordId(2), ColorValue::new("fa053a", "9")),
            (RecordId(3), ColorValue::new("fa053a", "")),
        ];

        assert_eq!(order_pairs(&pairs, false), ids(&[3, 2, 1]));
    }

    #[test]
    fn test_tie_counter_compares_as_text() {
        // Eleven identical values: counter "10" sorts between "1" and "2".
        let pairs: Vec<_> = (0..11u64)
            .map(|id| (RecordId(id), ColorValue::new("123456", "")))
            .collect();

        assert_eq!(
            order_pairs(&pairs, false),
            ids(&[0, 1, 10, 2, 3, 4, 5, 6, 7, 8, 9])
        );
    }

    #[test]
    fn test_order_follows_derived_rank() {
        let hexes = ["ffffff", "0511fa", "808080", "f605fa", "000000", "7f7f00"];
        let pairs: Vec<_> = hexes
            .iter()
            .enumerate()
            .map(|(i, hex)| (RecordId(i as u64), ColorValue::new(*hex, "50")))
            .collect();

        let ranks = |sorted: &[RecordId]| -> Vec<String> {
            sorted
                .iter()
                .map(|id| derive_sort_value(hexes[id.get() as usize]))
                .collect()
        };

        let ascending = ranks(&order_pairs(&pairs, false));
        assert!(is_sorted_by(&ascending, |a, b| a.as_bytes().cmp(b.as_bytes())));

        let descending = ranks(&order_pairs(&pairs, true));
        assert!(is_sorted_by(&descending, |a, b| b.as_bytes().cmp(a.as_bytes())));
    }

    #[test]
    fn test_strict_engine_groups_malformed_with_missing() {
        let pairs = vec![
            (RecordId(1), ColorValue::new("000000", "")),
            (RecordId(2), ColorValue::new("zzzzzz", "")),
            (RecordId(3), ColorValue::new("", "")),
        ];
        let engine = ColorSortEngine::new(HexPolicy::Strict);

        let sorted = engine.order(
            pairs.iter().map(|(id, value)| (*id, value)),
            SortDirection::Ascending,
        );
        assert_eq!(sorted, ids(&[2, 3, 1]));
    }

    #[test]
    fn test_color_sort_strategy_matches_engine_order() {
        let pairs = fixture();
        let mut records: Vec<ColorRecord> = pairs
            .iter()
            .map(|(id, value)| ColorRecord::new(*id, value.clone()))
            .collect();

        ColorSort::ascending().sort(&mut records);
        let sorted: Vec<RecordId> = records.iter().map(|record| record.id).collect();
        assert_eq!(sorted, order_pairs(&pairs, false));
    }

    #[test]
    fn test_color_sort_strategy_reverse() {
        let mut records: Vec<ColorRecord> = fixture()
            .into_iter()
            .map(|(id, value)| ColorRecord::new(id, value))
            .collect();

        ColorSort::descending().sort(&mut records);
        let sorted: Vec<RecordId> = records.iter().map(|record| record.id).collect();
        assert_eq!(sorted, ids(&[1, 2, 3, 4, 5, 8, 7, 9, 10, 11, 12, 6]));
    }

    #[test]
    fn test_color_sort_strategy_single_item() {
        let mut records = vec![ColorRecord::new(5u64, ("abc", "1"))];
        ColorSort::descending().sort(&mut records);
        assert_eq!(records[0].id, RecordId(5));
    }

    #[test]
    fn test_color_sort_cost_estimate() {
        let sort = ColorSort::ascending();
        assert_eq!(sort.cost_estimate(0), SortCost::Trivial);
        assert_eq!(sort.cost_estimate(1), SortCost::Trivial);
        assert_eq!(sort.cost_estimate(2), SortCost::Moderate);
        assert_eq!(ColorSort::descending().cost_estimate(12), SortCost::Moderate);
        assert!(SortCost::Trivial < SortCost::Moderate);
    }
}
