//! Property-based tests for sequence using proptest.

use proptest::prelude::*;
use standout_sequence::{PredicateGroup, Sequence};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    key: i64,
    name: String,
}

// Small key range so ties and duplicates are common
fn test_item_strategy() -> impl Strategy<Value = TestItem> {
    (0i64..10, "[a-z]{1,5}").prop_map(|(key, name)| TestItem { key, name })
}

fn int_eq(a: &i64, b: &i64) -> bool {
    a == b
}

fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| f == s))
}

fn has_no_duplicates(items: &[i64]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, a)| items[i + 1..].iter().all(|b| a != b))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Wrapping and unwrapping returns the input.
    #[test]
    fn round_trip_identity(items in prop::collection::vec(any::<i64>(), 0..100)) {
        prop_assert_eq!(Sequence::from(items.clone()).into_vec(), items);
    }

    /// filter() keeps exactly the matching elements, in order.
    #[test]
    fn filter_is_ordered_subsequence(
        items in prop::collection::vec(any::<i64>(), 0..100),
        threshold in any::<i64>(),
    ) {
        let filtered = Sequence::from(items.clone()).filter(|n| *n > threshold).into_vec();
        let expected: Vec<i64> = items.iter().copied().filter(|n| *n > threshold).collect();

        prop_assert!(is_subsequence(&filtered, &items));
        prop_assert_eq!(filtered, expected);
    }

    /// An AND group is equivalent to chaining single filters.
    #[test]
    fn and_group_equals_chained_filters(
        items in prop::collection::vec(-100i64..100, 0..100),
        low in -100i64..100,
        high in -100i64..100,
    ) {
        let group = PredicateGroup::and()
            .with(move |n: &i64| *n > low)
            .with(move |n: &i64| *n < high)
            .with(|n: &i64| n % 2 == 0);

        let grouped = Sequence::from(items.clone()).filter_group(&group).into_vec();
        let chained = Sequence::from(items)
            .filter(|n| *n > low)
            .filter(|n| *n < high)
            .filter(|n| n % 2 == 0)
            .into_vec();

        prop_assert_eq!(grouped, chained);
    }

    /// An OR group keeps every element matched by any single predicate.
    #[test]
    fn or_group_equals_positional_union(
        items in prop::collection::vec(-100i64..100, 0..100),
        low in -100i64..100,
        high in -100i64..100,
    ) {
        let group = PredicateGroup::or()
            .with(move |n: &i64| *n < low)
            .with(move |n: &i64| *n > high);

        let grouped = Sequence::from(items.clone()).filter_group(&group).into_vec();
        let expected: Vec<i64> = items
            .iter()
            .copied()
            .filter(|n| *n < low || *n > high)
            .collect();

        prop_assert_eq!(grouped, expected);
    }

    /// A NOT group keeps exactly what the matching OR group drops.
    #[test]
    fn not_group_complements_or_group(
        items in prop::collection::vec(-100i64..100, 0..100),
        pivot in -100i64..100,
    ) {
        let or_group = PredicateGroup::or().with(move |n: &i64| *n < pivot);
        let not_group = PredicateGroup::not().with(move |n: &i64| *n < pivot);

        let kept_by_or = Sequence::from(items.clone()).filter_group(&or_group).count();
        let kept_by_not = Sequence::from(items.clone()).filter_group(&not_group).count();

        prop_assert_eq!(kept_by_or + kept_by_not, items.len());
    }

    /// order_by() produces a sorted, stable permutation.
    #[test]
    fn order_by_is_sorted_and_stable(
        items in prop::collection::vec(test_item_strategy(), 0..50),
    ) {
        let sorted = Sequence::from(items.clone())
            .order_by(|a, b| a.key < b.key)
            .into_vec();

        prop_assert_eq!(sorted.len(), items.len());

        let mut expected = items;
        expected.sort_by_key(|item| item.key);
        prop_assert_eq!(sorted, expected);
    }

    /// order_by_descending() sorts largest first, each run of ties reversed.
    #[test]
    fn order_by_descending_is_reversed_order_by(
        items in prop::collection::vec(test_item_strategy(), 0..50),
    ) {
        let less = |a: &TestItem, b: &TestItem| a.key < b.key;
        let descending = Sequence::from(items.clone())
            .order_by_descending(less)
            .into_vec();
        let reversed = Sequence::from(items.clone())
            .order_by(less)
            .reverse()
            .into_vec();

        prop_assert!(descending.windows(2).all(|w| w[0].key >= w[1].key));
        prop_assert_eq!(descending, reversed);
    }

    /// Key-based descending order keeps ties in input order.
    #[test]
    fn order_by_key_descending_is_stable(
        items in prop::collection::vec(test_item_strategy(), 0..50),
    ) {
        let sorted = Sequence::from(items.clone())
            .order_by_key_descending(|item| item.key)
            .into_vec();

        let mut expected = items;
        expected.sort_by(|a, b| b.key.cmp(&a.key));
        prop_assert_eq!(sorted, expected);
    }

    /// skip() and take() partition the sequence.
    #[test]
    fn take_and_skip_reconstruct(
        items in prop::collection::vec(any::<i64>(), 0..100),
        n in 0usize..150,
    ) {
        let seq = Sequence::from(items.clone());

        let skipped = seq.clone().skip(n);
        prop_assert_eq!(skipped.count() + n.min(items.len()), items.len());

        let mut rebuilt = seq.clone().take(n).into_vec();
        rebuilt.extend(skipped);
        prop_assert_eq!(rebuilt, items);
    }

    /// Reversing twice is the identity.
    #[test]
    fn reverse_is_involution(items in prop::collection::vec(any::<i64>(), 0..100)) {
        let twice = Sequence::from(items.clone()).reverse().reverse().into_vec();
        prop_assert_eq!(twice, items);
    }

    /// distinct() has no duplicates and keeps first occurrences in order.
    #[test]
    fn distinct_is_unique_subsequence(
        items in prop::collection::vec(0i64..20, 0..100),
    ) {
        let unique = Sequence::from(items.clone()).distinct(int_eq).into_vec();

        prop_assert!(has_no_duplicates(&unique));
        prop_assert!(is_subsequence(&unique, &items));
        for item in &items {
            prop_assert!(unique.contains(item));
        }
    }

    /// union() and intersect() deduplicate, except() does not.
    #[test]
    fn set_operation_dedup_rules(
        left in prop::collection::vec(0i64..20, 0..50),
        right in prop::collection::vec(0i64..20, 0..50),
    ) {
        let union = Sequence::from(left.clone()).union(right.clone(), int_eq).into_vec();
        let intersect = Sequence::from(left.clone()).intersect(right.clone(), int_eq).into_vec();
        let except = Sequence::from(left.clone()).except(right.clone(), int_eq).into_vec();

        prop_assert!(has_no_duplicates(&union));
        prop_assert!(has_no_duplicates(&intersect));

        let expected_except: Vec<i64> = left
            .iter()
            .copied()
            .filter(|n| !right.contains(n))
            .collect();
        prop_assert_eq!(except, expected_except);

        for n in &intersect {
            prop_assert!(left.contains(n) && right.contains(n));
        }
        for n in left.iter().chain(right.iter()) {
            prop_assert!(union.contains(n));
        }
    }

    /// any() is true iff filter() is non-empty; all() iff filter() keeps everything.
    #[test]
    fn quantifiers_consistent_with_filter(
        items in prop::collection::vec(any::<i64>(), 0..50),
        threshold in any::<i64>(),
    ) {
        let seq = Sequence::from(items.clone());
        let matching = seq.clone().filter(|n| *n < threshold).count();

        prop_assert_eq!(seq.any(|n| *n < threshold), matching > 0);
        prop_assert_eq!(seq.all(|n| *n < threshold), matching == items.len());
    }

    /// first() agrees with filter() followed by element_at(0).
    #[test]
    fn first_consistent_with_filter(
        items in prop::collection::vec(0i64..10, 0..50),
        target in 0i64..10,
    ) {
        let seq = Sequence::from(items);
        let filtered = seq.clone().filter(|n| *n == target);

        prop_assert_eq!(seq.first(|n| *n == target), filtered.element_at(0));
    }

    /// Folding with the seed and no elements returns the seed.
    #[test]
    fn aggregate_over_empty_returns_seed(seed in any::<i64>()) {
        let empty: Sequence<i64> = Sequence::new();
        prop_assert_eq!(empty.aggregate(seed, |acc, n| acc.wrapping_mul(*n)), seed);
    }

    /// min() and max() bracket every projected value.
    #[test]
    fn min_max_bracket_values(items in prop::collection::vec(-1000i64..1000, 1..50)) {
        let seq = Sequence::from(items.clone());
        let low = seq.min(|n| *n);
        let high = seq.max(|n| *n);

        prop_assert!(items.iter().all(|n| low <= *n && *n <= high));
        prop_assert_eq!(seq.try_min(|n| *n).unwrap(), low);
        prop_assert_eq!(seq.try_max(|n| *n).unwrap(), high);
    }
}
