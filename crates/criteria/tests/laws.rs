//! Property-based tests for the predicate and ordering laws using proptest.

use std::cell::Cell;
use std::cmp::Ordering;

use criteria::{comparing, natural_order, not, Comparator, Dir, Predicate, Query};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn constant(answer: bool) -> impl Fn(&i64) -> bool + Copy {
    move |_: &i64| answer
}

#[derive(Debug, Clone)]
struct Record {
    id: usize,
    group: u8,
    score: i32,
}

fn record_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0u8..4, -5i32..5), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(id, (group, score))| Record { id, group, score })
            .collect()
    })
}

// ============================================================================
// Predicate laws
// ============================================================================

proptest! {
    /// `and` agrees with boolean conjunction.
    #[test]
    fn and_matches_truth_table(a in any::<bool>(), b in any::<bool>(), v in any::<i64>()) {
        prop_assert_eq!(constant(a).and(constant(b)).test(&v), a && b);
    }

    /// `or` agrees with boolean disjunction.
    #[test]
    fn or_matches_truth_table(a in any::<bool>(), b in any::<bool>(), v in any::<i64>()) {
        prop_assert_eq!(constant(a).or(constant(b)).test(&v), a || b);
    }

    /// `negate` flips the answer.
    #[test]
    fn negate_flips(a in any::<bool>(), v in any::<i64>()) {
        prop_assert_eq!(constant(a).negate().test(&v), !a);
    }

    /// Grouping of `and` chains does not change the result.
    #[test]
    fn and_is_associative(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        let (p, q, r) = (constant(a), constant(b), constant(c));
        let left = p.and(q).and(r);
        let right = p.and(q.and(r));
        prop_assert_eq!(left.test(&0), right.test(&0));
    }

    /// Grouping of `or` chains does not change the result.
    #[test]
    fn or_is_associative(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        let (p, q, r) = (constant(a), constant(b), constant(c));
        prop_assert_eq!(p.or(q).or(r).test(&0), p.or(q.or(r)).test(&0));
    }

    /// Mixed chains group left to right.
    #[test]
    fn mixed_chain_groups_left(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        let (p, q, r) = (constant(a), constant(b), constant(c));
        prop_assert_eq!(p.and(q).or(r).test(&0), (a && b) || c);
    }

    /// Predicates built from real tests agree with the closures they wrap.
    #[test]
    fn composed_tests_agree_with_closures(v in any::<i64>()) {
        let even = |n: &i64| n % 2 == 0;
        let positive = |n: &i64| *n > 0;
        prop_assert_eq!(even.and(positive).test(&v), v % 2 == 0 && v > 0);
        prop_assert_eq!(even.or(positive).test(&v), v % 2 == 0 || v > 0);
    }
}

// ============================================================================
// Ordering laws
// ============================================================================

proptest! {
    /// Reversing twice gives back the original ordering.
    #[test]
    fn double_reverse_is_identity(a in any::<i64>(), b in any::<i64>()) {
        let cmp = |x: &i64, y: &i64| x.cmp(y);
        prop_assert_eq!(cmp.reversed().reversed().compare(&a, &b), cmp.compare(&a, &b));
    }

    /// Reversing swaps the arguments.
    #[test]
    fn reverse_swaps_arguments(a in any::<i64>(), b in any::<i64>()) {
        let cmp = |x: &i64, y: &i64| x.cmp(y);
        prop_assert_eq!(cmp.reversed().compare(&a, &b), cmp.compare(&b, &a));
    }

    /// A chained comparator is antisymmetric when its parts are.
    #[test]
    fn chain_is_antisymmetric(a in (0u8..4, -5i32..5), b in (0u8..4, -5i32..5)) {
        let cmp = comparing(|r: &(u8, i32)| r.0).then_comparing_key(|r: &(u8, i32)| r.1);
        prop_assert_eq!(cmp.compare(&a, &b), cmp.compare(&b, &a).reverse());
    }

    /// A chained comparator equals the lexicographic tuple order.
    #[test]
    fn chain_matches_tuple_order(a in (0u8..4, -5i32..5), b in (0u8..4, -5i32..5)) {
        let cmp = comparing(|r: &(u8, i32)| r.0).then_comparing_key(|r: &(u8, i32)| r.1);
        prop_assert_eq!(cmp.compare(&a, &b), a.cmp(&b));
    }

    /// The tiebreaker is consulted exactly when the primary comparison ties.
    #[test]
    fn tiebreaker_only_on_ties(a in 0i64..4, b in 0i64..4) {
        let calls = Cell::new(0usize);
        let tiebreak = |_: &i64, _: &i64| {
            calls.set(calls.get() + 1);
            Ordering::Equal
        };
        let cmp = natural_order().then_comparing(tiebreak);
        let result = Comparator::<i64>::compare(&cmp, &a, &b);

        prop_assert_eq!(result, a.cmp(&b));
        prop_assert_eq!(calls.get(), usize::from(a == b));
    }

    /// Sorting by a key is stable: equal keys keep their input order.
    #[test]
    fn key_sort_is_stable(mut records in record_strategy()) {
        comparing(|r: &Record| r.group).sort(&mut records);

        for pair in records.windows(2) {
            prop_assert!(pair[0].group <= pair[1].group);
            if pair[0].group == pair[1].group {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Sorted output satisfies `is_sorted` for the same comparator.
    #[test]
    fn sort_then_is_sorted(mut records in record_strategy()) {
        let cmp = comparing(|r: &Record| r.group)
            .then_comparing_key(|r: &Record| r.score)
            .directed(Dir::Desc);
        cmp.sort(&mut records);
        prop_assert!(cmp.is_sorted(&records));
    }
}

// ============================================================================
// Query properties
// ============================================================================

proptest! {
    /// A built query selects exactly what the hand-composed predicate selects.
    #[test]
    fn query_agrees_with_composed_predicate(
        values in prop::collection::vec(-50i64..50, 0..80),
        low in -50i64..50,
        first in -50i64..50,
        second in -50i64..50,
        banned in -50i64..50,
    ) {
        let at_or_above = move |v: &i64| *v >= low;
        let is_first = move |v: &i64| *v == first;
        let is_second = move |v: &i64| *v == second;
        let is_banned = move |v: &i64| *v == banned;

        let query = Query::builder()
            .require(at_or_above)
            .allow(is_first)
            .allow(is_second)
            .exclude(is_banned)
            .build();
        let composed = at_or_above.and(is_first.or(is_second)).and(not(is_banned));

        let selected: Vec<i64> = query.run(&values).into_iter().copied().collect();
        let expected: Vec<i64> = values.iter().copied().filter(|v| composed.test(v)).collect();
        prop_assert_eq!(selected, expected);
    }

    /// The window is a slice of the unwindowed, ordered run.
    #[test]
    fn window_is_a_slice_of_the_full_run(
        records in record_strategy(),
        skip in 0usize..70,
        take in 0usize..70,
    ) {
        let full = Query::builder()
            .order_by_key(|r: &Record| r.group, Dir::Desc)
            .build();
        let paged = Query::builder()
            .order_by_key(|r: &Record| r.group, Dir::Desc)
            .skip(skip)
            .take(take)
            .build();

        let all_ids: Vec<usize> = full.run(&records).iter().map(|r| r.id).collect();
        let page_ids: Vec<usize> = paged.run(&records).iter().map(|r| r.id).collect();

        let start = skip.min(all_ids.len());
        let end = start.saturating_add(take).min(all_ids.len());
        prop_assert_eq!(page_ids, all_ids[start..end].to_vec());
    }

    /// Run output follows the query's own comparator, ties in input order.
    #[test]
    fn run_output_is_ordered_and_stable(records in record_strategy()) {
        let query = Query::builder()
            .order_by(comparing(|r: &Record| r.score))
            .build();

        let out = query.run(&records);
        for pair in out.windows(2) {
            let order = query.compare(pair[0], pair[1]);
            prop_assert_ne!(order, Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// `retain`, `count` and the predicate view agree.
    #[test]
    fn retain_count_and_test_agree(
        values in prop::collection::vec(any::<i64>(), 0..80),
        pivot in any::<i64>(),
    ) {
        let query = Query::builder().exclude(move |v: &i64| *v < pivot).build();

        let mut kept = values.clone();
        query.retain(&mut kept);

        prop_assert_eq!(kept.len(), query.count(&values));
        prop_assert!(kept.iter().all(|v| query.test(v)));
        prop_assert_eq!(
            query.first(&values).copied(),
            values.iter().copied().find(|v| *v >= pivot)
        );
    }
}
