//! Metamorphic properties: how outputs relate when inputs are transformed.
//!
//! These don't need an oracle. They check that a known transformation of
//! the input (translate the points, shift the logits, merge a map into
//! itself) moves the output in the predicted way.

use super::common::{allclose, mapping, matrix_allclose, point_sets, DIST_TOL};
use pbt_toolkit::{merge_max_mappings, pairwise_dists, softmax};
use proptest::prelude::*;

// ============================================================================
// MERGE MAX MAPPINGS
// ============================================================================

proptest! {
    #[test]
    fn merging_the_result_changes_nothing(a in mapping(), b in mapping()) {
        let merged = merge_max_mappings(&a, &b);
        prop_assert_eq!(&merge_max_mappings(&a, &merged), &merged);
        prop_assert_eq!(&merge_max_mappings(&merged, &b), &merged);
    }

    #[test]
    fn merging_with_self_is_identity(a in mapping()) {
        prop_assert_eq!(merge_max_mappings(&a, &a), a);
    }

    #[test]
    fn merging_with_empty_is_identity(a in mapping()) {
        let empty = Default::default();
        prop_assert_eq!(&merge_max_mappings(&a, &empty), &a);
        prop_assert_eq!(&merge_max_mappings(&empty, &a), &a);
    }
}

// ============================================================================
// PAIRWISE DISTANCES
// ============================================================================

proptest! {
    #[test]
    fn distances_are_translation_invariant(
        (x, y) in point_sets(100.0),
        shift in -100.0f64..100.0,
    ) {
        let before = pairwise_dists(&x, &y).unwrap();
        let after = pairwise_dists(&x.shifted(shift), &y.shifted(shift)).unwrap();
        prop_assert!(
            matrix_allclose(&before, &after, DIST_TOL, DIST_TOL),
            "{:?} vs {:?}", before, after
        );
    }

    #[test]
    fn distances_scale_linearly(
        (x, y) in point_sets(10.0),
        scale in 0.0f64..10.0,
    ) {
        let before = pairwise_dists(&x, &y).unwrap();
        let after = pairwise_dists(&x.scaled(scale), &y.scaled(scale)).unwrap();
        let expected = before.scaled(scale);
        prop_assert!(
            matrix_allclose(&after, &expected, DIST_TOL, DIST_TOL),
            "{:?} vs {:?}", after, expected
        );
    }

    #[test]
    fn distances_are_symmetric((x, y) in point_sets(100.0)) {
        let xy = pairwise_dists(&x, &y).unwrap();
        let yx = pairwise_dists(&y, &x).unwrap();
        prop_assert_eq!((xy.rows(), xy.cols()), (x.rows(), y.rows()));
        for i in 0..x.rows() {
            for j in 0..y.rows() {
                prop_assert_eq!(xy.get(i, j), yx.get(j, i));
            }
        }
    }

    #[test]
    fn distances_are_non_negative((x, y) in point_sets(100.0)) {
        let d = pairwise_dists(&x, &y).unwrap();
        prop_assert!(d.as_slice().iter().all(|&v| v >= 0.0), "{:?}", d);
    }
}

// ============================================================================
// SOFTMAX
// ============================================================================

proptest! {
    #[test]
    fn softmax_is_shift_invariant(
        x in prop::collection::vec(-1e3f64..1e3, 1..50),
        c in -1e3f64..1e3,
    ) {
        let shifted: Vec<f64> = x.iter().map(|v| v + c).collect();
        let (a, b) = (softmax(&x), softmax(&shifted));
        prop_assert!(allclose(&a, &b, 1e-9, 1e-12), "{:?} vs {:?}", a, b);
    }

    #[test]
    fn softmax_is_permutation_equivariant(x in prop::collection::vec(-1e3f64..1e3, 1..50)) {
        let mut rev = x.clone();
        rev.reverse();
        let mut expected = softmax(&x);
        expected.reverse();
        prop_assert!(allclose(&softmax(&rev), &expected, 1e-12, 1e-15));
    }
}

// ============================================================================
// STANDARD LIBRARY FIXED POINTS
// ============================================================================

proptest! {
    #[test]
    fn clamping_twice_changes_nothing(
        values in prop::collection::vec(any::<f64>().prop_filter("not NaN", |v| !v.is_nan()), 0..50),
        a in any::<f64>().prop_filter("not NaN", |v| !v.is_nan()),
        b in any::<f64>().prop_filter("not NaN", |v| !v.is_nan()),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let once: Vec<f64> = values.iter().map(|v| v.clamp(lo, hi)).collect();
        let twice: Vec<f64> = once.iter().map(|v| v.clamp(lo, hi)).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorting_ignores_permutation(
        (original, shuffled) in prop::collection::vec(any::<i64>(), 0..50)
            .prop_flat_map(|x| (Just(x.clone()), Just(x).prop_shuffle())),
    ) {
        let mut a = original;
        let mut b = shuffled;
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }
}
