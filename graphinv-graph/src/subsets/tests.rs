//! Unit tests for subset enumeration.

use rstest::rstest;

use super::{combinations, increasing_by_size, minimum_feasible};

#[test]
fn combinations_are_lexicographic() {
    let all: Vec<Vec<usize>> = combinations(4, 2).collect();
    assert_eq!(
        all,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ]
    );
}

#[rstest]
#[case(5, 0, 1)]
#[case(5, 5, 1)]
#[case(5, 6, 0)]
#[case(6, 3, 20)]
fn combination_counts(#[case] n: usize, #[case] k: usize, #[case] expected: usize) {
    assert_eq!(combinations(n, k).count(), expected);
}

#[test]
fn increasing_by_size_orders_by_cardinality() {
    let sizes: Vec<usize> = increasing_by_size(3).map(|s| s.len()).collect();
    assert_eq!(sizes, vec![1, 1, 1, 2, 2, 2, 3]);
}

#[test]
fn minimum_feasible_returns_smallest_accepted_subset() {
    // Feasible iff the subset contains both 1 and 3.
    let found = minimum_feasible(5, |s| s.contains(&1) && s.contains(&3));
    assert_eq!(found, Some(vec![1, 3]));
}

#[test]
fn minimum_feasible_exhausts_to_none() {
    assert_eq!(minimum_feasible(3, |_| false), None);
    assert_eq!(minimum_feasible(0, |_| true), None);
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn enumeration_is_complete_and_size_ordered(n in 0usize..=10) {
            let subsets: Vec<Vec<usize>> = increasing_by_size(n).collect();
            prop_assert_eq!(subsets.len(), (1usize << n) - 1);
            for pair in subsets.windows(2) {
                prop_assert!(pair[0].len() <= pair[1].len());
            }
        }
    }
}
