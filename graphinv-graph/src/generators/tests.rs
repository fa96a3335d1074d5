//! Unit tests for the named graph constructors.

use rstest::rstest;

use super::{complete, complete_bipartite, cycle, empty, path, star};

#[rstest]
#[case(path(4), 4, 3)]
#[case(cycle(5), 5, 5)]
#[case(complete(4), 4, 6)]
#[case(complete_bipartite(2, 3), 5, 6)]
#[case(star(3), 4, 3)]
#[case(empty(3), 3, 0)]
fn orders_and_sizes(
    #[case] graph: crate::Graph,
    #[case] order: usize,
    #[case] size: usize,
) {
    assert_eq!(graph.order(), order);
    assert_eq!(graph.size(), size);
}

#[test]
fn star_centre_is_vertex_zero() {
    let graph = star(4);
    assert_eq!(graph.degree(0), 4);
    for leaf in 1..=4 {
        assert_eq!(graph.degree(leaf), 1);
    }
}

#[test]
fn degenerate_cycles_collapse_to_paths() {
    assert_eq!(cycle(2).size(), 1);
    assert_eq!(cycle(1).size(), 0);
}
