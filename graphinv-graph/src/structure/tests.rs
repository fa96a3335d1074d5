//! Unit tests for structural predicates and decompositions.

use rstest::rstest;

use crate::{Graph, generators};

use super::blocks::biconnected_components;
use super::planarity::is_planar;
use super::{
    is_at_free, is_bipartite, is_bull_free, is_chordal, is_claw_free, is_complete, is_eulerian,
    is_tree, is_triangle_free, triangle_count,
};

/// Two triangles sharing vertex 0.
fn bowtie() -> Graph {
    Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)])
}

fn petersen() -> Graph {
    Graph::from_edges(
        10,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (0, 5),
            (1, 6),
            (2, 7),
            (3, 8),
            (4, 9),
            (5, 7),
            (7, 9),
            (9, 6),
            (6, 8),
            (8, 5),
        ],
    )
}

#[test]
fn completeness_and_trees() {
    assert!(is_complete(&generators::complete(4)));
    assert!(!is_complete(&generators::path(3)));
    assert!(is_tree(&generators::path(4)));
    assert!(is_tree(&generators::star(3)));
    assert!(!is_tree(&generators::cycle(4)));
    // Acyclic but disconnected.
    assert!(!is_tree(&Graph::from_edges(4, &[(0, 1), (2, 3)])));
}

#[rstest]
#[case(generators::cycle(5), true)]
#[case(generators::complete(5), true)]
#[case(generators::path(4), false)]
#[case(generators::star(3), false)]
fn eulerian_graphs(#[case] graph: Graph, #[case] expected: bool) {
    assert_eq!(is_eulerian(&graph), expected);
}

#[rstest]
#[case(generators::path(4), true)]
#[case(generators::cycle(4), true)]
#[case(generators::cycle(5), false)]
#[case(generators::complete_bipartite(3, 3), true)]
#[case(Graph::new(0), true)]
fn bipartite_graphs(#[case] graph: Graph, #[case] expected: bool) {
    assert_eq!(is_bipartite(&graph), expected);
}

#[test]
fn bipartiteness_is_checked_per_component() {
    let two_paths = Graph::from_edges(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]);
    assert!(is_bipartite(&two_paths));
    let path_and_triangle = Graph::from_edges(6, &[(0, 1), (2, 3), (3, 4), (4, 2)]);
    assert!(!is_bipartite(&path_and_triangle));
}

#[rstest]
#[case(generators::complete(4), 4)]
#[case(generators::cycle(5), 0)]
#[case(bowtie(), 2)]
fn triangle_counts(#[case] graph: Graph, #[case] expected: usize) {
    assert_eq!(triangle_count(&graph), expected);
    assert_eq!(is_triangle_free(&graph), expected == 0);
}

#[rstest]
#[case(generators::star(3), false)]
#[case(generators::cycle(5), true)]
#[case(generators::complete(4), true)]
#[case(generators::path(5), true)]
fn claw_free_graphs(#[case] graph: Graph, #[case] expected: bool) {
    assert_eq!(is_claw_free(&graph), expected);
}

#[test]
fn bull_free_graphs() {
    let bull = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (2, 4)]);
    assert!(!is_bull_free(&bull));
    assert!(is_bull_free(&generators::cycle(5)));
    assert!(is_bull_free(&generators::complete(5)));
}

#[rstest]
#[case(generators::complete(4), true)]
#[case(generators::path(5), true)]
#[case(generators::cycle(4), false)]
#[case(generators::cycle(5), false)]
#[case(Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]), true)]
fn chordal_graphs(#[case] graph: Graph, #[case] expected: bool) {
    assert_eq!(is_chordal(&graph), expected);
}

#[test]
fn asteroidal_triple_freeness() {
    assert!(is_at_free(&generators::path(6)));
    assert!(is_at_free(&generators::cycle(5)));
    assert!(is_at_free(&generators::star(3)));
    // The three leaves of a spider with legs of length two form an
    // asteroidal triple.
    let spider = Graph::from_edges(7, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)]);
    assert!(!is_at_free(&spider));
    assert!(!is_at_free(&generators::cycle(6)));
}

#[test]
fn blocks_of_a_bowtie() {
    assert_eq!(
        biconnected_components(&bowtie()),
        vec![vec![0, 1, 2], vec![0, 3, 4]]
    );
}

#[test]
fn blocks_of_a_path_are_its_edges() {
    assert_eq!(
        biconnected_components(&generators::path(4)),
        vec![vec![0, 1], vec![1, 2], vec![2, 3]]
    );
}

#[test]
fn isolated_vertices_form_no_block() {
    assert!(biconnected_components(&generators::empty(3)).is_empty());
}

#[rstest]
#[case(generators::complete(4), true)]
#[case(generators::complete(5), false)]
#[case(generators::complete_bipartite(3, 3), false)]
#[case(generators::complete_bipartite(2, 3), true)]
#[case(generators::cycle(5), true)]
#[case(generators::path(6), true)]
#[case(petersen(), false)]
fn planar_graphs(#[case] graph: Graph, #[case] expected: bool) {
    assert_eq!(is_planar(&graph), expected);
}

#[test]
fn k5_minus_an_edge_is_planar() {
    let mut edges = Vec::new();
    for u in 0..5 {
        for v in (u + 1)..5 {
            if (u, v) != (0, 1) {
                edges.push((u, v));
            }
        }
    }
    assert!(is_planar(&Graph::from_edges(5, &edges)));
}

#[test]
fn planarity_is_checked_per_block() {
    // K5 and a triangle joined by a cut vertex.
    let mut edges = Vec::new();
    for u in 0..5 {
        for v in (u + 1)..5 {
            edges.push((u, v));
        }
    }
    edges.extend([(4, 5), (5, 6), (6, 4)]);
    assert!(!is_planar(&Graph::from_edges(7, &edges)));
}
