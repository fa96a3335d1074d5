//! Unit and property tests for the computation strategies.

use graphinv_graph::{Graph, generators};
use graphinv_ilp::BranchAndBound;
use proptest::prelude::*;
use rstest::rstest;

use crate::{error::EvalError, eval::EvalCtx};

use super::{closure, ilp, indices, outer, recognition, spectral, threshold};

fn ctx() -> EvalCtx<'static> {
    EvalCtx {
        solver: &BranchAndBound,
        deadline: None,
    }
}

fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..=6).prop_flat_map(|n| {
        proptest::collection::vec(any::<bool>(), n * n.saturating_sub(1) / 2).prop_map(
            move |mask| {
                let mut edges = Vec::new();
                let mut slot = 0;
                for u in 0..n {
                    for v in (u + 1)..n {
                        if mask[slot] {
                            edges.push((u, v));
                        }
                        slot += 1;
                    }
                }
                Graph::from_edges(n, &edges)
            },
        )
    })
}

fn relabel(graph: &Graph, perm: &[usize]) -> Graph {
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .into_iter()
        .map(|(u, v)| (perm[u], perm[v]))
        .collect();
    Graph::from_edges(graph.order(), &edges)
}

mod ilp_models {
    use super::*;

    #[rstest]
    #[case(generators::path(4), 3)]
    #[case(generators::complete(4), 2)]
    #[case(generators::cycle(5), 4)]
    #[case(generators::star(3), 2)]
    fn roman_domination_numbers(#[case] graph: Graph, #[case] expected: i64) {
        assert_eq!(ilp::roman_domination_number(&graph, &ctx()), Ok(expected));
    }

    #[rstest]
    #[case(generators::path(4), 5)]
    #[case(generators::complete(4), 3)]
    #[case(generators::star(3), 3)]
    fn double_roman_domination_numbers(#[case] graph: Graph, #[case] expected: i64) {
        assert_eq!(
            ilp::double_roman_domination_number(&graph, &ctx()),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(generators::path(4), 3)]
    #[case(generators::complete(4), 2)]
    fn two_rainbow_domination_numbers(#[case] graph: Graph, #[case] expected: i64) {
        assert_eq!(
            ilp::two_rainbow_domination_number(&graph, &ctx()),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(generators::path(4), 4)]
    #[case(generators::complete(4), 3)]
    fn three_rainbow_domination_numbers(#[case] graph: Graph, #[case] expected: i64) {
        assert_eq!(
            ilp::three_rainbow_domination_number(&graph, &ctx()),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(generators::path(4), 2)]
    #[case(generators::cycle(5), 3)]
    #[case(generators::complete(4), 1)]
    fn restrained_domination_numbers(#[case] graph: Graph, #[case] expected: i64) {
        assert_eq!(
            ilp::restrained_domination_number(&graph, &ctx()),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(generators::path(4), 2)]
    #[case(generators::cycle(5), 2)]
    #[case(generators::complete(4), 2)]
    fn semitotal_domination_numbers(#[case] graph: Graph, #[case] expected: i64) {
        assert_eq!(
            ilp::semitotal_domination_number(&graph, &ctx()),
            Ok(expected)
        );
    }

    #[test]
    fn semitotal_is_infeasible_on_a_single_vertex() {
        assert!(matches!(
            ilp::semitotal_domination_number(&generators::empty(1), &ctx()),
            Err(EvalError::SolverFailure { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn roman_domination_is_sandwiched_by_domination(graph in arb_graph()) {
            let gamma = i64::try_from(
                graphinv_graph::invariants::domination::domination_number(&graph)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?,
            )
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let roman = ilp::roman_domination_number(&graph, &ctx())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!(gamma <= roman);
            prop_assert!(roman <= 2 * gamma);
        }

        #[test]
        fn semitotal_is_sandwiched_by_domination(graph in arb_graph()) {
            // Graphs with a vertex whose distance-2 ball is empty admit no
            // semitotal dominating set; skip those.
            let Ok(semitotal) = ilp::semitotal_domination_number(&graph, &ctx()) else {
                return Ok(());
            };
            let gamma = i64::try_from(
                graphinv_graph::invariants::domination::domination_number(&graph)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?,
            )
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!(gamma <= semitotal);
            prop_assert!(semitotal <= 2 * gamma);
        }
    }
}

mod psd_forcing {
    use super::*;

    #[test]
    fn star_centre_forces_each_leaf_in_its_own_component() {
        let graph = generators::star(3);
        assert_eq!(closure::psd_closure(&graph, &[0]), vec![0, 1, 2, 3]);
        assert!(closure::is_psd_forcing_set(&graph, &[0]));
    }

    #[rstest]
    #[case(generators::star(3), 1)]
    #[case(generators::path(4), 1)]
    #[case(generators::cycle(5), 2)]
    #[case(generators::complete(4), 3)]
    fn psd_zero_forcing_numbers(#[case] graph: Graph, #[case] expected: usize) {
        assert_eq!(closure::psd_zero_forcing_number(&graph, &ctx()), Ok(expected));
    }

    #[test]
    fn empty_graph_has_no_candidate_subsets() {
        assert!(matches!(
            closure::psd_zero_forcing_number(&Graph::new(0), &ctx()),
            Err(EvalError::NoFeasibleSubsetFound { .. })
        ));
    }

    #[test]
    fn component_restriction_beats_plain_zero_forcing() {
        // Plain zero forcing needs two vertices on the claw; the PSD rule
        // splits the leaves into separate components.
        let graph = generators::star(3);
        assert_eq!(
            graphinv_graph::invariants::forcing::zero_forcing_number(&graph),
            Ok(2)
        );
        assert_eq!(closure::psd_zero_forcing_number(&graph, &ctx()), Ok(1));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn forcing_number_is_between_one_and_order(graph in arb_graph()) {
            let z = closure::psd_zero_forcing_number(&graph, &ctx())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert!(z >= 1);
            prop_assert!(z <= graph.order());
        }

        #[test]
        fn closure_is_idempotent(graph in arb_graph(), seed in any::<u64>()) {
            let n = graph.order();
            let black: Vec<usize> =
                (0..n).filter(|v| seed >> v & 1 == 1).collect();
            let closed = closure::psd_closure(&graph, &black);
            prop_assert_eq!(closure::psd_closure(&graph, &closed), closed.clone());
        }
    }
}

mod outer_connected {
    use super::*;

    #[rstest]
    #[case(generators::path(4), 2)]
    #[case(generators::cycle(5), 3)]
    #[case(generators::complete(4), 1)]
    #[case(generators::empty(1), 1)]
    fn outer_connected_domination_numbers(#[case] graph: Graph, #[case] expected: usize) {
        assert_eq!(
            outer::outer_connected_domination_number(&graph, &ctx()),
            Ok(expected)
        );
    }

    #[test]
    fn two_disjoint_edges_need_a_third_vertex() {
        // Any two-vertex dominating set leaves two isolated vertices
        // outside; one more vertex shrinks the outside to a singleton,
        // which is vacuously connected.
        let graph = Graph::from_edges(4, &[(0, 1), (2, 3)]);
        assert!(!outer::is_outer_connected_dominating_set(&graph, &[0, 2]));
        assert!(outer::is_outer_connected_dominating_set(&graph, &[0, 1, 2]));
        assert_eq!(
            outer::outer_connected_domination_number(&graph, &ctx()),
            Ok(3)
        );
    }

    #[test]
    fn full_vertex_set_is_vacuously_feasible() {
        let graph = generators::path(3);
        assert!(outer::is_outer_connected_dominating_set(&graph, &[0, 1, 2]));
    }
}

mod recognisers {
    use super::*;

    fn wheel4() -> Graph {
        Graph::from_edges(
            5,
            &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3)],
        )
    }

    #[test]
    fn catalog_has_nine_entries() {
        let catalog = recognition::forbidden_subgraphs();
        assert_eq!(catalog.len(), 9);
        assert!(catalog[5].is_isomorphic_to(&generators::cycle(5)));
    }

    #[rstest]
    #[case(generators::complete(4), true)]
    #[case(generators::complete(5), true)]
    #[case(Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]), false)]
    #[case(wheel4(), false)]
    #[case(generators::cycle(5), true)]
    fn diamond_free_graphs(#[case] graph: Graph, #[case] expected: bool) {
        // K4 is diamond-free: its only 4-vertex induced subgraph is K4
        // itself, not the diamond.
        assert_eq!(recognition::is_diamond_free(&graph), expected);
    }

    #[rstest]
    #[case(generators::complete(4), true)]
    #[case(generators::path(4), true)]
    #[case(Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]), true)]
    #[case(generators::cycle(4), false)]
    #[case(Graph::from_edges(4, &[(0, 1), (2, 3)]), false)]
    fn block_graphs(#[case] graph: Graph, #[case] expected: bool) {
        assert_eq!(recognition::is_block_graph(&graph), expected);
    }

    #[rstest]
    #[case(generators::cycle(5), true)]
    #[case(generators::star(3), false)]
    #[case(generators::cycle(4), true)]
    #[case(generators::complete(4), true)]
    #[case(Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]), false)]
    fn modified_line_graph_recognition(#[case] graph: Graph, #[case] expected: bool) {
        // The pentagon stays allowed; the unmodified theorem would reject
        // C5.
        assert_eq!(recognition::is_line_graph_modified(&graph), expected);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn recognisers_are_isomorphism_invariant(
            graph in arb_graph(),
            seed in any::<u64>(),
        ) {
            let n = graph.order();
            let mut perm: Vec<usize> = (0..n).collect();
            // Fisher-Yates driven by the seed.
            let mut state = seed | 1;
            for i in (1..n).rev() {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                #[expect(clippy::cast_possible_truncation, reason = "index fits in usize")]
                let j = (state % (i as u64 + 1)) as usize;
                perm.swap(i, j);
            }
            let shuffled = relabel(&graph, &perm);
            prop_assert_eq!(
                recognition::is_diamond_free(&graph),
                recognition::is_diamond_free(&shuffled)
            );
            prop_assert_eq!(
                recognition::is_block_graph(&graph),
                recognition::is_block_graph(&shuffled)
            );
        }
    }
}

mod spectra {
    use super::*;

    #[test]
    fn complete_graph_spectrum() {
        let graph = generators::complete(4);
        assert_eq!(spectral::graph_energy(&graph), 6);
        assert_eq!(spectral::square_positive_energy(&graph), 9);
        assert_eq!(spectral::square_negative_energy(&graph), 3);
        assert_eq!(spectral::second_largest_eigenvalue(&graph), Ok(-1));
    }

    #[test]
    fn four_cycle_spectrum() {
        let graph = generators::cycle(4);
        assert_eq!(spectral::graph_energy(&graph), 4);
        assert_eq!(spectral::square_positive_energy(&graph), 4);
        assert_eq!(spectral::square_negative_energy(&graph), 4);
        assert_eq!(spectral::second_largest_eigenvalue(&graph), Ok(0));
    }

    #[test]
    fn path_energy_rounds_to_four() {
        assert_eq!(spectral::graph_energy(&generators::path(4)), 4);
    }

    #[test]
    fn edgeless_graphs_have_zero_energy() {
        assert_eq!(spectral::graph_energy(&generators::empty(3)), 0);
        assert_eq!(spectral::square_positive_energy(&generators::empty(3)), 0);
        assert_eq!(
            spectral::second_largest_eigenvalue(&generators::empty(3)),
            Ok(0)
        );
    }

    #[test]
    fn second_largest_needs_two_vertices() {
        assert!(matches!(
            spectral::second_largest_eigenvalue(&generators::empty(1)),
            Err(EvalError::UndefinedOnInput { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn energy_is_non_negative(graph in arb_graph()) {
            prop_assert!(spectral::graph_energy(&graph) >= 0);
            prop_assert!(spectral::square_positive_energy(&graph) >= 0);
            prop_assert!(spectral::square_negative_energy(&graph) >= 0);
        }
    }
}

mod thresholds {
    use super::*;

    fn spider() -> Graph {
        Graph::from_edges(7, &[(0, 1), (1, 2), (0, 3), (3, 4), (0, 5), (5, 6)])
    }

    #[rstest]
    #[case(generators::path(4), 1)]
    #[case(spider(), 2)]
    fn k_slater_indices(#[case] graph: Graph, #[case] expected: usize) {
        assert_eq!(threshold::k_slater_index(&graph, &ctx()), Ok(expected));
    }

    #[rstest]
    #[case(generators::path(4), 1)]
    #[case(generators::complete_bipartite(2, 3), 3)]
    fn k_residual_indices(#[case] graph: Graph, #[case] expected: usize) {
        assert_eq!(threshold::k_residual_index(&graph, &ctx()), Ok(expected));
    }
}

mod degree_indices {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn strong_harmonic_of_path() {
        assert!(close(indices::strong_harmonic_index(&generators::path(4)), 1.5));
        assert!(close(indices::strong_harmonic_index(&generators::empty(3)), 0.0));
    }

    #[test]
    fn reciprocal_zagreb_family_on_path() {
        let graph = generators::path(4);
        assert!(close(
            indices::reciprocal_first_zagreb_index(&graph).unwrap(),
            2.5
        ));
        assert!(close(indices::reciprocal_second_zagreb_index(&graph), 1.25));
        assert!(close(
            indices::reciprocal_second_zagreb_variation(&graph),
            1.0 / 3.0 + 0.25 + 1.0 / 3.0
        ));
    }

    #[test]
    fn isolated_vertices_make_reciprocals_undefined() {
        let graph = Graph::from_edges(3, &[(0, 1)]);
        assert!(matches!(
            indices::reciprocal_first_zagreb_index(&graph),
            Err(EvalError::UndefinedOnInput { .. })
        ));
    }

    #[test]
    fn hyper_zagreb_reciprocal_rejects_leaves() {
        assert!(indices::reciprocal_hyper_zagreb_index(&generators::path(4)).is_err());
        assert!(close(
            indices::reciprocal_hyper_zagreb_index(&generators::cycle(4)).unwrap(),
            2.0
        ));
    }

    #[test]
    fn harary_reciprocal_of_path() {
        assert!(close(
            indices::reciprocal_harary_index(&generators::path(4)).unwrap(),
            65.0 / 9.0
        ));
        assert!(
            indices::reciprocal_harary_index(&Graph::from_edges(4, &[(0, 1), (2, 3)])).is_err()
        );
    }

    #[test]
    fn inverse_degree_sums_of_path() {
        let graph = generators::path(4);
        assert!(close(
            indices::inverse_degree_plus_one_sum(&graph),
            0.5 + 1.0 / 3.0 + 1.0 / 3.0 + 0.5
        ));
        assert!(close(
            indices::inverse_edge_degree_plus_one_sum(&graph),
            0.5 + 1.0 / 3.0 + 0.5
        ));
    }

    #[test]
    fn augmented_average_edge_degree_of_path() {
        assert!(close(
            indices::augmented_average_edge_degree(&generators::path(4)).unwrap(),
            1.8
        ));
        assert!(indices::augmented_average_edge_degree(&generators::empty(2)).is_err());
    }

    #[test]
    fn two_degree_family_on_path() {
        let graph = generators::path(4);
        assert_eq!(indices::first_zagreb_index_2_degree(&graph), 26);
        assert_eq!(indices::second_zagreb_index_2_degree(&graph), 21);
        assert_eq!(indices::hyper_zagreb_index_2_degree(&graph), 16);
        assert!(close(
            indices::average_degree_2_degree(&graph).unwrap(),
            2.5
        ));
    }
}
