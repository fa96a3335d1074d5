//! Structural recognisers built on induced-subgraph containment.

use std::sync::OnceLock;

use graphinv_graph::{Graph, generators, structure};

/// Index of the pentagon within [`forbidden_subgraphs`], skipped by the
/// line-graph recogniser.
const PENTAGON: usize = 5;

/// The nine forbidden subgraphs of Beineke's line-graph
/// characterisation: claw, K5 minus an edge, K3,3 minus an edge,
/// diamond, banner, pentagon, butterfly, C4 with a dominating extra
/// vertex, and a triangle with a pendant edge. Built once, process-wide.
pub fn forbidden_subgraphs() -> &'static [Graph] {
    static CATALOG: OnceLock<Vec<Graph>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut house = Vec::new();
        for u in 0..5 {
            for v in (u + 1)..5 {
                if (u, v) != (0, 1) {
                    house.push((u, v));
                }
            }
        }
        let mut fork = Vec::new();
        for u in 0..3 {
            for v in 3..6 {
                if (u, v) != (0, 3) {
                    fork.push((u, v));
                }
            }
        }
        vec![
            generators::star(3),
            Graph::from_edges(5, &house),
            Graph::from_edges(6, &fork),
            Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]),
            Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 0), (4, 2)]),
            generators::cycle(5),
            Graph::from_edges(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 0)]),
            Graph::from_edges(
                5,
                &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 0), (4, 1), (4, 2)],
            ),
            Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]),
        ]
    })
}

/// Returns `true` when no four vertices induce a diamond (K4 minus one
/// edge). Note K4 itself is diamond-free: its only 4-vertex induced
/// subgraph is K4.
#[must_use]
pub fn is_diamond_free(graph: &Graph) -> bool {
    let diamond = &forbidden_subgraphs()[3];
    !graph.contains_induced(diamond)
}

/// Returns `true` when the graph is connected and every biconnected
/// component induces a clique.
#[must_use]
pub fn is_block_graph(graph: &Graph) -> bool {
    if !graph.is_connected() {
        return false;
    }
    structure::blocks::biconnected_components(graph)
        .iter()
        .all(|block| structure::is_complete(&graph.induced(block)))
}

/// Beineke's forbidden-subgraph line-graph test with the pentagon
/// deliberately allowed. Downstream conjecture filtering relies on the
/// relaxed variant, so the pentagon stays off the forbidden list here.
#[must_use]
pub fn is_line_graph_modified(graph: &Graph) -> bool {
    forbidden_subgraphs()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != PENTAGON)
        .all(|(_, forbidden)| !graph.contains_induced(forbidden))
}
