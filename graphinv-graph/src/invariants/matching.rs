//! Matching invariants and the line-graph reductions built on them.

use petgraph::algo::matching::maximum_matching;

use crate::{Graph, GraphError, Result};

use super::domination;

/// The matching number: the size of a maximum matching.
#[must_use]
pub fn matching_number(graph: &Graph) -> usize {
    maximum_matching(graph.inner()).edges().count()
}

/// The minimum maximal matching number: the independent domination number
/// of the line graph.
///
/// # Errors
/// Propagates search exhaustion, which should not occur.
pub fn min_maximal_matching_number(graph: &Graph) -> Result<usize> {
    domination::independent_domination_number(&graph.line_graph())
}

/// The edge domination number: the domination number of the line graph.
///
/// # Errors
/// Propagates search exhaustion, which should not occur.
pub fn edge_domination_number(graph: &Graph) -> Result<usize> {
    domination::domination_number(&graph.line_graph())
}

/// The minimum edge cover number, by Gallai's identity
/// `n - matching_number`.
///
/// # Errors
/// Undefined when the graph is empty or has an isolated vertex, since no
/// edge can cover such a vertex.
pub fn min_edge_cover_number(graph: &Graph) -> Result<usize> {
    if graph.order() == 0 || graph.vertices().any(|v| graph.degree(v) == 0) {
        return Err(GraphError::Undefined {
            invariant: "min_edge_cover",
            reason: "an isolated vertex cannot be covered by an edge",
        });
    }
    Ok(graph.order() - matching_number(graph))
}
