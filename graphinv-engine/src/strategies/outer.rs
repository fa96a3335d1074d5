//! Outer-connected domination by brute force.

use graphinv_graph::{Graph, invariants::domination, subsets};

use crate::{
    error::{EvalError, Result},
    eval::EvalCtx,
};

const DEADLINE_CHECK_INTERVAL: u64 = 256;

/// Returns `true` when `candidate` dominates the graph and its
/// complement induces a connected subgraph. A complement of at most one
/// vertex is vacuously connected.
#[must_use]
pub fn is_outer_connected_dominating_set(graph: &Graph, candidate: &[usize]) -> bool {
    if !domination::is_dominating_set(graph, candidate) {
        return false;
    }
    let mut outside = vec![true; graph.order()];
    for &v in candidate {
        outside[v] = false;
    }
    let components = graph.components_within(&outside);
    components.len() <= 1
}

/// The outer-connected domination number, by increasing-cardinality
/// brute force.
///
/// # Errors
/// Returns [`EvalError::Timeout`] when the budget elapses and
/// [`EvalError::NoFeasibleSubsetFound`] if no subset qualifies (the full
/// vertex set always does on a non-empty graph).
pub fn outer_connected_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<usize> {
    let mut candidates: u64 = 0;
    for subset in subsets::increasing_by_size(graph.order()) {
        candidates += 1;
        if candidates % DEADLINE_CHECK_INTERVAL == 0 {
            ctx.check_deadline("outer_connected_domination_number")?;
        }
        if is_outer_connected_dominating_set(graph, &subset) {
            return Ok(subset.len());
        }
    }
    Err(EvalError::NoFeasibleSubsetFound {
        property: String::from("outer_connected_domination_number"),
        order: graph.order(),
    })
}
