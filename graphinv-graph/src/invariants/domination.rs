//! Domination-type invariants by minimum-subset search.
//!
//! Candidates are enumerated in increasing cardinality, so the first set a
//! feasibility oracle accepts is minimum. Nothing is memoised across
//! calls.

use tracing::debug;

use crate::{Graph, GraphError, Result, subsets};

use super::forcing;

/// Returns `true` when every vertex outside `set` has a neighbour inside
/// it.
#[must_use]
pub fn is_dominating_set(graph: &Graph, set: &[usize]) -> bool {
    let mut chosen = vec![false; graph.order()];
    for &v in set {
        chosen[v] = true;
    }
    graph
        .vertices()
        .filter(|&v| !chosen[v])
        .all(|v| graph.neighbors(v).iter().any(|&u| chosen[u]))
}

fn minimum_set<F>(graph: &Graph, invariant: &'static str, feasible: F) -> Result<Vec<usize>>
where
    F: FnMut(&[usize]) -> bool,
{
    if graph.order() == 0 {
        return Ok(Vec::new());
    }
    let set = subsets::minimum_feasible(graph.order(), feasible).ok_or(
        GraphError::NoFeasibleSubset {
            invariant,
            order: graph.order(),
        },
    )?;
    debug!(
        invariant,
        order = graph.order(),
        size = set.len(),
        "minimum feasible subset found"
    );
    Ok(set)
}

/// The domination number.
///
/// # Errors
/// Reports [`GraphError::NoFeasibleSubset`] if the search exhausts every
/// cardinality, which cannot happen because the full vertex set dominates.
pub fn domination_number(graph: &Graph) -> Result<usize> {
    minimum_set(graph, "domination_number", |set| {
        is_dominating_set(graph, set)
    })
    .map(|set| set.len())
}

/// The total domination number: every vertex, chosen or not, must have a
/// neighbour in the set.
///
/// # Errors
/// No feasible set exists when the graph has an isolated vertex.
pub fn total_domination_number(graph: &Graph) -> Result<usize> {
    minimum_set(graph, "total_domination_number", |set| {
        let mut chosen = vec![false; graph.order()];
        for &v in set {
            chosen[v] = true;
        }
        graph
            .vertices()
            .all(|v| graph.neighbors(v).iter().any(|&u| chosen[u]))
    })
    .map(|set| set.len())
}

/// The connected domination number: a dominating set inducing a connected
/// subgraph.
///
/// # Errors
/// No feasible set exists when the graph is disconnected.
pub fn connected_domination_number(graph: &Graph) -> Result<usize> {
    minimum_set(graph, "connected_domination_number", |set| {
        is_dominating_set(graph, set) && graph.induced(set).is_connected()
    })
    .map(|set| set.len())
}

/// The independent domination number: the smallest maximal independent
/// set.
///
/// # Errors
/// Reports [`GraphError::NoFeasibleSubset`] on exhaustion; a maximal
/// independent set always exists, so this should not occur.
pub fn independent_domination_number(graph: &Graph) -> Result<usize> {
    minimum_set(graph, "independent_domination_number", |set| {
        is_dominating_set(graph, set)
            && set
                .iter()
                .enumerate()
                .all(|(i, &u)| set.iter().skip(i + 1).all(|&v| !graph.has_edge(u, v)))
    })
    .map(|set| set.len())
}

/// The power domination number: the smallest set whose closed
/// neighbourhood is a zero forcing set.
///
/// # Errors
/// Reports [`GraphError::NoFeasibleSubset`] on exhaustion; the full vertex
/// set is always feasible, so this should not occur.
pub fn power_domination_number(graph: &Graph) -> Result<usize> {
    minimum_set(graph, "power_domination_number", |set| {
        let mut seeds: Vec<usize> = set
            .iter()
            .flat_map(|&v| graph.closed_neighborhood(v))
            .collect();
        seeds.sort_unstable();
        seeds.dedup();
        forcing::is_zero_forcing_set(graph, &seeds)
    })
    .map(|set| set.len())
}
