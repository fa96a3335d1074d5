//! Degree statistics and local degree-like quantities.

use crate::{Graph, GraphError, Result};

/// The minimum vertex degree.
///
/// # Errors
/// Undefined on the empty graph.
pub fn min_degree(graph: &Graph) -> Result<usize> {
    graph
        .vertices()
        .map(|v| graph.degree(v))
        .min()
        .ok_or(GraphError::Undefined {
            invariant: "min_degree",
            reason: "the graph has no vertices",
        })
}

/// The maximum vertex degree.
///
/// # Errors
/// Undefined on the empty graph.
pub fn max_degree(graph: &Graph) -> Result<usize> {
    graph
        .vertices()
        .map(|v| graph.degree(v))
        .max()
        .ok_or(GraphError::Undefined {
            invariant: "max_degree",
            reason: "the graph has no vertices",
        })
}

/// The degree sequence in non-increasing order.
#[must_use]
pub fn degree_sequence(graph: &Graph) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    degrees
}

/// The average vertex degree `2m / n`.
///
/// # Errors
/// Undefined on the empty graph.
pub fn average_degree(graph: &Graph) -> Result<f64> {
    if graph.order() == 0 {
        return Err(GraphError::Undefined {
            invariant: "average_degree",
            reason: "the graph has no vertices",
        });
    }
    #[expect(clippy::cast_precision_loss, reason = "orders are far below 2^52")]
    Ok(2.0 * graph.size() as f64 / graph.order() as f64)
}

/// The 2-degree of `v`: the number of vertices within distance two,
/// excluding `v` itself.
#[must_use]
pub fn two_degree(graph: &Graph, v: usize) -> usize {
    graph
        .distances_from(v)
        .into_iter()
        .enumerate()
        .filter(|&(u, d)| u != v && matches!(d, Some(1 | 2)))
        .count()
}

/// The degree of an edge: the number of other edges sharing an endpoint
/// with it.
#[must_use]
pub fn edge_degree(graph: &Graph, edge: (usize, usize)) -> usize {
    let (u, v) = edge;
    graph.degree(u) + graph.degree(v) - 2
}
