//! Distance invariants: eccentricities, diameter, radius, triameter, and
//! the Wiener index. All are undefined on disconnected graphs.

use crate::{Graph, GraphError, Result};

/// All-pairs shortest-path distances; `None` marks unreachable pairs.
#[must_use]
pub fn distance_matrix(graph: &Graph) -> Vec<Vec<Option<usize>>> {
    graph.vertices().map(|v| graph.distances_from(v)).collect()
}

fn connected_distances(graph: &Graph, invariant: &'static str) -> Result<Vec<Vec<usize>>> {
    let undefined = GraphError::Undefined {
        invariant,
        reason: "the graph is empty or disconnected",
    };
    if graph.order() == 0 {
        return Err(undefined);
    }
    distance_matrix(graph)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .collect::<Option<Vec<usize>>>()
                .ok_or_else(|| undefined.clone())
        })
        .collect()
}

/// The eccentricity of `v`: its distance to a farthest vertex.
///
/// # Errors
/// Undefined when some vertex is unreachable from `v`.
pub fn eccentricity(graph: &Graph, v: usize) -> Result<usize> {
    graph
        .distances_from(v)
        .into_iter()
        .try_fold(0usize, |acc, dist| dist.map(|value| acc.max(value)))
        .ok_or(GraphError::Undefined {
            invariant: "eccentricity",
            reason: "some vertex is unreachable",
        })
}

/// The diameter: the maximum eccentricity.
///
/// # Errors
/// Undefined on empty or disconnected graphs.
pub fn diameter(graph: &Graph) -> Result<usize> {
    let rows = connected_distances(graph, "diameter")?;
    Ok(rows
        .iter()
        .flat_map(|row| row.iter().copied())
        .max()
        .unwrap_or(0))
}

/// The radius: the minimum eccentricity.
///
/// # Errors
/// Undefined on empty or disconnected graphs.
pub fn radius(graph: &Graph) -> Result<usize> {
    let rows = connected_distances(graph, "radius")?;
    Ok(rows
        .iter()
        .map(|row| row.iter().copied().max().unwrap_or(0))
        .min()
        .unwrap_or(0))
}

/// The triameter: the maximum of `d(u,v) + d(v,w) + d(u,w)` over vertex
/// triples.
///
/// # Errors
/// Undefined on disconnected graphs and graphs of order below three.
pub fn triameter(graph: &Graph) -> Result<usize> {
    if graph.order() < 3 {
        return Err(GraphError::Undefined {
            invariant: "triameter",
            reason: "the graph has fewer than three vertices",
        });
    }
    let rows = connected_distances(graph, "triameter")?;
    let n = graph.order();
    let mut best = 0usize;
    for u in 0..n {
        for v in (u + 1)..n {
            for w in (v + 1)..n {
                best = best.max(rows[u][v] + rows[v][w] + rows[u][w]);
            }
        }
    }
    Ok(best)
}

/// The Wiener index: the sum of distances over unordered vertex pairs.
///
/// # Errors
/// Undefined on empty or disconnected graphs.
pub fn wiener_index(graph: &Graph) -> Result<usize> {
    let rows = connected_distances(graph, "wiener_index")?;
    let total: usize = rows
        .iter()
        .enumerate()
        .map(|(u, row)| row.iter().skip(u + 1).sum::<usize>())
        .sum();
    Ok(total)
}
