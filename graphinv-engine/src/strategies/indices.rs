//! Degree-based topological indices.
//!
//! The reciprocal families sum reciprocals of degree expressions; a zero
//! denominator (an isolated vertex, or a leaf for the hyper-Zagreb
//! reciprocal) makes the index undefined on that input and reports as
//! such rather than silently skipping the offending term.

use graphinv_graph::{Graph, invariants::degree, invariants::distance};

use crate::error::{EvalError, Result};

#[expect(clippy::cast_precision_loss, reason = "degrees stay far below 2^52")]
fn real(n: usize) -> f64 {
    n as f64
}

fn undefined(property: &'static str, reason: &'static str) -> EvalError {
    EvalError::UndefinedOnInput {
        property: String::from(property),
        reason,
    }
}

fn edge_degrees(graph: &Graph) -> Vec<(f64, f64)> {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| (real(graph.degree(u)), real(graph.degree(v))))
        .collect()
}

/// Sum over edges of the smaller endpoint degree reciprocal.
#[must_use]
pub fn strong_harmonic_index(graph: &Graph) -> f64 {
    edge_degrees(graph)
        .iter()
        .map(|&(du, dv)| (1.0 / du).min(1.0 / dv))
        .sum()
}

/// Sum over vertices of `1 / degree^2`.
///
/// # Errors
/// Undefined when the graph has an isolated vertex.
pub fn reciprocal_first_zagreb_index(graph: &Graph) -> Result<f64> {
    graph
        .vertices()
        .map(|v| match graph.degree(v) {
            0 => Err(undefined(
                "reciprocal_first_zagreb_index",
                "an isolated vertex has no degree reciprocal",
            )),
            d => Ok(1.0 / (real(d) * real(d))),
        })
        .sum()
}

/// Sum over edges of `1 / (deg(u) * deg(v))`.
#[must_use]
pub fn reciprocal_second_zagreb_index(graph: &Graph) -> f64 {
    edge_degrees(graph).iter().map(|&(du, dv)| 1.0 / (du * dv)).sum()
}

/// Sum over ordered vertex pairs of `1 / distance^2`.
///
/// # Errors
/// Undefined when some pair is at infinite distance.
pub fn reciprocal_harary_index(graph: &Graph) -> Result<f64> {
    let rows = distance::distance_matrix(graph);
    let n = graph.order();
    let mut total = 0.0;
    for u in 0..n {
        for v in (u + 1)..n {
            let Some(d) = rows[u][v] else {
                return Err(undefined(
                    "reciprocal_harary_index",
                    "some vertex pair is at infinite distance",
                ));
            };
            total += 2.0 / (real(d) * real(d));
        }
    }
    Ok(total)
}

/// Sum over edges of `1 / (deg(u) + deg(v))`.
#[must_use]
pub fn reciprocal_second_zagreb_variation(graph: &Graph) -> f64 {
    edge_degrees(graph).iter().map(|&(du, dv)| 1.0 / (du + dv)).sum()
}

/// Sum over edges of `1 / sqrt(deg(u) * deg(v))`.
#[must_use]
pub fn reciprocal_randic_index(graph: &Graph) -> f64 {
    edge_degrees(graph)
        .iter()
        .map(|&(du, dv)| 1.0 / (du * dv).sqrt())
        .sum()
}

/// Sum over edges of `((deg(u) + deg(v) - 2) / (deg(u) * deg(v)))^3`.
#[must_use]
pub fn reciprocal_augmented_zagreb_index(graph: &Graph) -> f64 {
    edge_degrees(graph)
        .iter()
        .map(|&(du, dv)| ((du + dv - 2.0) / (du * dv)).powi(3))
        .sum()
}

/// Sum over edges of `1 / sqrt(deg(u) + deg(v))`.
#[must_use]
pub fn reciprocal_sum_connectivity_index(graph: &Graph) -> f64 {
    edge_degrees(graph)
        .iter()
        .map(|&(du, dv)| 1.0 / (du + dv).sqrt())
        .sum()
}

/// Sum over vertices of `1 / (degree * (degree - 1))`.
///
/// # Errors
/// Undefined when any vertex has degree below two.
pub fn reciprocal_hyper_zagreb_index(graph: &Graph) -> Result<f64> {
    graph
        .vertices()
        .map(|v| match graph.degree(v) {
            0 | 1 => Err(undefined(
                "reciprocal_hyper_zagreb_index",
                "a vertex of degree below two has no reciprocal term",
            )),
            d => Ok(1.0 / (real(d) * real(d - 1))),
        })
        .sum()
}

/// Sum over edges of `2 sqrt(deg(u) deg(v)) / (deg(u) + deg(v))`.
#[must_use]
pub fn reciprocal_geometric_arithmetic_index(graph: &Graph) -> f64 {
    edge_degrees(graph)
        .iter()
        .map(|&(du, dv)| 2.0 * (du * dv).sqrt() / (du + dv))
        .sum()
}

/// Sum over vertices of `1 / (degree + 1)`.
#[must_use]
pub fn inverse_degree_plus_one_sum(graph: &Graph) -> f64 {
    graph.vertices().map(|v| 1.0 / (real(graph.degree(v)) + 1.0)).sum()
}

/// Sum over vertices of `1 / (degree + 2)`.
#[must_use]
pub fn inverse_degree_plus_two_sum(graph: &Graph) -> f64 {
    graph.vertices().map(|v| 1.0 / (real(graph.degree(v)) + 2.0)).sum()
}

/// Sum over edges of `1 / (edge_degree + 1)`.
#[must_use]
pub fn inverse_edge_degree_plus_one_sum(graph: &Graph) -> f64 {
    graph
        .edges()
        .into_iter()
        .map(|e| 1.0 / (real(degree::edge_degree(graph, e)) + 1.0))
        .sum()
}

/// Sum over edges of `1 / (edge_degree + 2)`.
#[must_use]
pub fn inverse_edge_degree_plus_two_sum(graph: &Graph) -> f64 {
    graph
        .edges()
        .into_iter()
        .map(|e| 1.0 / (real(degree::edge_degree(graph, e)) + 2.0))
        .sum()
}

/// The average edge degree folded into `2m / (avg + 2)`.
///
/// # Errors
/// Undefined on edgeless graphs.
pub fn augmented_average_edge_degree(graph: &Graph) -> Result<f64> {
    let edges = graph.edges();
    if edges.is_empty() {
        return Err(undefined(
            "augmented_average_edge_degree",
            "an edgeless graph has no average edge degree",
        ));
    }
    let m = real(edges.len());
    let total: f64 = edges
        .into_iter()
        .map(|e| real(degree::edge_degree(graph, e)))
        .sum();
    Ok(2.0 * m / (total / m + 2.0))
}

/// Sum over vertices of the squared 2-degree.
#[must_use]
pub fn first_zagreb_index_2_degree(graph: &Graph) -> usize {
    graph
        .vertices()
        .map(|v| {
            let t = degree::two_degree(graph, v);
            t * t
        })
        .sum()
}

/// Sum over edges of the endpoint 2-degree product.
#[must_use]
pub fn second_zagreb_index_2_degree(graph: &Graph) -> usize {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| degree::two_degree(graph, u) * degree::two_degree(graph, v))
        .sum()
}

/// Sum over vertices of `1 / two_degree^2`.
///
/// # Errors
/// Undefined when the graph has an isolated vertex.
pub fn reciprocal_first_zagreb_index_2_degree(graph: &Graph) -> Result<f64> {
    graph
        .vertices()
        .map(|v| match degree::two_degree(graph, v) {
            0 => Err(undefined(
                "reciprocal_first_zagreb_index_2_degree",
                "an isolated vertex has no 2-degree reciprocal",
            )),
            t => Ok(1.0 / (real(t) * real(t))),
        })
        .sum()
}

/// Sum over edges of `1 / (two_degree(u) * two_degree(v))`.
#[must_use]
pub fn reciprocal_second_zagreb_index_2_degree(graph: &Graph) -> f64 {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| {
            1.0 / (real(degree::two_degree(graph, u)) * real(degree::two_degree(graph, v)))
        })
        .sum()
}

/// Mean 2-degree over the vertex set.
///
/// # Errors
/// Undefined on the empty graph.
pub fn average_degree_2_degree(graph: &Graph) -> Result<f64> {
    let n = graph.order();
    if n == 0 {
        return Err(undefined(
            "average_degree_2_degree",
            "the graph has no vertices",
        ));
    }
    let total: usize = graph.vertices().map(|v| degree::two_degree(graph, v)).sum();
    Ok(real(total) / real(n))
}

/// Sum over edges of `1 / sqrt(two_degree(u) * two_degree(v))`.
#[must_use]
pub fn reciprocal_randic_index_2_degree(graph: &Graph) -> f64 {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| {
            1.0 / (real(degree::two_degree(graph, u)) * real(degree::two_degree(graph, v))).sqrt()
        })
        .sum()
}

/// Sum over edges of `1 / sqrt(two_degree(u) + two_degree(v))`.
#[must_use]
pub fn reciprocal_sum_connectivity_index_2_degree(graph: &Graph) -> f64 {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| {
            1.0 / (real(degree::two_degree(graph, u)) + real(degree::two_degree(graph, v))).sqrt()
        })
        .sum()
}

/// Sum over vertices of `two_degree * (two_degree - 1)`.
#[must_use]
pub fn hyper_zagreb_index_2_degree(graph: &Graph) -> usize {
    graph
        .vertices()
        .map(|v| {
            let t = degree::two_degree(graph, v);
            t * t.saturating_sub(1)
        })
        .sum()
}

/// Sum over edges of the 2-degree geometric-arithmetic ratio.
#[must_use]
pub fn reciprocal_geometric_arithmetic_index_2_degree(graph: &Graph) -> f64 {
    graph
        .edges()
        .into_iter()
        .map(|(u, v)| {
            let tu = real(degree::two_degree(graph, u));
            let tv = real(degree::two_degree(graph, v));
            2.0 * (tu * tv).sqrt() / (tu + tv)
        })
        .sum()
}
