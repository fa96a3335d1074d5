//! Invariants of the adjacency spectrum.
//!
//! The adjacency matrix of an undirected graph is symmetric, so its
//! eigenvalues are real and the symmetric eigensolver is numerically
//! stable. Rounding happens once, at the reporting step; the invariants
//! sharing a decomposition never round intermediates.

use graphinv_graph::Graph;
use nalgebra::DMatrix;

use crate::error::{EvalError, Result};

fn eigenvalues(graph: &Graph) -> Vec<f64> {
    let n = graph.order();
    let mut adjacency = DMatrix::<f64>::zeros(n, n);
    for (u, v) in graph.edges() {
        adjacency[(u, v)] = 1.0;
        adjacency[(v, u)] = 1.0;
    }
    adjacency.symmetric_eigenvalues().iter().copied().collect()
}

#[expect(clippy::cast_possible_truncation, reason = "eigenvalue sums stay far below 2^52")]
fn report(value: f64) -> i64 {
    value.round() as i64
}

/// Graph energy: the sum of absolute eigenvalues, rounded.
#[must_use]
pub fn graph_energy(graph: &Graph) -> i64 {
    report(eigenvalues(graph).iter().map(|e| e.abs()).sum())
}

/// Sum of squares of the strictly positive eigenvalues, rounded.
#[must_use]
pub fn square_positive_energy(graph: &Graph) -> i64 {
    report(
        eigenvalues(graph)
            .iter()
            .filter(|&&e| e > 0.0)
            .map(|e| e * e)
            .sum(),
    )
}

/// Sum of squares of the strictly negative eigenvalues, rounded.
#[must_use]
pub fn square_negative_energy(graph: &Graph) -> i64 {
    report(
        eigenvalues(graph)
            .iter()
            .filter(|&&e| e < 0.0)
            .map(|e| e * e)
            .sum(),
    )
}

/// The eigenvalue at rank two of the descending spectrum, rounded.
///
/// # Errors
/// Returns [`EvalError::UndefinedOnInput`] on graphs with fewer than two
/// vertices.
pub fn second_largest_eigenvalue(graph: &Graph) -> Result<i64> {
    let mut spectrum = eigenvalues(graph);
    spectrum.sort_by(|a, b| b.total_cmp(a));
    match spectrum.get(1) {
        Some(&second) => Ok(report(second)),
        None => Err(EvalError::UndefinedOnInput {
            property: String::from("second_largest_eigenvalue"),
            reason: "the spectrum has fewer than two eigenvalues",
        }),
    }
}
