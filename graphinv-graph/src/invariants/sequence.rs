//! Degree-sequence invariants derived from the Havel–Hakimi elimination.
//!
//! The elimination sequence of a graph records, in order, the degrees
//! removed by repeatedly deleting a vertex of maximum residual degree and
//! decrementing its neighbours, followed by the zeros left at the end.
//! Residue, k-residue, the Slater number, and the sub-k-domination family
//! all read off this sequence or the sorted degree sequence directly.

use crate::{Graph, GraphError, Result};

use super::degree::degree_sequence;

/// The Havel–Hakimi elimination sequence, non-increasing.
#[must_use]
pub fn elimination_sequence(graph: &Graph) -> Vec<usize> {
    let mut degrees = degree_sequence(graph);
    let mut sequence = Vec::with_capacity(degrees.len());
    while let Some(&largest) = degrees.first() {
        if largest == 0 {
            sequence.extend(degrees.iter().copied());
            break;
        }
        degrees.remove(0);
        for entry in degrees.iter_mut().take(largest) {
            *entry = entry.saturating_sub(1);
        }
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        sequence.push(largest);
    }
    sequence
}

/// The residue: the number of zeros in the elimination sequence.
#[must_use]
pub fn residue(graph: &Graph) -> usize {
    elimination_sequence(graph)
        .into_iter()
        .filter(|&d| d == 0)
        .count()
}

/// The k-residue `R_k(G) = (1/k) * sum_{i=0}^{k-1} (k - i) * f_i`, where
/// `f_i` counts occurrences of `i` in the elimination sequence.
#[must_use]
pub fn k_residue(graph: &Graph, k: usize) -> f64 {
    let sequence = elimination_sequence(graph);
    let weighted: usize = (0..k)
        .map(|i| (k - i) * sequence.iter().filter(|&&d| d == i).count())
        .sum();
    #[expect(clippy::cast_precision_loss, reason = "orders are far below 2^52")]
    let value = weighted as f64 / k as f64;
    value
}

/// The sub-k-domination number: the smallest `t` with
/// `t + (d_1 + … + d_t)/k >= n` over the non-increasing degree sequence.
#[must_use]
pub fn sub_k_domination_number(graph: &Graph, k: usize) -> usize {
    let degrees = degree_sequence(graph);
    let n = graph.order();
    let mut prefix = 0usize;
    for (t, &d) in degrees.iter().enumerate() {
        prefix += d;
        // t + 1 + prefix/k >= n, kept in integers.
        if (t + 1) * k + prefix >= n * k {
            return t + 1;
        }
    }
    n
}

/// The Slater number `sub_1(G)`, a lower bound on the domination number.
#[must_use]
pub fn slater(graph: &Graph) -> usize {
    sub_k_domination_number(graph, 1)
}

/// The sub-total-domination number: the smallest `t` with
/// `d_1 + … + d_t >= n`.
///
/// # Errors
/// Undefined when even the full degree sum falls short of `n`, which
/// happens exactly when the graph has an isolated vertex or no vertices.
pub fn sub_total_domination_number(graph: &Graph) -> Result<usize> {
    let degrees = degree_sequence(graph);
    let n = graph.order();
    let mut prefix = 0usize;
    for (t, &d) in degrees.iter().enumerate() {
        prefix += d;
        if prefix >= n {
            return Ok(t + 1);
        }
    }
    Err(GraphError::Undefined {
        invariant: "sub_total_domination_number",
        reason: "the total degree sum is below the order",
    })
}

/// The annihilation number: the largest `t` such that the `t` smallest
/// degrees sum to at most the size of the graph.
#[must_use]
pub fn annihilation_number(graph: &Graph) -> usize {
    let mut degrees = degree_sequence(graph);
    degrees.reverse();
    let m = graph.size();
    let mut prefix = 0usize;
    let mut best = 0usize;
    for (t, &d) in degrees.iter().enumerate() {
        prefix += d;
        if prefix <= m {
            best = t + 1;
        } else {
            break;
        }
    }
    best
}
