//! Standard zero forcing: closure, feasibility oracle, and the minimum
//! forcing-set search.
//!
//! The colour-change rule: a black vertex with exactly one white neighbour
//! forces that neighbour black. Each sweep collects every forced vertex
//! and applies them simultaneously; the closure is the fixed point.

use crate::{Graph, GraphError, Result, subsets};

/// The zero-forcing closure of `black`: the derived set after applying the
/// colour-change rule to a fixed point. Returned sorted.
#[must_use]
pub fn closure(graph: &Graph, black: &[usize]) -> Vec<usize> {
    let n = graph.order();
    let mut is_black = vec![false; n];
    for &v in black {
        is_black[v] = true;
    }
    loop {
        let mut forced = Vec::new();
        for v in 0..n {
            if !is_black[v] {
                continue;
            }
            let white: Vec<usize> = graph
                .neighbors(v)
                .into_iter()
                .filter(|&u| !is_black[u])
                .collect();
            if let [only] = white[..] {
                forced.push(only);
            }
        }
        forced.sort_unstable();
        forced.dedup();
        if forced.is_empty() {
            break;
        }
        for v in forced {
            is_black[v] = true;
        }
    }
    (0..n).filter(|&v| is_black[v]).collect()
}

/// Returns `true` when the closure of `black` is the whole vertex set.
#[must_use]
pub fn is_zero_forcing_set(graph: &Graph, black: &[usize]) -> bool {
    closure(graph, black).len() == graph.order()
}

/// The zero forcing number: the size of a minimum zero forcing set.
///
/// # Errors
/// Reports [`GraphError::NoFeasibleSubset`] on exhaustion; the full vertex
/// set always forces itself, so this should not occur.
pub fn zero_forcing_number(graph: &Graph) -> Result<usize> {
    if graph.order() == 0 {
        return Ok(0);
    }
    subsets::minimum_feasible(graph.order(), |set| is_zero_forcing_set(graph, set))
        .map(|set| set.len())
        .ok_or(GraphError::NoFeasibleSubset {
            invariant: "zero_forcing_number",
            order: graph.order(),
        })
}
