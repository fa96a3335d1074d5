//! Positive-semidefinite zero forcing.
//!
//! The PSD colour-change rule is component-restricted: with black set
//! `B`, split the white vertices into connected components of the graph
//! minus `B`; a black vertex forces a white neighbour that is its only
//! white neighbour inside that component. One sweep collects every
//! forceable vertex and blackens them simultaneously; sweeps repeat to a
//! fixed point. Black only grows, so the closure terminates.

use graphinv_graph::{Graph, subsets};

use crate::{
    error::{EvalError, Result},
    eval::EvalCtx,
};

const DEADLINE_CHECK_INTERVAL: u64 = 256;

/// The derived (closed) black set of `black`, sorted.
#[must_use]
pub fn psd_closure(graph: &Graph, black: &[usize]) -> Vec<usize> {
    let n = graph.order();
    let mut is_black = vec![false; n];
    for &v in black {
        is_black[v] = true;
    }
    loop {
        let white: Vec<bool> = is_black.iter().map(|&b| !b).collect();
        let mut forced = Vec::new();
        for component in graph.components_within(&white) {
            for v in 0..n {
                if !is_black[v] {
                    continue;
                }
                let white_neighbors: Vec<usize> = graph
                    .neighbors(v)
                    .into_iter()
                    .filter(|u| component.contains(u))
                    .collect();
                if let [only] = white_neighbors[..] {
                    forced.push(only);
                }
            }
        }
        forced.retain(|&w| !is_black[w]);
        if forced.is_empty() {
            break;
        }
        for w in forced {
            is_black[w] = true;
        }
    }
    (0..n).filter(|&v| is_black[v]).collect()
}

/// Returns `true` when the closure of `black` covers every vertex.
#[must_use]
pub fn is_psd_forcing_set(graph: &Graph, black: &[usize]) -> bool {
    psd_closure(graph, black).len() == graph.order()
}

/// The PSD zero forcing number, by increasing-cardinality brute force
/// with the closure as feasibility oracle.
///
/// # Errors
/// Returns [`EvalError::Timeout`] when the budget elapses and
/// [`EvalError::NoFeasibleSubsetFound`] if the search exhausts (only
/// possible on the empty graph, which has no candidate subsets).
pub fn psd_zero_forcing_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<usize> {
    let mut candidates: u64 = 0;
    for black in subsets::increasing_by_size(graph.order()) {
        candidates += 1;
        if candidates % DEADLINE_CHECK_INTERVAL == 0 {
            ctx.check_deadline("positive_semidefinite_zero_forcing_number")?;
        }
        if is_psd_forcing_set(graph, &black) {
            return Ok(black.len());
        }
    }
    Err(EvalError::NoFeasibleSubsetFound {
        property: String::from("positive_semidefinite_zero_forcing_number"),
        order: graph.order(),
    })
}
