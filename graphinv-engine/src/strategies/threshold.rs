//! Monotone minimal-k threshold scans.
//!
//! Both scans rely on the underlying metric being non-decreasing in `k`
//! and eventually reaching the target, which holds for the degree-based
//! sequences they query. The budget deadline still bounds the loop in
//! case an input violates that assumption.

use graphinv_graph::{Graph, invariants};

use crate::{error::Result, eval::EvalCtx};

/// Smallest `k` with `sub_k_domination_number(G, k)` at least the
/// domination number.
///
/// # Errors
/// Propagates domination-search failures and [`EvalError::Timeout`].
///
/// [`EvalError::Timeout`]: crate::EvalError::Timeout
pub fn k_slater_index(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<usize> {
    let target = invariants::domination::domination_number(graph)?;
    let mut k = 1;
    while invariants::sequence::sub_k_domination_number(graph, k) < target {
        ctx.check_deadline("k_slater_index")?;
        k += 1;
    }
    Ok(k)
}

/// Smallest `k` with the `k`-residue at least the independence number.
///
/// # Errors
/// Returns [`EvalError::Timeout`] when the budget elapses first.
///
/// [`EvalError::Timeout`]: crate::EvalError::Timeout
pub fn k_residual_index(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<usize> {
    #[expect(clippy::cast_precision_loss, reason = "graph orders stay far below 2^52")]
    let target = invariants::independence::independence_number(graph) as f64;
    let mut k = 1;
    while invariants::sequence::k_residue(graph, k) < target {
        ctx.check_deadline("k_residual_index")?;
        k += 1;
    }
    Ok(k)
}
