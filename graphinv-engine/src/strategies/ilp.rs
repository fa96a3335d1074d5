//! Integer-programme formulations of domination-type invariants.
//!
//! Each formulation builds a fresh binary model per call and hands it to
//! the context's solver. All coefficients are integers; the double Roman
//! coverage constraint is doubled to clear its half-weight term. The
//! models are always feasible on the intended inputs (assigning every
//! vertex its maximum role dominates everything), so an infeasible status
//! is a solver failure, not a valid answer.

use graphinv_graph::Graph;
use graphinv_ilp::{
    LinExpr, Model, ModelBuilder, Solution, SolveOutcome, SolverError, VarId,
};

use crate::{
    error::{EvalError, Result},
    eval::EvalCtx,
};

fn solve(model: &Model, ctx: &EvalCtx<'_>, property: &'static str) -> Result<Solution> {
    match ctx.solver.solve(model, ctx.limits()) {
        Ok(SolveOutcome::Optimal(solution)) => Ok(solution),
        Ok(SolveOutcome::Infeasible) => Err(EvalError::SolverFailure {
            property: String::from(property),
            status: "infeasible",
        }),
        Err(SolverError::DeadlineExceeded { .. }) => Err(EvalError::Timeout {
            property: String::from(property),
        }),
        Err(_) => Err(EvalError::SolverFailure {
            property: String::from(property),
            status: "solver error",
        }),
    }
}

/// Minimum weight of a Roman dominating function.
///
/// Roles per vertex: weight 1 (`x`) or weight 2 (`y`). Every vertex must
/// carry a role or have a neighbour of weight 2.
///
/// # Errors
/// Propagates [`EvalError::SolverFailure`] and [`EvalError::Timeout`].
pub fn roman_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<i64> {
    let n = graph.order();
    let mut builder = ModelBuilder::minimise();
    let x = builder.binaries(n);
    let y = builder.binaries(n);
    let mut objective = LinExpr::new();
    for v in 0..n {
        objective = objective.term(x[v], 1).term(y[v], 2);
    }
    builder.objective(objective);
    for v in 0..n {
        let mut cover = LinExpr::new().term(x[v], 1).term(y[v], 1);
        for u in graph.neighbors(v) {
            cover = cover.term(y[u], 1);
        }
        builder.ge(cover, 1);
        builder.le(LinExpr::new().term(x[v], 1).term(y[v], 1), 1);
    }
    Ok(solve(&builder.build(), ctx, "roman_domination_number")?.objective())
}

/// Minimum weight of a double Roman dominating function.
///
/// Roles per vertex: weight 1 (`x`), 2 (`y`), or 3 (`z`). The coverage
/// constraint is the standard one with its half-weight term cleared:
/// `2x_v + 2y_v + 2z_v + sum y_u + 2 sum z_u >= 2` over neighbours `u`,
/// and a weight-1 vertex needs a positively weighted neighbour.
///
/// # Errors
/// Propagates [`EvalError::SolverFailure`] and [`EvalError::Timeout`].
pub fn double_roman_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<i64> {
    let n = graph.order();
    let mut builder = ModelBuilder::minimise();
    let x = builder.binaries(n);
    let y = builder.binaries(n);
    let z = builder.binaries(n);
    let mut objective = LinExpr::new();
    for v in 0..n {
        objective = objective.term(x[v], 1).term(y[v], 2).term(z[v], 3);
    }
    builder.objective(objective);
    for v in 0..n {
        let mut cover = LinExpr::new().term(x[v], 2).term(y[v], 2).term(z[v], 2);
        let mut support = LinExpr::new().term(x[v], -1);
        for u in graph.neighbors(v) {
            cover = cover.term(y[u], 1).term(z[u], 2);
            support = support.term(y[u], 1).term(z[u], 1);
        }
        builder.ge(cover, 2);
        builder.ge(support, 0);
        builder.le(
            LinExpr::new().term(x[v], 1).term(y[v], 1).term(z[v], 1),
            1,
        );
    }
    Ok(solve(&builder.build(), ctx, "double_roman_domination_number")?.objective())
}

fn rainbow_domination_number(
    graph: &Graph,
    k: usize,
    ctx: &EvalCtx<'_>,
    property: &'static str,
) -> Result<i64> {
    let n = graph.order();
    let mut builder = ModelBuilder::minimise();
    // colored[v][i] assigns colour i+1 to v; uncolored[v] leaves it bare.
    let colored: Vec<Vec<VarId>> = (0..n).map(|_| builder.binaries(k)).collect();
    let uncolored = builder.binaries(n);
    let mut objective = LinExpr::new();
    for row in &colored {
        for &var in row {
            objective = objective.term(var, 1);
        }
    }
    builder.objective(objective);
    for v in 0..n {
        let mut choice = LinExpr::new().term(uncolored[v], 1);
        for &var in &colored[v] {
            choice = choice.term(var, 1);
        }
        builder.eq(choice, 1);
        // A bare vertex needs every colour represented in its
        // neighbourhood.
        for i in 0..k {
            let mut seen = LinExpr::new().term(uncolored[v], -1);
            for u in graph.neighbors(v) {
                seen = seen.term(colored[u][i], 1);
            }
            builder.ge(seen, 0);
        }
    }
    Ok(solve(&builder.build(), ctx, property)?.objective())
}

/// Minimum number of coloured vertices in a 2-rainbow dominating
/// assignment with one colour per vertex.
///
/// # Errors
/// Propagates [`EvalError::SolverFailure`] and [`EvalError::Timeout`].
pub fn two_rainbow_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<i64> {
    rainbow_domination_number(graph, 2, ctx, "two_rainbow_domination_number")
}

/// Minimum number of coloured vertices in a 3-rainbow dominating
/// assignment with one colour per vertex.
///
/// # Errors
/// Propagates [`EvalError::SolverFailure`] and [`EvalError::Timeout`].
pub fn three_rainbow_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<i64> {
    rainbow_domination_number(graph, 3, ctx, "three_rainbow_domination_number")
}

/// Minimum size of a restrained dominating set: a dominating set whose
/// complement induces no isolated vertex.
///
/// # Errors
/// Propagates [`EvalError::SolverFailure`] and [`EvalError::Timeout`].
pub fn restrained_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<i64> {
    let n = graph.order();
    let mut builder = ModelBuilder::minimise();
    let x = builder.binaries(n);
    builder.objective(LinExpr::sum(x.iter().copied()));
    for v in 0..n {
        let neighbors = graph.neighbors(v);
        let mut cover = LinExpr::new().term(x[v], 1);
        // sum over neighbours of (1 - x_u) >= 1 - x_v, rearranged to keep
        // integer terms on the left.
        let mut outside = LinExpr::new().term(x[v], -1);
        for &u in &neighbors {
            cover = cover.term(x[u], 1);
            outside = outside.term(x[u], 1);
        }
        builder.ge(cover, 1);
        let degree = i64::try_from(neighbors.len()).unwrap_or(i64::MAX);
        builder.le(outside, degree - 1);
    }
    Ok(solve(&builder.build(), ctx, "restrained_domination_number")?.objective())
}

/// Minimum size of a semitotal dominating set: a dominating set in which
/// every chosen vertex has another chosen vertex within distance two.
///
/// A one-vertex graph admits no such set; the model is infeasible there
/// and reports a solver failure.
///
/// # Errors
/// Propagates [`EvalError::SolverFailure`] and [`EvalError::Timeout`].
pub fn semitotal_domination_number(graph: &Graph, ctx: &EvalCtx<'_>) -> Result<i64> {
    let n = graph.order();
    let mut builder = ModelBuilder::minimise();
    let x = builder.binaries(n);
    builder.objective(LinExpr::sum(x.iter().copied()));
    for v in 0..n {
        let mut cover = LinExpr::new().term(x[v], 1);
        for u in graph.neighbors(v) {
            cover = cover.term(x[u], 1);
        }
        builder.ge(cover, 1);

        let mut witness = LinExpr::new().term(x[v], 1);
        for u in within_distance_two(graph, v) {
            witness = witness.term(x[u], -1);
        }
        builder.le(witness, 0);
    }
    Ok(solve(&builder.build(), ctx, "semitotal_domination_number")?.objective())
}

/// Vertices at distance one or two from `v`, excluding `v` itself.
fn within_distance_two(graph: &Graph, v: usize) -> Vec<usize> {
    let mut near: Vec<usize> = graph
        .neighbors(v)
        .into_iter()
        .flat_map(|u| {
            let mut block = graph.neighbors(u);
            block.push(u);
            block
        })
        .filter(|&u| u != v)
        .collect();
    near.sort_unstable();
    near.dedup();
    near
}
