//! Unit tests for the branch-and-bound backend.

use std::time::Instant;

use proptest::prelude::*;
use rstest::rstest;

use crate::{
    Cmp, LinExpr, ModelBuilder, SolverError,
    model::{Model, Sense, VarId},
};

use super::{BranchAndBound, Solve, SolveLimits, SolveOutcome};

fn solve(model: &Model) -> SolveOutcome {
    #[expect(clippy::unwrap_used, reason = "no deadline is set")]
    BranchAndBound
        .solve(model, SolveLimits::default())
        .unwrap()
}

fn optimal(model: &Model) -> i64 {
    match solve(model) {
        SolveOutcome::Optimal(solution) => solution.objective(),
        SolveOutcome::Infeasible => panic!("expected a feasible model"),
    }
}

#[rstest]
#[case(2, 1)]
#[case(3, 1)]
#[case(4, 2)]
#[case(5, 2)]
#[case(6, 3)]
fn vertex_cover_of_a_path(#[case] n: usize, #[case] expected: i64) {
    // Pn as a covering programme: pick an endpoint of every edge. The
    // minimum is floor(n / 2).
    let mut builder = ModelBuilder::minimise();
    let x = builder.binaries(n);
    builder.objective(LinExpr::sum(x.iter().copied()));
    for u in 0..n - 1 {
        builder.ge(LinExpr::new().term(x[u], 1).term(x[u + 1], 1), 1);
    }
    assert_eq!(optimal(&builder.build()), expected);
}

#[test]
fn independent_set_of_a_cycle() {
    let mut builder = ModelBuilder::maximise();
    let x = builder.binaries(5);
    builder.objective(LinExpr::sum(x.iter().copied()));
    for u in 0..5 {
        builder.le(LinExpr::new().term(x[u], 1).term(x[(u + 1) % 5], 1), 1);
    }
    assert_eq!(optimal(&builder.build()), 2);
}

#[test]
fn weighted_objective_picks_the_cheap_level() {
    // min 2a + 3b subject to a + b >= 1.
    let mut builder = ModelBuilder::minimise();
    let a = builder.binary();
    let b = builder.binary();
    builder.objective(LinExpr::new().term(a, 2).term(b, 3));
    builder.ge(LinExpr::new().term(a, 1).term(b, 1), 1);
    let SolveOutcome::Optimal(solution) = solve(&builder.build()) else {
        panic!("expected a feasible model");
    };
    assert_eq!(solution.objective(), 2);
    assert!(solution.value(a));
    assert!(!solution.value(b));
    assert_eq!(solution.support(), vec![0]);
}

#[test]
fn contradictory_bounds_are_infeasible() {
    let mut builder = ModelBuilder::minimise();
    let a = builder.binary();
    builder.ge(LinExpr::new().term(a, 1), 1);
    builder.le(LinExpr::new().term(a, 1), 0);
    assert_eq!(solve(&builder.build()), SolveOutcome::Infeasible);
}

#[test]
fn unreachable_sum_is_infeasible() {
    let mut builder = ModelBuilder::maximise();
    let x = builder.binaries(2);
    builder.ge(LinExpr::sum(x.iter().copied()), 3);
    assert_eq!(solve(&builder.build()), SolveOutcome::Infeasible);
}

#[test]
fn equality_constraints_hold_exactly() {
    let mut builder = ModelBuilder::maximise();
    let x = builder.binaries(4);
    builder.objective(LinExpr::new().term(x[0], 5).term(x[1], 1));
    builder.eq(LinExpr::sum(x.iter().copied()), 2);
    let SolveOutcome::Optimal(solution) = solve(&builder.build()) else {
        panic!("expected a feasible model");
    };
    assert_eq!(solution.objective(), 6);
    assert_eq!(solution.support(), vec![0, 1]);
}

#[test]
fn empty_model_is_trivially_optimal() {
    let builder = ModelBuilder::minimise();
    assert_eq!(optimal(&builder.build()), 0);
}

#[test]
fn negative_coefficients_are_bounded_correctly() {
    // max a - 2b subject to a - b <= 0 forces b alongside a.
    let mut builder = ModelBuilder::maximise();
    let a = builder.binary();
    let b = builder.binary();
    builder.objective(LinExpr::new().term(a, 1).term(b, -2));
    builder.le(LinExpr::new().term(a, 1).term(b, -1), 0);
    assert_eq!(optimal(&builder.build()), 0);
}

#[test]
fn expired_deadline_aborts_the_search() {
    let mut builder = ModelBuilder::maximise();
    let x = builder.binaries(20);
    builder.objective(LinExpr::sum(x.iter().copied()));
    builder.le(LinExpr::sum(x.iter().copied()), 10);
    let limits = SolveLimits {
        deadline: Some(Instant::now()),
    };
    let outcome = BranchAndBound.solve(&builder.build(), limits);
    assert!(matches!(
        outcome,
        Err(SolverError::DeadlineExceeded { .. })
    ));
}

/// Exhaustive reference evaluation of a model over all assignments.
fn brute_force(model: &Model) -> Option<i64> {
    let n = model.num_vars();
    let mut best: Option<i64> = None;
    for mask in 0u32..(1 << n) {
        let value = |var: VarId| i64::from(mask >> var.0 & 1 == 1);
        let eval = |expr: &LinExpr| -> i64 {
            expr.terms.iter().map(|&(v, c)| c * value(v)).sum()
        };
        let feasible = model.constraints.iter().all(|c| match c.cmp {
            Cmp::Le => eval(&c.expr) <= c.rhs,
            Cmp::Ge => eval(&c.expr) >= c.rhs,
            Cmp::Eq => eval(&c.expr) == c.rhs,
        });
        if !feasible {
            continue;
        }
        let objective = eval(&model.objective);
        best = Some(match (best, model.sense) {
            (None, _) => objective,
            (Some(b), Sense::Minimise) => b.min(objective),
            (Some(b), Sense::Maximise) => b.max(objective),
        });
    }
    best
}

fn arb_model() -> impl Strategy<Value = Model> {
    let coeff = -3i64..=3;
    (1usize..=7, any::<bool>()).prop_flat_map(move |(n, maximise)| {
        let expr = proptest::collection::vec(coeff.clone(), n);
        let constraint = (expr.clone(), 0usize..3, -2i64..=4);
        (expr, proptest::collection::vec(constraint, 0..4)).prop_map(
            move |(obj, constraints)| {
                let mut builder = if maximise {
                    ModelBuilder::maximise()
                } else {
                    ModelBuilder::minimise()
                };
                let vars = builder.binaries(n);
                let to_expr = |coeffs: &[i64]| {
                    let mut expr = LinExpr::new();
                    for (&v, &c) in vars.iter().zip(coeffs) {
                        expr = expr.term(v, c);
                    }
                    expr
                };
                builder.objective(to_expr(&obj));
                for (coeffs, cmp, rhs) in &constraints {
                    let cmp = [Cmp::Le, Cmp::Ge, Cmp::Eq][*cmp];
                    builder.constraint(to_expr(coeffs), cmp, *rhs);
                }
                builder.build()
            },
        )
    })
}

proptest! {
    #[test]
    fn matches_exhaustive_search(model in arb_model()) {
        let expected = brute_force(&model);
        let outcome = BranchAndBound.solve(&model, SolveLimits::default());
        match (expected, outcome) {
            (None, Ok(SolveOutcome::Infeasible)) => {}
            (Some(best), Ok(SolveOutcome::Optimal(solution))) => {
                prop_assert_eq!(solution.objective(), best);
            }
            (expected, outcome) => {
                return Err(TestCaseError::fail(format!(
                    "expected {expected:?}, got {outcome:?}"
                )));
            }
        }
    }
}
