//! Depth-first branch and bound over binary variables.
//!
//! Each constraint keeps the sum contributed by fixed variables together
//! with the least and greatest sums still achievable from the free ones,
//! so infeasible subtrees are cut as soon as an interval misses its bound.
//! The incumbent objective prunes the rest.

use std::time::Instant;

use tracing::debug;

use crate::{
    Result, SolverError,
    model::{Cmp, Model, Sense},
};

use super::{Solution, Solve, SolveLimits, SolveOutcome};

const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// The bundled exact backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchAndBound;

impl Solve for BranchAndBound {
    fn solve(&self, model: &Model, limits: SolveLimits) -> Result<SolveOutcome> {
        let mut search = Search::new(model, limits.deadline);
        search.dive(0)?;
        debug!(
            nodes = search.nodes,
            feasible = search.incumbent.is_some(),
            "branch and bound finished"
        );
        Ok(match search.incumbent {
            Some((values, objective)) => SolveOutcome::Optimal(Solution::new(values, objective)),
            None => SolveOutcome::Infeasible,
        })
    }
}

/// Interval tracking for one linear row.
struct Row {
    cmp: Cmp,
    rhs: i64,
    fixed: i64,
    min_rem: i64,
    max_rem: i64,
}

impl Row {
    /// `false` once no completion of the partial assignment can satisfy
    /// the row.
    const fn satisfiable(&self) -> bool {
        let lo = self.fixed + self.min_rem;
        let hi = self.fixed + self.max_rem;
        match self.cmp {
            Cmp::Le => lo <= self.rhs,
            Cmp::Ge => hi >= self.rhs,
            Cmp::Eq => lo <= self.rhs && hi >= self.rhs,
        }
    }
}

struct Search<'a> {
    model: &'a Model,
    // Per-variable occurrence lists: (row index, coefficient).
    columns: Vec<Vec<(usize, i64)>>,
    obj_coeff: Vec<i64>,
    rows: Vec<Row>,
    obj: Row,
    assignment: Vec<bool>,
    incumbent: Option<(Vec<bool>, i64)>,
    deadline: Option<Instant>,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(model: &'a Model, deadline: Option<Instant>) -> Self {
        let n = model.num_vars;
        let mut columns = vec![Vec::new(); n];
        let mut rows = Vec::with_capacity(model.constraints.len());
        for (r, constraint) in model.constraints.iter().enumerate() {
            let mut coeffs = vec![0i64; n];
            for &(var, coeff) in &constraint.expr.terms {
                coeffs[var.0] += coeff;
            }
            let mut row = Row {
                cmp: constraint.cmp,
                rhs: constraint.rhs,
                fixed: 0,
                min_rem: 0,
                max_rem: 0,
            };
            for (v, &coeff) in coeffs.iter().enumerate() {
                if coeff == 0 {
                    continue;
                }
                columns[v].push((r, coeff));
                if coeff > 0 {
                    row.max_rem += coeff;
                } else {
                    row.min_rem += coeff;
                }
            }
            rows.push(row);
        }

        let mut obj_coeff = vec![0i64; n];
        for &(var, coeff) in &model.objective.terms {
            obj_coeff[var.0] += coeff;
        }
        let mut obj = Row {
            cmp: Cmp::Eq,
            rhs: 0,
            fixed: 0,
            min_rem: 0,
            max_rem: 0,
        };
        for &coeff in &obj_coeff {
            if coeff > 0 {
                obj.max_rem += coeff;
            } else if coeff < 0 {
                obj.min_rem += coeff;
            }
        }

        Self {
            model,
            columns,
            obj_coeff,
            rows,
            obj,
            assignment: vec![false; n],
            incumbent: None,
            deadline,
            nodes: 0,
        }
    }

    fn dive(&mut self, idx: usize) -> Result<()> {
        self.nodes += 1;
        if self.nodes % DEADLINE_CHECK_INTERVAL == 0 {
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    return Err(SolverError::DeadlineExceeded { nodes: self.nodes });
                }
            }
        }
        if !self.rows.iter().all(Row::satisfiable) || self.objective_pruned() {
            return Ok(());
        }
        if idx == self.model.num_vars {
            // All rows are exact here, so the feasibility check above was
            // conclusive.
            self.incumbent = Some((self.assignment.clone(), self.obj.fixed));
            return Ok(());
        }
        for value in self.branch_order(idx) {
            self.assign(idx, value);
            self.dive(idx + 1)?;
            self.unassign(idx, value);
        }
        Ok(())
    }

    /// Cheaper objective contribution first, so good incumbents arrive
    /// early.
    fn branch_order(&self, idx: usize) -> [bool; 2] {
        let coeff = self.obj_coeff[idx];
        let prefer_zero = match self.model.sense {
            Sense::Minimise => coeff >= 0,
            Sense::Maximise => coeff <= 0,
        };
        if prefer_zero { [false, true] } else { [true, false] }
    }

    fn objective_pruned(&self) -> bool {
        let Some((_, best)) = &self.incumbent else {
            return false;
        };
        match self.model.sense {
            Sense::Minimise => self.obj.fixed + self.obj.min_rem >= *best,
            Sense::Maximise => self.obj.fixed + self.obj.max_rem <= *best,
        }
    }

    fn assign(&mut self, idx: usize, value: bool) {
        self.assignment[idx] = value;
        for &(r, coeff) in &self.columns[idx] {
            Self::fix(&mut self.rows[r], coeff, value);
        }
        Self::fix(&mut self.obj, self.obj_coeff[idx], value);
    }

    fn unassign(&mut self, idx: usize, value: bool) {
        self.assignment[idx] = false;
        for &(r, coeff) in &self.columns[idx] {
            Self::unfix(&mut self.rows[r], coeff, value);
        }
        Self::unfix(&mut self.obj, self.obj_coeff[idx], value);
    }

    const fn fix(row: &mut Row, coeff: i64, value: bool) {
        if coeff > 0 {
            row.max_rem -= coeff;
        } else {
            row.min_rem -= coeff;
        }
        if value {
            row.fixed += coeff;
        }
    }

    const fn unfix(row: &mut Row, coeff: i64, value: bool) {
        if coeff > 0 {
            row.max_rem += coeff;
        } else {
            row.min_rem += coeff;
        }
        if value {
            row.fixed -= coeff;
        }
    }
}
