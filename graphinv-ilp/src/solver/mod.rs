//! Solver trait and the bundled exact backend.

use std::time::Instant;

use crate::{Result, model::Model, model::VarId};

mod branch_bound;

#[cfg(test)]
mod tests;

pub use branch_bound::BranchAndBound;

/// Resource limits applied to a single solve.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveLimits {
    /// Wall-clock point after which the search must abandon.
    pub deadline: Option<Instant>,
}

/// An optimal assignment of the model's variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    values: Vec<bool>,
    objective: i64,
}

impl Solution {
    pub(crate) const fn new(values: Vec<bool>, objective: i64) -> Self {
        Self { values, objective }
    }

    /// Value of `var` in the optimum.
    #[must_use]
    pub fn value(&self, var: VarId) -> bool {
        self.values.get(var.0).copied().unwrap_or(false)
    }

    /// Optimal objective value.
    #[must_use]
    pub const fn objective(&self) -> i64 {
        self.objective
    }

    /// Indices of the variables set to one, in declaration order.
    #[must_use]
    pub fn support(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }
}

/// Outcome of a completed solve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolveOutcome {
    /// The model has an optimum.
    Optimal(Solution),
    /// No assignment satisfies the constraints.
    Infeasible,
}

/// An exact 0/1 programme solver.
pub trait Solve {
    /// Solves `model` to proven optimality within `limits`.
    ///
    /// # Errors
    /// Returns [`SolverError::DeadlineExceeded`] when the deadline passes
    /// before the search finishes.
    ///
    /// [`SolverError::DeadlineExceeded`]: crate::SolverError::DeadlineExceeded
    fn solve(&self, model: &Model, limits: SolveLimits) -> Result<SolveOutcome>;
}
