//! A small exact 0/1 integer linear programming layer.
//!
//! Domination-style invariants are phrased as binary programmes with
//! integer coefficients; this crate provides the model-building surface
//! and a pluggable [`Solve`] backend. The bundled [`BranchAndBound`]
//! solver is exact and deliberately simple, sized for the tiny models a
//! graph of conjecture-corpus scale produces. Arithmetic stays in `i64`
//! throughout, so optimality never hinges on a floating-point tolerance.

mod error;
mod model;

pub mod solver;

pub use crate::{
    error::{Result, SolverError, SolverErrorCode},
    model::{Cmp, Constraint, LinExpr, Model, ModelBuilder, Sense, VarId},
    solver::{BranchAndBound, Solution, Solve, SolveLimits, SolveOutcome},
};
