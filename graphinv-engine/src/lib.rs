//! Property evaluation over graphs for conjecture-synthesis corpora.
//!
//! The engine maps a string property identifier onto a computation
//! strategy and evaluates it against a graph. Most identifiers pass
//! straight through to `graphinv-graph`; the rest are served by
//! bespoke strategy modules: integer-programme formulations
//! of the Roman, rainbow, restrained, and semitotal domination numbers,
//! a brute-force positive-semidefinite zero-forcing search, spectral
//! invariants from the adjacency eigendecomposition, forbidden-subgraph
//! recognisers, and monotone threshold scans. Derived identifiers
//! combining two base invariants with `+`, `-`, or a bracketed ratio
//! are parsed and evaluated recursively.
//!
//! Every evaluation is a pure function of the graph and the identifier.
//! A caller-supplied [`EvalBudget`] bounds the solver and brute-force
//! strategies by wall clock; exceeding it surfaces as
//! [`EvalError::Timeout`] rather than an unbounded search.

mod budget;
mod error;
mod eval;
mod registry;
mod value;

pub(crate) mod strategies;

pub mod table;

pub use crate::{
    budget::EvalBudget,
    error::{EvalError, EvalErrorCode, Result},
    eval::{Evaluator, EvaluatorBuilder},
    table::InvariantTable,
    value::Value,
};
