//! Exact graph invariants over small undirected graphs.
//!
//! This crate is the graph-algorithms capability consumed by
//! `graphinv-engine`: a compact undirected simple graph type backed by
//! `petgraph`, exact (often exponential-time) implementations of the
//! standard invariants, structural predicates, and the
//! increasing-cardinality subset enumerator shared by every brute-force
//! minimum-set search. Correctness is preferred over speed throughout; the
//! intended inputs are the small graphs of a conjecture-synthesis corpus.

mod error;
mod graph;

pub mod generators;
pub mod invariants;
pub mod structure;
pub mod subsets;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::Graph,
};
