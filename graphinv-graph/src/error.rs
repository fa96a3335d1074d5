//! Error types for graph invariant computations.

use thiserror::Error;

/// An error produced while computing a graph invariant.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The invariant has no defined value on the supplied graph.
    #[error("{invariant} is undefined here: {reason}")]
    Undefined {
        /// Name of the invariant that was requested.
        invariant: &'static str,
        /// Why the value does not exist for this input.
        reason: &'static str,
    },
    /// A minimum-subset search exhausted every cardinality without finding
    /// a feasible candidate.
    #[error("no feasible subset found for {invariant} on a graph of order {order}")]
    NoFeasibleSubset {
        /// Name of the invariant whose search failed.
        invariant: &'static str,
        /// Order of the graph that was searched.
        order: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::Undefined { .. } => GraphErrorCode::Undefined,
            Self::NoFeasibleSubset { .. } => GraphErrorCode::NoFeasibleSubset,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// The invariant has no defined value on the supplied graph.
    Undefined,
    /// A minimum-subset search exhausted every cardinality.
    NoFeasibleSubset,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "GRAPH_UNDEFINED",
            Self::NoFeasibleSubset => "GRAPH_NO_FEASIBLE_SUBSET",
        }
    }
}

/// Convenient alias for results returned by this crate.
pub type Result<T> = core::result::Result<T, GraphError>;
