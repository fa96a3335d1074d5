//! Error types for property evaluation.

use graphinv_graph::GraphError;
use thiserror::Error;

/// An error produced while evaluating a property on a graph.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    /// The identifier is not recognised by any dispatch tier.
    #[error("property {property:?} is not recognised")]
    PropertyNotFound {
        /// The identifier as supplied by the caller.
        property: String,
    },
    /// A derived or joint expression could not be parsed into two valid
    /// operands and a recognised operator.
    #[error("malformed property expression {property:?}: {reason}")]
    MalformedExpression {
        /// The identifier as supplied by the caller.
        property: String,
        /// What the parser objected to.
        reason: &'static str,
    },
    /// The integer-programme solver reported a non-optimal status for a
    /// model that should always be feasible.
    #[error("solver failed on {property}: {status}")]
    SolverFailure {
        /// The invariant whose model was being solved.
        property: String,
        /// Solver status as reported.
        status: &'static str,
    },
    /// A brute-force search exhausted every subset size without meeting
    /// its feasibility oracle.
    #[error("no feasible subset found for {property} on a graph of order {order}")]
    NoFeasibleSubsetFound {
        /// The invariant whose search failed.
        property: String,
        /// Order of the graph that was searched.
        order: usize,
    },
    /// The property has no defined value on the supplied graph.
    #[error("{property} is undefined here: {reason}")]
    UndefinedOnInput {
        /// The invariant that was requested.
        property: String,
        /// Why the value does not exist for this input.
        reason: &'static str,
    },
    /// The evaluation budget elapsed before the strategy finished.
    #[error("evaluation of {property} exceeded its wall-clock budget")]
    Timeout {
        /// The invariant that was interrupted.
        property: String,
    },
}

impl EvalError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> EvalErrorCode {
        match self {
            Self::PropertyNotFound { .. } => EvalErrorCode::PropertyNotFound,
            Self::MalformedExpression { .. } => EvalErrorCode::MalformedExpression,
            Self::SolverFailure { .. } => EvalErrorCode::SolverFailure,
            Self::NoFeasibleSubsetFound { .. } => EvalErrorCode::NoFeasibleSubsetFound,
            Self::UndefinedOnInput { .. } => EvalErrorCode::UndefinedOnInput,
            Self::Timeout { .. } => EvalErrorCode::Timeout,
        }
    }
}

impl From<GraphError> for EvalError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::Undefined { invariant, reason } => Self::UndefinedOnInput {
                property: String::from(invariant),
                reason,
            },
            GraphError::NoFeasibleSubset { invariant, order } => Self::NoFeasibleSubsetFound {
                property: String::from(invariant),
                order,
            },
            _ => Self::UndefinedOnInput {
                property: String::from("graph invariant"),
                reason: "the graph library rejected the input",
            },
        }
    }
}

/// Machine-readable error codes for [`EvalError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EvalErrorCode {
    /// The identifier is not recognised by any dispatch tier.
    PropertyNotFound,
    /// A derived or joint expression failed to parse.
    MalformedExpression,
    /// The solver reported a non-optimal status.
    SolverFailure,
    /// A brute-force search exhausted every subset size.
    NoFeasibleSubsetFound,
    /// The property has no defined value on the supplied graph.
    UndefinedOnInput,
    /// The evaluation budget elapsed.
    Timeout,
}

impl EvalErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PropertyNotFound => "EVAL_PROPERTY_NOT_FOUND",
            Self::MalformedExpression => "EVAL_MALFORMED_EXPRESSION",
            Self::SolverFailure => "EVAL_SOLVER_FAILURE",
            Self::NoFeasibleSubsetFound => "EVAL_NO_FEASIBLE_SUBSET",
            Self::UndefinedOnInput => "EVAL_UNDEFINED_ON_INPUT",
            Self::Timeout => "EVAL_TIMEOUT",
        }
    }
}

/// Convenient alias for results returned by this crate.
pub type Result<T> = core::result::Result<T, EvalError>;
