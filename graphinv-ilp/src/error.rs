//! Error types for the solver surface.

use thiserror::Error;

/// An error raised while solving a model.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolverError {
    /// The search hit its deadline before proving optimality.
    #[error("solver deadline exceeded after exploring {nodes} nodes")]
    DeadlineExceeded {
        /// Number of branch-and-bound nodes explored before giving up.
        nodes: u64,
    },
}

impl SolverError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> SolverErrorCode {
        match self {
            Self::DeadlineExceeded { .. } => SolverErrorCode::DeadlineExceeded,
        }
    }
}

/// Machine-readable error codes for [`SolverError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SolverErrorCode {
    /// The search hit its deadline before proving optimality.
    DeadlineExceeded,
}

impl SolverErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeadlineExceeded => "ILP_DEADLINE_EXCEEDED",
        }
    }
}

/// Convenient alias for results returned by this crate.
pub type Result<T> = core::result::Result<T, SolverError>;
