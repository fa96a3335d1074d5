//! The public evaluation surface.

use std::time::Instant;

use graphinv_graph::Graph;
use graphinv_ilp::{BranchAndBound, Solve, SolveLimits};
use tracing::instrument;

use crate::{
    budget::EvalBudget,
    error::{EvalError, Result},
    registry,
    value::{ArithOp, Value},
};


/// Evaluates property identifiers against graphs.
///
/// Holds the solver backend and the per-call budget; the identifier
/// vocabulary itself is process-wide constant data resolved once on first
/// use. An evaluator is cheap to share and keeps no state between calls.
pub struct Evaluator {
    solver: Box<dyn Solve>,
    budget: EvalBudget,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// An evaluator with the bundled solver and an unlimited budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            solver: Box::new(BranchAndBound),
            budget: EvalBudget::unlimited(),
        }
    }

    /// Starts building a customised evaluator.
    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    /// Evaluates `property` on `graph`.
    ///
    /// # Errors
    /// Returns the [`EvalError`] variant describing why the property has
    /// no value: an unrecognised or malformed identifier, an input the
    /// invariant is undefined on, a solver failure, an exhausted search,
    /// or an elapsed budget.
    #[instrument(skip(self, graph), fields(order = graph.order()))]
    pub fn evaluate(&self, graph: &Graph, property: &str) -> Result<Value> {
        let ctx = EvalCtx {
            solver: self.solver.as_ref(),
            deadline: self.budget.deadline(),
        };
        registry::dispatch(graph, property, &ctx)
    }

    /// Evaluates a joint identifier `"<propA> + <propB>"` or
    /// `"<propA> * <propB>"`, applying the first operand to `graph_a` and
    /// the second to `graph_b`.
    ///
    /// # Errors
    /// Returns [`EvalError::MalformedExpression`] when the identifier has
    /// no recognised operator or an operand is non-numeric; operand
    /// evaluation errors propagate unchanged.
    #[instrument(skip(self, graph_a, graph_b))]
    pub fn evaluate_joint(
        &self,
        graph_a: &Graph,
        graph_b: &Graph,
        property: &str,
    ) -> Result<Value> {
        let (op, token) = if property.contains(" + ") {
            (ArithOp::Add, " + ")
        } else if property.contains(" * ") {
            (ArithOp::Mul, " * ")
        } else {
            return Err(EvalError::MalformedExpression {
                property: String::from(property),
                reason: "expected \" + \" or \" * \" between the operands",
            });
        };
        let parts: Vec<&str> = property.split(token).collect();
        let [lhs, rhs] = parts[..] else {
            return Err(EvalError::MalformedExpression {
                property: String::from(property),
                reason: "expected exactly two operands",
            });
        };
        let a = self.evaluate(graph_a, lhs)?;
        let b = self.evaluate(graph_b, rhs)?;
        a.combine(op, b, property)
    }
}

/// Builder for [`Evaluator`].
#[derive(Default)]
pub struct EvaluatorBuilder {
    solver: Option<Box<dyn Solve>>,
    budget: EvalBudget,
}

impl EvaluatorBuilder {
    /// Replaces the bundled solver backend.
    #[must_use]
    pub fn solver(mut self, solver: impl Solve + 'static) -> Self {
        self.solver = Some(Box::new(solver));
        self
    }

    /// Sets the per-call budget.
    #[must_use]
    pub const fn budget(mut self, budget: EvalBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Finalises the evaluator.
    #[must_use]
    pub fn build(self) -> Evaluator {
        Evaluator {
            solver: self.solver.unwrap_or_else(|| Box::new(BranchAndBound)),
            budget: self.budget,
        }
    }
}

/// Per-call context threaded through every strategy.
pub(crate) struct EvalCtx<'a> {
    pub(crate) solver: &'a dyn Solve,
    pub(crate) deadline: Option<Instant>,
}

impl EvalCtx<'_> {
    /// Solver limits derived from the evaluation deadline.
    pub(crate) const fn limits(&self) -> SolveLimits {
        SolveLimits {
            deadline: self.deadline,
        }
    }

    /// Fails with [`EvalError::Timeout`] once the deadline has passed.
    pub(crate) fn check_deadline(&self, property: &'static str) -> Result<()> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(EvalError::Timeout {
                property: String::from(property),
            }),
            _ => Ok(()),
        }
    }
}
