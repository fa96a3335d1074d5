//! Scalar results of property evaluation.

use std::fmt;

use crate::error::{EvalError, Result};

/// The result of evaluating a property: the identifier determines the
/// variant, it is never inferred at runtime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// An exact integer invariant.
    Int(i64),
    /// A real-valued invariant.
    Real(f64),
    /// A boolean structural predicate.
    Bool(bool),
}

impl Value {
    /// Wraps a cardinality or other non-negative count.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        Self::Int(i64::try_from(count).unwrap_or(i64::MAX))
    }

    /// The numeric value, or `None` for booleans.
    #[must_use]
    pub const fn as_f64(self) -> Option<f64> {
        match self {
            #[expect(clippy::cast_precision_loss, reason = "invariants stay far below 2^52")]
            Self::Int(n) => Some(n as f64),
            Self::Real(x) => Some(x),
            Self::Bool(_) => None,
        }
    }

    fn numeric(self, property: &str) -> Result<NumericValue> {
        match self {
            Self::Int(n) => Ok(NumericValue::Int(n)),
            Self::Real(x) => Ok(NumericValue::Real(x)),
            Self::Bool(_) => Err(EvalError::MalformedExpression {
                property: String::from(property),
                reason: "operand is not numeric",
            }),
        }
    }

    /// Combines two numeric values with `op`, promoting to real if either
    /// side is real. Booleans are not numeric and reject as malformed.
    pub(crate) fn combine(self, op: ArithOp, rhs: Self, property: &str) -> Result<Self> {
        let lhs = self.numeric(property)?;
        let rhs = rhs.numeric(property)?;
        Ok(match (lhs, rhs) {
            (NumericValue::Int(a), NumericValue::Int(b)) => Self::Int(op.apply_int(a, b)),
            (a, b) => Self::Real(op.apply_real(a.as_f64(), b.as_f64())),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Binary arithmetic operators usable in derived and joint expressions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ArithOp {
    /// Sum of the operands.
    Add,
    /// Difference of the operands.
    Sub,
    /// Product of the operands.
    Mul,
}

impl ArithOp {
    const fn apply_int(self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
        }
    }

    const fn apply_real(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
        }
    }
}

#[derive(Clone, Copy)]
enum NumericValue {
    Int(i64),
    Real(f64),
}

impl NumericValue {
    const fn as_f64(self) -> f64 {
        match self {
            #[expect(clippy::cast_precision_loss, reason = "invariants stay far below 2^52")]
            Self::Int(n) => n as f64,
            Self::Real(x) => x,
        }
    }
}
