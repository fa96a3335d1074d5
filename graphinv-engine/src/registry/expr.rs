//! Derived arithmetic property expressions.
//!
//! Two surface forms exist in the vocabulary: a parenthesised binary
//! `"(lhs - rhs)"` / `"(lhs + rhs)"`, and a bracketed ratio
//! `"[numerator/ denominator]"` whose terms may themselves be
//! parenthesised binaries or integer literals. Operands resolve through
//! the full dispatch, so any recognised numeric identifier can appear.

use graphinv_graph::Graph;

use crate::{
    error::{EvalError, Result},
    eval::EvalCtx,
    value::{ArithOp, Value},
};

use super::dispatch;

/// `true` when the identifier has derived-expression syntax.
pub(super) fn is_derived(property: &str) -> bool {
    (property.starts_with('(') && property.ends_with(')'))
        || (property.starts_with('[') && property.ends_with(']'))
}

/// Evaluates a derived identifier on `graph`.
pub(super) fn evaluate(graph: &Graph, property: &str, ctx: &EvalCtx<'_>) -> Result<Value> {
    let inner = &property[1..property.len() - 1];
    if property.starts_with('[') {
        ratio(graph, inner, property, ctx)
    } else {
        binary(graph, inner, property, ctx)
    }
}

fn malformed(property: &str, reason: &'static str) -> EvalError {
    EvalError::MalformedExpression {
        property: String::from(property),
        reason,
    }
}

fn ratio(graph: &Graph, inner: &str, property: &str, ctx: &EvalCtx<'_>) -> Result<Value> {
    let Some((numerator, denominator)) = inner.split_once("/ ") else {
        return Err(malformed(property, "a ratio needs a \"/\" between its terms"));
    };
    let numerator = term(graph, numerator, property, ctx)?;
    let denominator = term(graph, denominator, property, ctx)?;
    let (Some(num), Some(den)) = (numerator.as_f64(), denominator.as_f64()) else {
        return Err(malformed(property, "operand is not numeric"));
    };
    if den == 0.0 {
        return Err(EvalError::UndefinedOnInput {
            property: String::from(property),
            reason: "the denominator evaluates to zero",
        });
    }
    Ok(Value::Real(num / den))
}

fn binary(graph: &Graph, inner: &str, property: &str, ctx: &EvalCtx<'_>) -> Result<Value> {
    let minus = inner.matches(" - ").count();
    let plus = inner.matches(" + ").count();
    let (op, token) = match (minus, plus) {
        (1, 0) => (ArithOp::Sub, " - "),
        (0, 1) => (ArithOp::Add, " + "),
        (0, 0) => return Err(malformed(property, "expected \" - \" or \" + \" between the operands")),
        _ => return Err(malformed(property, "ambiguous operator")),
    };
    let Some((lhs, rhs)) = inner.split_once(token) else {
        return Err(malformed(property, "expected exactly two operands"));
    };
    let lhs = term(graph, lhs, property, ctx)?;
    let rhs = term(graph, rhs, property, ctx)?;
    lhs.combine(op, rhs, property)
}

/// A ratio or binary operand: a nested parenthesised binary, an integer
/// literal, or any dispatchable numeric identifier.
fn term(graph: &Graph, raw: &str, property: &str, ctx: &EvalCtx<'_>) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(malformed(property, "empty operand"));
    }
    if trimmed.starts_with('(') && trimmed.ends_with(')') {
        return binary(graph, &trimmed[1..trimmed.len() - 1], property, ctx);
    }
    if let Ok(literal) = trimmed.parse::<i64>() {
        return Ok(Value::Int(literal));
    }
    dispatch(graph, trimmed, ctx)
}
