//! Expression evaluation
//!
//! Evaluates a parsed expression under one assignment of truth values:
//! 1. Each parenthesized group is reduced to a single operand, innermost first
//! 2. The item sequence is folded strictly left to right
//!
//! Stray gates fold away: the last operator before an operand applies and
//! `!` is a flag. Two operands with no operator between them, or a sequence
//! with no operand at all, is a `MalformedExpression`.

pub mod expression;

use crate::{parse, Assignment, Expression, ResourceLimits, VerityResult};

/// Evaluates parsed expressions against assignments
#[derive(Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate `expression` with every variable looked up in `assignment`
    pub fn evaluate(&self, expression: &Expression, assignment: &Assignment) -> VerityResult<bool> {
        expression::evaluate_sequence(&expression.items, expression.span(), expression, assignment)
    }
}

/// Parse `expression` with default limits and evaluate it under `assignment`.
///
/// Convenience for one-off evaluation; the engine parses once and reuses the
/// tree for every row.
pub fn evaluate(expression: &str, assignment: &Assignment) -> VerityResult<bool> {
    let parsed = parse(expression, "<input>", &ResourceLimits::default())?;
    Evaluator.evaluate(&parsed, assignment)
}
