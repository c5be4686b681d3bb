//! Variable analysis
//!
//! Scans raw expression text for the variables it references. Used by the
//! validator to compare the two inputs and by the engine to fix the column
//! order of the truth table.

use crate::ast::Span;
use crate::semantic::Variable;
use std::collections::BTreeSet;

/// Extract the distinct variables of an expression in canonical order.
///
/// Every ASCII letter is a variable reference; case is folded so `a` and `A`
/// are the same variable. The result is strictly ascending.
///
/// # Examples
/// ```text
/// Expression: c&(B|a)&C
/// Returns: [A, B, C]
/// ```
pub fn extract_variables(expression: &str) -> Vec<Variable> {
    expression
        .chars()
        .filter_map(Variable::new)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Span of the first occurrence of `variable` in `expression`, in either case
pub fn first_occurrence(expression: &str, variable: Variable) -> Option<Span> {
    expression
        .chars()
        .position(|c| Variable::new(c) == Some(variable))
        .map(Span::at)
}
