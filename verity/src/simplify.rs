//! Simplification suggestions using BDDs
//!
//! The parsed item tree is folded into a `boolean_expression::Expr` with the
//! same left-to-right meaning the evaluator gives it, reduced through a BDD,
//! and rendered back into expression text.

use crate::ast::{BinaryOperator, Item, ItemKind};
use crate::{Assignment, Evaluator, Expression, Variable, VerityError, VerityResult};
use boolean_expression::Expr as BExpr;
use std::sync::Arc;

/// Suggest a smaller expression with the same truth table.
///
/// The result is parenthesized wherever the left-to-right rule would
/// otherwise change its meaning, so it can be fed straight back in as the
/// simplified side of a check.
pub fn suggest_simplification(expression: &Expression) -> VerityResult<String> {
    // Surface structural errors with their positions before converting
    let probe: Assignment = expression
        .variable_occurrences()
        .into_iter()
        .map(|(var, _)| (var, false))
        .collect();
    Evaluator.evaluate(expression, &probe)?;

    let bexpr = to_bool_expr(&expression.items).ok_or_else(|| {
        VerityError::malformed(
            "Expression cannot be converted for simplification",
            expression.span(),
            expression.source_id.clone(),
            Arc::clone(&expression.source),
        )
    })?;

    Ok(render(&bexpr.simplify_via_bdd()))
}

fn to_bool_expr(items: &[Item]) -> Option<BExpr<Variable>> {
    let mut result: Option<BExpr<Variable>> = None;
    let mut pending: Option<BinaryOperator> = None;
    let mut negate = false;

    for item in items {
        match &item.kind {
            ItemKind::Not => negate = true,
            ItemKind::Operator(op) => pending = Some(*op),
            ItemKind::Variable(var) => {
                result = Some(combine(result, pending.take(), BExpr::Terminal(*var), &mut negate)?)
            }
            ItemKind::Constant(value) => {
                result = Some(combine(result, pending.take(), BExpr::Const(*value), &mut negate)?)
            }
            ItemKind::Group(inner) => {
                let operand = to_bool_expr(inner)?;
                result = Some(combine(result, pending.take(), operand, &mut negate)?)
            }
        }
    }

    result
}

fn combine(
    acc: Option<BExpr<Variable>>,
    op: Option<BinaryOperator>,
    operand: BExpr<Variable>,
    negate: &mut bool,
) -> Option<BExpr<Variable>> {
    let operand = if std::mem::take(negate) {
        BExpr::not(operand)
    } else {
        operand
    };

    match (acc, op) {
        (None, _) => Some(operand),
        (Some(acc), Some(BinaryOperator::And)) => Some(BExpr::and(acc, operand)),
        (Some(acc), Some(BinaryOperator::Or)) => Some(BExpr::or(acc, operand)),
        (Some(_), None) => None,
    }
}

fn binary_operator(expr: &BExpr<Variable>) -> Option<BinaryOperator> {
    match expr {
        BExpr::And(_, _) => Some(BinaryOperator::And),
        BExpr::Or(_, _) => Some(BinaryOperator::Or),
        _ => None,
    }
}

fn render(expr: &BExpr<Variable>) -> String {
    match expr {
        BExpr::Const(value) => u8::from(*value).to_string(),
        BExpr::Terminal(var) => var.to_string(),
        BExpr::Not(inner) => match binary_operator(inner) {
            Some(_) => format!("!({})", render(inner)),
            None => format!("!{}", render(inner)),
        },
        BExpr::And(left, right) => render_binary(BinaryOperator::And, left, right),
        BExpr::Or(left, right) => render_binary(BinaryOperator::Or, left, right),
    }
}

// A left operand with the same operator folds correctly without parentheses;
// everything else binary is wrapped.
fn render_binary(op: BinaryOperator, left: &BExpr<Variable>, right: &BExpr<Variable>) -> String {
    let left_text = match binary_operator(left) {
        Some(left_op) if left_op != op => format!("({})", render(left)),
        _ => render(left),
    };
    let right_text = match binary_operator(right) {
        Some(_) => format!("({})", render(right)),
        None => render(right),
    };
    format!("{}{}{}", left_text, op.symbol(), right_text)
}
