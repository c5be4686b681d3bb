use crate::ast::{BinaryOperator, Item, ItemKind, Span};
use crate::error::ErrorDetails;
use crate::{Assignment, Expression, VerityError, VerityResult};
use std::sync::Arc;

/// Running state of the left-to-right fold over one sequence
#[derive(Default)]
struct Fold {
    result: Option<bool>,
    pending: Option<BinaryOperator>,
    negate: bool,
}

/// Fold a sequence of items into a single truth value.
///
/// The first operand initializes the result; every later operand is combined
/// with the last of `&`/`|` seen since the previous operand. `!` inverts only
/// the next operand, and repeating it keeps it set. Operators with no operand
/// after them change nothing. `enclosing` is the span of the whole sequence,
/// used when the sequence turns out to have no operands.
pub fn evaluate_sequence(
    items: &[Item],
    enclosing: Span,
    expression: &Expression,
    assignment: &Assignment,
) -> VerityResult<bool> {
    let malformed = |message: &str, span: Span, suggestion: &str| {
        VerityError::MalformedExpression(
            ErrorDetails::new(
                message,
                span,
                expression.source_id.clone(),
                Arc::clone(&expression.source),
            )
            .with_suggestion(suggestion),
        )
    };

    let mut fold = Fold::default();

    for item in items {
        match &item.kind {
            ItemKind::Not => fold.negate = true,
            ItemKind::Operator(op) => fold.pending = Some(*op),
            _ => {
                let mut value = evaluate_operand(item, expression, assignment)?;
                if std::mem::take(&mut fold.negate) {
                    value = !value;
                }

                fold.result = Some(match (fold.result, fold.pending.take()) {
                    (None, _) => value,
                    (Some(acc), Some(op)) => op.apply(acc, value),
                    (Some(_), None) => {
                        return Err(malformed(
                            "Missing operator between operands",
                            item.span,
                            "Insert '&' or '|' before this operand",
                        ));
                    }
                });
            }
        }
    }

    fold.result.ok_or_else(|| {
        malformed(
            "Expression contains no operands",
            enclosing,
            "Use a variable, 0 or 1",
        )
    })
}

fn evaluate_operand(
    item: &Item,
    expression: &Expression,
    assignment: &Assignment,
) -> VerityResult<bool> {
    match &item.kind {
        ItemKind::Constant(value) => Ok(*value),
        ItemKind::Variable(var) => assignment.get(*var).ok_or_else(|| {
            VerityError::UnboundVariable {
                variable: *var,
                details: ErrorDetails::new(
                    format!("No value assigned to variable {}", var),
                    item.span,
                    expression.source_id.clone(),
                    Arc::clone(&expression.source),
                ),
            }
        }),
        ItemKind::Group(inner) => evaluate_sequence(inner, item.span, expression, assignment),
        ItemKind::Operator(_) | ItemKind::Not => Err(VerityError::malformed(
            "Operator used as an operand",
            item.span,
            expression.source_id.clone(),
            Arc::clone(&expression.source),
        )),
    }
}
