use super::{Rule, SourceContext};
use crate::ast::{BinaryOperator, Item, ItemKind, Span};
use crate::error::VerityError;
use crate::semantic::Variable;
use pest::iterators::Pair;

// expression = { SOI ~ sequence ~ EOI }
pub(crate) fn parse_expression(
    pair: Pair<Rule>,
    ctx: &SourceContext,
) -> Result<Vec<Item>, VerityError> {
    let span = Span::from_pest_span(pair.as_span(), ctx.source);
    pair.into_inner()
        .find(|inner| inner.as_rule() == Rule::sequence)
        .map(|sequence| parse_sequence(sequence, ctx))
        .unwrap_or_else(|| Err(ctx.malformed("Expression has no item sequence", span)))
}

fn parse_sequence(pair: Pair<Rule>, ctx: &SourceContext) -> Result<Vec<Item>, VerityError> {
    pair.into_inner().map(|inner| parse_item(inner, ctx)).collect()
}

fn parse_item(pair: Pair<Rule>, ctx: &SourceContext) -> Result<Item, VerityError> {
    let span = Span::from_pest_span(pair.as_span(), ctx.source);

    let kind = match pair.as_rule() {
        Rule::group => {
            let sequence = pair
                .into_inner()
                .next()
                .ok_or_else(|| ctx.malformed("Group has no item sequence", span))?;
            ItemKind::Group(parse_sequence(sequence, ctx)?)
        }
        Rule::variable => {
            let variable = pair
                .as_str()
                .chars()
                .next()
                .and_then(Variable::new)
                .ok_or_else(|| ctx.malformed("Invalid variable name", span))?;
            ItemKind::Variable(variable)
        }
        Rule::constant => ItemKind::Constant(pair.as_str() == "1"),
        Rule::and_operator => ItemKind::Operator(BinaryOperator::And),
        Rule::or_operator => ItemKind::Operator(BinaryOperator::Or),
        Rule::not_operator => ItemKind::Not,
        other => {
            return Err(ctx.malformed(format!("Unexpected grammar rule {:?}", other), span));
        }
    };

    Ok(Item::new(kind, span))
}
