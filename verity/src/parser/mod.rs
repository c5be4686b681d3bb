use crate::ast::{char_offset, Expression, Span};
use crate::error::VerityError;
use crate::resource_limits::ResourceLimits;
use crate::semantic::{Assignment, Variable};
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod expressions;

#[derive(Parser)]
#[grammar = "src/parser/verity.pest"]
pub struct VerityParser;

/// Source text and its name, threaded through tree construction for errors
pub(crate) struct SourceContext<'a> {
    pub source_id: &'a str,
    pub source: &'a Arc<str>,
}

impl SourceContext<'_> {
    pub fn malformed(&self, message: impl Into<String>, span: Span) -> VerityError {
        VerityError::malformed(message, span, self.source_id, Arc::clone(self.source))
    }
}

/// Parse expression text into its item tree.
///
/// Parenthesis balance is checked here, before the grammar runs, so an
/// unmatched parenthesis is reported at its own position.
pub fn parse(
    content: &str,
    source_id: &str,
    limits: &ResourceLimits,
) -> Result<Expression, VerityError> {
    let length = content.chars().count();
    if length > limits.max_expression_length {
        return Err(VerityError::ResourceLimitExceeded {
            limit_name: "max_expression_length".to_string(),
            limit_value: limits.max_expression_length.to_string(),
            actual_value: length.to_string(),
            suggestion: format!("Shorten the {} expression", source_id),
        });
    }

    let source: Arc<str> = Arc::from(content);
    let ctx = SourceContext {
        source_id,
        source: &source,
    };

    check_parentheses(content, limits, &ctx)?;

    match VerityParser::parse(Rule::expression, content) {
        Ok(mut pairs) => {
            let pair = pairs
                .next()
                .ok_or_else(|| ctx.malformed("Empty parse result", Span::new(0, length)))?;
            let items = expressions::parse_expression(pair, &ctx)?;
            Ok(Expression {
                source_id: source_id.to_string(),
                source: Arc::clone(&source),
                items,
            })
        }
        Err(e) => {
            let byte_offset = match e.location {
                pest::error::InputLocation::Pos(pos) => pos,
                pest::error::InputLocation::Span((start, _)) => start,
            };
            let offset = char_offset(content, byte_offset);
            let message = match content[byte_offset.min(content.len())..].chars().next() {
                Some(c) => format!("Unexpected '{}'", c),
                None => "Unexpected end of expression".to_string(),
            };
            Err(VerityError::malformed_with_suggestion(
                message,
                Span::at(offset),
                source_id,
                Arc::clone(&source),
                "Only letters, 0, 1, '&', '|', '!', parentheses and spaces are allowed",
            ))
        }
    }
}

fn check_parentheses(
    content: &str,
    limits: &ResourceLimits,
    ctx: &SourceContext,
) -> Result<(), VerityError> {
    let mut open: Vec<usize> = Vec::new();
    let mut deepest = 0;

    for (offset, c) in content.chars().enumerate() {
        match c {
            '(' => {
                open.push(offset);
                deepest = deepest.max(open.len());
            }
            ')' => {
                if open.pop().is_none() {
                    return Err(VerityError::malformed_with_suggestion(
                        "Unmatched ')'",
                        Span::at(offset),
                        ctx.source_id,
                        Arc::clone(ctx.source),
                        "Remove it or add a matching '('",
                    ));
                }
            }
            _ => {}
        }
    }

    if let Some(&offset) = open.last() {
        return Err(VerityError::malformed_with_suggestion(
            "Unclosed '('",
            Span::at(offset),
            ctx.source_id,
            Arc::clone(ctx.source),
            "Add a matching ')'",
        ));
    }

    if deepest > limits.max_expression_depth {
        return Err(VerityError::ResourceLimitExceeded {
            limit_name: "max_expression_depth".to_string(),
            limit_value: limits.max_expression_depth.to_string(),
            actual_value: deepest.to_string(),
            suggestion: "Simplify nested expressions to reduce depth".to_string(),
        });
    }

    Ok(())
}

/// Parse `NAME=VALUE` bindings into an assignment.
///
/// Names are case-insensitive; values are `1`, `0`, `true` or `false`.
pub fn parse_assignment(bindings: &[&str]) -> Result<Assignment, VerityError> {
    let mut assignment = Assignment::new();

    for binding in bindings {
        let pair = VerityParser::parse(Rule::binding, binding)
            .map_err(|_| {
                VerityError::InvalidAssignment(format!(
                    "'{}' is not of the form NAME=VALUE (VALUE is 1, 0, true or false)",
                    binding
                ))
            })?
            .next()
            .ok_or_else(|| {
                VerityError::InvalidAssignment(format!("No parse result for '{}'", binding))
            })?;

        let mut variable = None;
        let mut value = None;
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::variable => variable = inner.as_str().chars().next().and_then(Variable::new),
                Rule::truth_value => {
                    let text = inner.as_str();
                    value = Some(text == "1" || text.eq_ignore_ascii_case("true"));
                }
                _ => {}
            }
        }

        let (variable, value) = variable.zip(value).ok_or_else(|| {
            VerityError::InvalidAssignment(format!("Incomplete binding '{}'", binding))
        })?;

        if let Some(previous) = assignment.get(variable) {
            if previous != value {
                return Err(VerityError::InvalidAssignment(format!(
                    "Variable {} is bound to both {} and {}",
                    variable,
                    u8::from(previous),
                    u8::from(value)
                )));
            }
        }
        assignment.bind(variable, value);
    }

    Ok(assignment)
}
