use crate::analysis::{extract_variables, first_occurrence};
use crate::ast::Span;
use crate::error::ErrorDetails;
use crate::{VerityError, VerityResult};
use std::sync::Arc;

/// Character-level checks on both inputs, run before anything is parsed.
///
/// This is deliberately shallow: it does not check parenthesis balance or
/// operator placement (the parser and evaluator reject those), and it does
/// not check that the simplified form is actually equivalent.
#[derive(Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate an original/simplified pair, failing on the first violation
    pub fn validate(&self, original: &str, simplified: &str) -> VerityResult<()> {
        // Phase 1: Neither input may be empty
        for (source_id, text) in [("original", original), ("simplified", simplified)] {
            if text.is_empty() {
                return Err(VerityError::EmptyExpression {
                    source_id: source_id.to_string(),
                });
            }
        }

        // Phase 2: No adjacent alphanumerics without a gate between them
        self.validate_gates(original, "original")?;
        self.validate_gates(simplified, "simplified")?;

        // Phase 3: Only the expression alphabet
        self.validate_characters(original, "original")?;
        self.validate_characters(simplified, "simplified")?;

        // Phase 4: The simplified form may only use the original's variables
        self.validate_variables(original, simplified)
    }

    fn validate_gates(&self, text: &str, source_id: &str) -> VerityResult<()> {
        let chars: Vec<char> = text.chars().collect();

        for (offset, pair) in chars.windows(2).enumerate() {
            if pair[0].is_ascii_alphanumeric() && pair[1].is_ascii_alphanumeric() {
                let details = ErrorDetails::new(
                    format!(
                        "{} expression has consecutive variables '{}{}' without a gate in between",
                        capitalize(source_id),
                        pair[0],
                        pair[1]
                    ),
                    Span::new(offset, offset + 2),
                    source_id,
                    Arc::from(text),
                )
                .with_suggestion(format!(
                    "Insert a gate, e.g. '{}&{}' or '{}|{}'",
                    pair[0], pair[1], pair[0], pair[1]
                ));
                return Err(VerityError::MissingGate(details));
            }
        }

        Ok(())
    }

    fn validate_characters(&self, text: &str, source_id: &str) -> VerityResult<()> {
        let invalid = text
            .chars()
            .enumerate()
            .find(|(_, c)| !is_expression_char(*c));

        if let Some((offset, c)) = invalid {
            let details = ErrorDetails::new(
                format!(
                    "{} expression contains invalid character '{}'",
                    capitalize(source_id),
                    c
                ),
                Span::at(offset),
                source_id,
                Arc::from(text),
            )
            .with_suggestion("Use '&' for AND, '|' for OR, '!' for NOT and parentheses for grouping");
            return Err(VerityError::InvalidCharacter(details));
        }

        Ok(())
    }

    fn validate_variables(&self, original: &str, simplified: &str) -> VerityResult<()> {
        let original_vars = extract_variables(original);
        let simplified_vars = extract_variables(simplified);

        if simplified_vars.len() > original_vars.len() {
            return Err(VerityError::TooManyVariables {
                original: original_vars.len(),
                simplified: simplified_vars.len(),
            });
        }

        if let Some(unknown) = simplified_vars
            .iter()
            .find(|var| original_vars.binary_search(var).is_err())
        {
            let span = first_occurrence(simplified, *unknown).unwrap_or(Span::at(0));
            let known = original_vars
                .iter()
                .map(|var| var.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let details = ErrorDetails::new(
                format!(
                    "Simplified expression uses variable {} which is not in the original expression",
                    unknown
                ),
                span,
                "simplified",
                Arc::from(simplified),
            )
            .with_suggestion(if known.is_empty() {
                "The original expression uses no variables".to_string()
            } else {
                format!("The original expression uses: {}", known)
            });
            return Err(VerityError::UnknownVariable {
                variable: *unknown,
                details,
            });
        }

        Ok(())
    }
}

fn is_expression_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '&' | '|' | '!' | '(' | ')' | ' ')
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
