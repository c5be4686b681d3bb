use ariadne::{Color, Label, Report, ReportKind, Source};
use verity::{ErrorDetails, VerityError};

/// Format a VerityError with fancy terminal output using Ariadne
pub fn format_error(error: &VerityError) -> String {
    match error {
        VerityError::MissingGate(details)
        | VerityError::InvalidCharacter(details)
        | VerityError::MalformedExpression(details) => {
            let (error_type, label) = match error {
                VerityError::MissingGate(_) => ("Missing gate", "gate expected here"),
                VerityError::InvalidCharacter(_) => ("Invalid character", "not allowed"),
                _ => ("Malformed expression", "cannot be evaluated"),
            };
            render(error, error_type, label, details)
        }
        VerityError::UnknownVariable { details, .. } => {
            render(error, "Unknown variable", "not in the original", details)
        }
        VerityError::UnboundVariable { details, .. } => {
            render(error, "Unbound variable", "no value given", details)
        }
        VerityError::EmptyExpression { .. }
        | VerityError::TooManyVariables { .. }
        | VerityError::InvalidAssignment(_) => error.to_string(),
        VerityError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
    }
}

fn render(error: &VerityError, error_type: &str, label: &str, details: &ErrorDetails) -> String {
    let mut output = Vec::new();

    let enhanced_message = format!(
        "{}: {} (in {} expression, column {})",
        error_type,
        details.message,
        details.source_id,
        details.span.col()
    );

    let mut report = Report::build(ReportKind::Error, &details.source_id, details.span.start)
        .with_message(enhanced_message)
        .with_label(
            Label::new((&details.source_id, details.span.start..details.span.end))
                .with_message(label)
                .with_color(Color::Red),
        );

    if let Some(suggestion) = &details.suggestion {
        report = report.with_help(suggestion);
    }

    match report.finish().write(
        (
            &details.source_id,
            Source::from(details.source_text.as_ref()),
        ),
        &mut output,
    ) {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("{}", error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity::{Engine, ErrorKind};

    fn error_for(original: &str, simplified: &str) -> VerityError {
        match Engine::new().run(original, simplified) {
            Err(e) => e,
            Ok(_) => panic!("expected an error for {:?} / {:?}", original, simplified),
        }
    }

    #[test]
    fn test_missing_gate_shows_source_and_help() {
        let error = error_for("AB", "A");
        assert_eq!(error.kind(), ErrorKind::MissingGate);

        let output = format_error(&error);
        assert!(output.contains("Missing gate"));
        assert!(output.contains("original"));
        assert!(output.contains("AB"));
        assert!(output.contains("Insert a gate"));
    }

    #[test]
    fn test_unknown_variable_mentions_simplified_side() {
        let output = format_error(&error_for("A&B", "A&C"));
        assert!(output.contains("Unknown variable"));
        assert!(output.contains("simplified"));
        assert!(output.contains("A, B"));
    }

    #[test]
    fn test_empty_expression_is_plain_text() {
        let output = format_error(&error_for("", "A"));
        assert_eq!(
            output,
            "Empty expression: the original expression cannot be empty"
        );
    }

    #[test]
    fn test_resource_limit_lists_limit_and_actual() {
        let error = VerityError::ResourceLimitExceeded {
            limit_name: "max_variables".to_string(),
            limit_value: "2".to_string(),
            actual_value: "3".to_string(),
            suggestion: "Raise the limit".to_string(),
        };
        let output = format_error(&error);
        assert!(output.contains("max_variables"));
        assert!(output.contains("Limit: 2"));
        assert!(output.contains("Actual: 3"));
    }
}
