use crate::ast::Span;
use crate::error::{ErrorDetails, ErrorKind, VerityError};
use std::sync::Arc;

#[test]
fn test_error_display() {
    let missing_gate = VerityError::MissingGate(
        ErrorDetails::new(
            "Original expression has consecutive variables 'AB' without a gate in between",
            Span::new(0, 2),
            "original",
            Arc::from("AB"),
        )
        .with_suggestion("Insert a gate, e.g. 'A&B' or 'A|B'"),
    );
    let display = missing_gate.to_string();
    assert!(display.starts_with("Missing gate: Original expression"));
    assert!(display.contains("(suggestion: Insert a gate"));
    assert!(display.ends_with("at original:1"));

    let empty = VerityError::EmptyExpression {
        source_id: "simplified".to_string(),
    };
    assert_eq!(
        empty.to_string(),
        "Empty expression: the simplified expression cannot be empty"
    );

    let too_many = VerityError::TooManyVariables {
        original: 2,
        simplified: 3,
    };
    assert!(too_many.to_string().contains("uses 3 variable(s)"));

    let malformed = VerityError::malformed("Unclosed '('", Span::at(4), "<input>", Arc::from("A&B&(C"));
    assert_eq!(
        malformed.to_string(),
        "Malformed expression: Unclosed '(' at <input>:5"
    );
}

#[test]
fn test_error_kind_and_details() {
    let err = VerityError::InvalidAssignment("bad".to_string());
    assert_eq!(err.kind(), ErrorKind::InvalidAssignment);
    assert!(err.details().is_none());

    let err = VerityError::malformed_with_suggestion(
        "Missing operator between operands",
        Span::at(2),
        "original",
        Arc::from("A B"),
        "Insert '&' or '|' before this operand",
    );
    assert_eq!(err.kind(), ErrorKind::MalformedExpression);
    let details = err.details().unwrap();
    assert_eq!(details.suggestion.as_deref(), Some("Insert '&' or '|' before this operand"));
    assert_eq!(&*details.source_text, "A B");
}
