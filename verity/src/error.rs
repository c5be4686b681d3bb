use crate::ast::Span;
use crate::semantic::Variable;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    /// Which input the span points into: `original`, `simplified` or `<input>`
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Plain discriminant of a [`VerityError`], without the attached details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyExpression,
    MissingGate,
    InvalidCharacter,
    TooManyVariables,
    UnknownVariable,
    UnboundVariable,
    MalformedExpression,
    InvalidAssignment,
    ResourceLimitExceeded,
}

/// Error types for the Verity engine with source location tracking
#[derive(Debug, Clone)]
pub enum VerityError {
    /// An input expression is the empty string
    EmptyExpression { source_id: String },

    /// Two alphanumeric characters are adjacent with no gate between them
    MissingGate(Box<ErrorDetails>),

    /// A character outside the expression alphabet
    InvalidCharacter(Box<ErrorDetails>),

    /// The simplified expression references more distinct variables than the original
    TooManyVariables { original: usize, simplified: usize },

    /// The simplified expression references a variable the original does not
    UnknownVariable {
        variable: Variable,
        details: Box<ErrorDetails>,
    },

    /// Evaluation reached a variable that the assignment does not bind
    UnboundVariable {
        variable: Variable,
        details: Box<ErrorDetails>,
    },

    /// The expression passed character checks but cannot be evaluated
    MalformedExpression(Box<ErrorDetails>),

    /// A `NAME=VALUE` binding could not be parsed
    InvalidAssignment(String),

    /// A configured resource limit was exceeded
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },
}

impl ErrorDetails {
    pub fn new(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Box<Self> {
        Box::new(Self {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        })
    }

    pub fn with_suggestion(mut self: Box<Self>, suggestion: impl Into<String>) -> Box<Self> {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl VerityError {
    /// Create a malformed-expression error pointing at `span`
    pub fn malformed(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::MalformedExpression(ErrorDetails::new(message, span, source_id, source_text))
    }

    /// Create a malformed-expression error with a hint on how to fix it
    pub fn malformed_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::MalformedExpression(
            ErrorDetails::new(message, span, source_id, source_text).with_suggestion(suggestion),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VerityError::EmptyExpression { .. } => ErrorKind::EmptyExpression,
            VerityError::MissingGate(_) => ErrorKind::MissingGate,
            VerityError::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            VerityError::TooManyVariables { .. } => ErrorKind::TooManyVariables,
            VerityError::UnknownVariable { .. } => ErrorKind::UnknownVariable,
            VerityError::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            VerityError::MalformedExpression(_) => ErrorKind::MalformedExpression,
            VerityError::InvalidAssignment(_) => ErrorKind::InvalidAssignment,
            VerityError::ResourceLimitExceeded { .. } => ErrorKind::ResourceLimitExceeded,
        }
    }

    /// Source details for errors that point into an expression
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            VerityError::MissingGate(details)
            | VerityError::InvalidCharacter(details)
            | VerityError::MalformedExpression(details) => Some(details),
            VerityError::UnknownVariable { details, .. }
            | VerityError::UnboundVariable { details, .. } => Some(details),
            _ => None,
        }
    }
}

fn write_details(f: &mut fmt::Formatter<'_>, label: &str, details: &ErrorDetails) -> fmt::Result {
    write!(f, "{}: {}", label, details.message)?;
    if let Some(suggestion) = &details.suggestion {
        write!(f, " (suggestion: {})", suggestion)?;
    }
    write!(f, " at {}:{}", details.source_id, details.span.col())
}

impl fmt::Display for VerityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerityError::EmptyExpression { source_id } => {
                write!(f, "Empty expression: the {} expression cannot be empty", source_id)
            }
            VerityError::MissingGate(details) => write_details(f, "Missing gate", details),
            VerityError::InvalidCharacter(details) => {
                write_details(f, "Invalid character", details)
            }
            VerityError::TooManyVariables {
                original,
                simplified,
            } => write!(
                f,
                "Too many variables: the simplified expression uses {} variable(s) but the original only has {}",
                simplified, original
            ),
            VerityError::UnknownVariable { details, .. } => {
                write_details(f, "Unknown variable", details)
            }
            VerityError::UnboundVariable { details, .. } => {
                write_details(f, "Unbound variable", details)
            }
            VerityError::MalformedExpression(details) => {
                write_details(f, "Malformed expression", details)
            }
            VerityError::InvalidAssignment(msg) => write!(f, "Invalid assignment: {}", msg),
            VerityError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                suggestion,
            } => write!(
                f,
                "Resource limit exceeded: {} (limit: {}, actual: {}). {}",
                limit_name, limit_value, actual_value, suggestion
            ),
        }
    }
}

impl std::error::Error for VerityError {}
