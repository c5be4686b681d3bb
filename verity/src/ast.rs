//! Parsed expression tree
//!
//! An expression is kept as the flat item sequence the user wrote. The only
//! structure is grouping: a parenthesized group nests its own sequence.
//! Every item carries the `Span` it was parsed from so evaluation errors can
//! point back into the source text.

use crate::semantic::Variable;
use std::fmt;
use std::sync::Arc;

/// Span representing a location in an expression, in character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a single character
    pub fn at(offset: usize) -> Self {
        Self::new(offset, offset + 1)
    }

    /// Convert a pest span (byte offsets) into character offsets within `source`
    pub fn from_pest_span(span: pest::Span, source: &str) -> Self {
        Self {
            start: char_offset(source, span.start()),
            end: char_offset(source, span.end()),
        }
    }

    /// One-based column of the span start
    pub fn col(&self) -> usize {
        self.start + 1
    }
}

pub(crate) fn char_offset(source: &str, byte_offset: usize) -> usize {
    source
        .get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or_else(|| source.chars().count())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    And,
    Or,
}

impl BinaryOperator {
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOperator::And => left && right,
            BinaryOperator::Or => left || right,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::And => '&',
            BinaryOperator::Or => '|',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Variable(Variable),
    Constant(bool),
    Operator(BinaryOperator),
    Not,
    Group(Vec<Item>),
}

/// A single token of an expression, or a parenthesized group of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub span: Span,
}

impl Item {
    pub fn new(kind: ItemKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Whether this item produces a value (as opposed to an operator)
    pub fn is_operand(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Variable(_) | ItemKind::Constant(_) | ItemKind::Group(_)
        )
    }
}

/// A parsed, immutable expression together with the text it came from
#[derive(Debug, Clone)]
pub struct Expression {
    pub source_id: String,
    pub source: Arc<str>,
    pub items: Vec<Item>,
}

impl Expression {
    /// Span covering the whole source text
    pub fn span(&self) -> Span {
        Span::new(0, self.source.chars().count())
    }

    /// Every variable occurrence, in source order
    pub fn variable_occurrences(&self) -> Vec<(Variable, Span)> {
        fn walk(items: &[Item], out: &mut Vec<(Variable, Span)>) {
            for item in items {
                match &item.kind {
                    ItemKind::Variable(var) => out.push((*var, item.span)),
                    ItemKind::Group(inner) => walk(inner, out),
                    _ => {}
                }
            }
        }

        let mut occurrences = Vec::new();
        walk(&self.items, &mut occurrences);
        occurrences
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
