use crate::{Assignment, Variable};
use serde::Serialize;
use std::collections::BTreeSet;

/// Report from running the truth table engine on an expression pair
///
/// Contains every row of the truth table, the equivalence verdict, and the
/// satisfying inputs of each expression.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub original: String,
    pub simplified: String,
    /// Variables of the original expression, in canonical order
    pub variables: Vec<Variable>,
    pub rows: Vec<Row>,
    /// True only if every row's two results match
    pub equivalent: bool,
    pub original_satisfiability: Satisfiability,
    pub simplified_satisfiability: Satisfiability,
}

/// One truth table row: an assignment and both expressions' results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub assignment: Assignment,
    pub original: bool,
    pub simplified: bool,
}

/// Which inputs make an expression true
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Satisfiability {
    pub satisfiable: bool,
    /// Satisfying assignments in canonical ` -A=1 -B=0` form
    pub inputs: BTreeSet<String>,
}

impl Satisfiability {
    /// Record the outcome of one row
    pub fn record(&mut self, result: bool, assignment: &Assignment) {
        if result {
            self.satisfiable = true;
            self.inputs.insert(assignment.to_canonical_string());
        }
    }
}

impl Report {
    pub(crate) fn new(original: &str, simplified: &str, variables: Vec<Variable>) -> Self {
        let capacity = 1usize << variables.len();
        Self {
            original: original.to_string(),
            simplified: simplified.to_string(),
            variables,
            rows: Vec::with_capacity(capacity),
            equivalent: true,
            original_satisfiability: Satisfiability::default(),
            simplified_satisfiability: Satisfiability::default(),
        }
    }

    pub(crate) fn add_row(&mut self, row: Row) {
        if row.original != row.simplified {
            self.equivalent = false;
        }
        self.original_satisfiability
            .record(row.original, &row.assignment);
        self.simplified_satisfiability
            .record(row.simplified, &row.assignment);
        self.rows.push(row);
    }

    /// Rows where the two expressions disagree
    pub fn counterexamples(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.original != row.simplified)
    }
}
