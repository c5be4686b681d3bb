use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A variable identifier: one ASCII letter, stored uppercase.
///
/// Ordering is alphabetical, which is the canonical column and bit order
/// used by the truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(char);

impl Variable {
    /// Case-fold `c` into a variable, or `None` if it is not an ASCII letter
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Variable(c.to_ascii_uppercase()))
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Truth values for a set of variables, for one evaluation round
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    values: BTreeMap<Variable, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the assignment for row `index` of a truth table over `variables`.
    ///
    /// The first variable takes the most significant bit, so rows ascend in
    /// the usual binary counting order.
    pub fn from_index(variables: &[Variable], index: u64) -> Self {
        let n = variables.len();
        variables
            .iter()
            .enumerate()
            .map(|(j, var)| (*var, (index >> (n - j - 1)) & 1 == 1))
            .collect()
    }

    pub fn bind(&mut self, variable: Variable, value: bool) {
        self.values.insert(variable, value);
    }

    pub fn get(&self, variable: Variable) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bound variables with their values, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.values.iter().map(|(var, value)| (*var, *value))
    }

    /// Render as ` -A=1 -B=0 ...`, the form used for satisfiable-input sets
    pub fn to_canonical_string(&self) -> String {
        self.iter()
            .map(|(var, value)| format!(" -{}={}", var, u8::from(value)))
            .collect()
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Variable, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
