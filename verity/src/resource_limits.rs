/// Resource limits to keep parsing and enumeration bounded
///
/// The truth table grows as 2^n in the number of variables, so the variable
/// limit is the one that matters in practice.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum expression length in characters
    pub max_expression_length: usize,

    /// Maximum parenthesis nesting depth
    pub max_expression_depth: usize,

    /// Maximum number of distinct variables in the original expression
    /// 20 variables = 1_048_576 rows
    pub max_variables: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_expression_length: 4096,
            max_expression_depth: 100,
            max_variables: 20,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Same limits with a different variable ceiling
    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }
}
