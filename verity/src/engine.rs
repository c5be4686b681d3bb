use crate::evaluator::Evaluator;
use crate::response::{Report, Row};
use crate::{
    extract_variables, parse, Assignment, ResourceLimits, Validator, VerityError, VerityResult,
};
use tracing::{debug, trace};

/// The truth table engine.
///
/// Validates an original/simplified pair, then evaluates both expressions
/// under every assignment of the original's variables.
pub struct Engine {
    validator: Validator,
    evaluator: Evaluator,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            validator: Validator,
            evaluator: Evaluator,
            limits: ResourceLimits::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            validator: Validator,
            evaluator: Evaluator,
            limits,
        }
    }

    /// Get the current resource limits
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Build the full truth table for `original` and `simplified`.
    ///
    /// Rows follow the original expression's variables in canonical order;
    /// row `i` assigns the bits of `i`, most significant bit to the first
    /// variable. With no variables there is exactly one row.
    pub fn run(&self, original: &str, simplified: &str) -> VerityResult<Report> {
        self.validator.validate(original, simplified)?;

        let original_expr = parse(original, "original", &self.limits)?;
        let simplified_expr = parse(simplified, "simplified", &self.limits)?;

        let variables = extract_variables(original);
        if variables.len() > self.limits.max_variables {
            return Err(VerityError::ResourceLimitExceeded {
                limit_name: "max_variables".to_string(),
                limit_value: self.limits.max_variables.to_string(),
                actual_value: variables.len().to_string(),
                suggestion: format!(
                    "The truth table would have 2^{} rows; raise the limit or split the expression",
                    variables.len()
                ),
            });
        }

        let combinations: u64 = 1 << variables.len();
        debug!(
            variables = variables.len(),
            rows = combinations,
            "enumerating assignments"
        );

        let mut report = Report::new(original, simplified, variables.clone());
        for i in 0..combinations {
            let assignment = Assignment::from_index(&variables, i);
            let original_result = self.evaluator.evaluate(&original_expr, &assignment)?;
            let simplified_result = self.evaluator.evaluate(&simplified_expr, &assignment)?;
            trace!(
                row = i,
                inputs = %assignment.to_canonical_string(),
                original = original_result,
                simplified = simplified_result
            );

            report.add_row(Row {
                assignment,
                original: original_result,
                simplified: simplified_result,
            });
        }

        debug!(
            equivalent = report.equivalent,
            original_satisfying = report.original_satisfiability.inputs.len(),
            simplified_satisfying = report.simplified_satisfiability.inputs.len(),
            "truth table complete"
        );

        Ok(report)
    }

    /// Evaluate a single expression under `assignment`, within this engine's limits
    pub fn evaluate(&self, expression: &str, assignment: &Assignment) -> VerityResult<bool> {
        let parsed = parse(expression, "<input>", &self.limits)?;
        self.evaluator.evaluate(&parsed, assignment)
    }
}
