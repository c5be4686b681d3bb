use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use verity::{Assignment, Report, Satisfiability};

fn bit(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Render a full check: inputs, truth table, satisfiability and verdict
    pub fn format_report(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str("You Entered:\n");
        output.push_str(&format!("  Original:   {}\n", report.original));
        output.push_str(&format!("  Simplified: {}\n\n", report.simplified));

        output.push_str(&self.format_truth_table(report));
        output.push_str("\n\n");

        output.push_str(&self.format_satisfiability(
            "Original",
            &report.original_satisfiability,
        ));
        output.push('\n');
        output.push_str(&self.format_satisfiability(
            "Simplified",
            &report.simplified_satisfiability,
        ));
        output.push('\n');

        output.push_str(&self.format_verdict(report));
        output.push('\n');

        output
    }

    fn format_truth_table(&self, report: &Report) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        let mut header: Vec<Cell> = report
            .variables
            .iter()
            .map(|var| Cell::new(var).set_alignment(CellAlignment::Center))
            .collect();
        header.push(Cell::new("Original").set_alignment(CellAlignment::Center));
        header.push(Cell::new("Simplified").set_alignment(CellAlignment::Center));
        table.set_header(Row::from(header));

        for row in &report.rows {
            let mut cells: Vec<Cell> = row
                .assignment
                .iter()
                .map(|(_, value)| Cell::new(bit(value)).set_alignment(CellAlignment::Center))
                .collect();
            cells.push(Cell::new(bit(row.original)).set_alignment(CellAlignment::Center));
            cells.push(Cell::new(bit(row.simplified)).set_alignment(CellAlignment::Center));
            table.add_row(Row::from(cells));
        }

        table.to_string()
    }

    fn format_satisfiability(&self, name: &str, satisfiability: &Satisfiability) -> String {
        if !satisfiability.satisfiable {
            return format!("{} Expression is Unsatisfiable.\n", name);
        }

        let mut output = format!("Satisfiable Inputs for {} Expression:\n", name);
        for input in &satisfiability.inputs {
            if input.is_empty() {
                output.push_str(" (always true, no variables)\n");
            } else {
                output.push_str(input);
                output.push('\n');
            }
        }
        output
    }

    pub fn format_verdict(&self, report: &Report) -> String {
        let verdict = if report.equivalent {
            "Equivalent"
        } else {
            "Not Equivalent"
        };
        format!(
            "The 2 Expressions: '{}' and '{}' are {}.",
            report.original, report.simplified, verdict
        )
    }

    /// Render a single evaluation. `raw` prints the bare result.
    pub fn format_evaluation(
        &self,
        expression: &str,
        assignment: &Assignment,
        result: bool,
        raw: bool,
    ) -> String {
        if raw {
            return format!("{}\n", bit(result));
        }

        let mut output = String::new();
        if !assignment.is_empty() {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(Row::from(vec![
                Cell::new("Variable").set_alignment(CellAlignment::Left),
                Cell::new("Value").set_alignment(CellAlignment::Left),
            ]));
            for (var, value) in assignment.iter() {
                table.add_row(Row::from(vec![Cell::new(var), Cell::new(bit(value))]));
            }
            output.push_str(&table.to_string());
            output.push('\n');
        }
        output.push_str(&format!("{} = {}\n", expression, bit(result)));
        output
    }

    /// Render a suggestion together with the check that verified it
    pub fn format_suggestion(&self, suggestion: &str, report: &Report) -> String {
        let mut output = format!("Suggested: {}\n", suggestion);
        output.push_str(&self.format_verdict(report));
        output.push('\n');
        if !report.equivalent {
            for row in report.counterexamples() {
                output.push_str(&format!(
                    "  differs at{}: original {} suggested {}\n",
                    row.assignment.to_canonical_string(),
                    bit(row.original),
                    bit(row.simplified)
                ));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity::Engine;

    fn report(original: &str, simplified: &str) -> Report {
        Engine::new()
            .run(original, simplified)
            .expect("expressions should check")
    }

    #[test]
    fn test_equivalent_report() {
        let output = Formatter::new().format_report(&report("((!(A&B)|!C)&(C&A&B))|(A&C)", "A&C"));

        assert!(output.contains("Original:   ((!(A&B)|!C)&(C&A&B))|(A&C)"));
        assert!(output.contains("Simplified: A&C"));
        assert!(output.contains("Satisfiable Inputs for Original Expression:\n -A=1 -B=0 -C=1\n -A=1 -B=1 -C=1\n"));
        assert!(output.contains("Satisfiable Inputs for Simplified Expression:"));
        assert!(output.ends_with(
            "The 2 Expressions: '((!(A&B)|!C)&(C&A&B))|(A&C)' and 'A&C' are Equivalent.\n"
        ));
    }

    #[test]
    fn test_truth_table_columns() {
        let table = Formatter::new().format_truth_table(&report("A|B", "B|A"));
        let header = table
            .lines()
            .find(|line| line.contains("Original"))
            .expect("header line");

        let a = header.find('A').expect("A column");
        let b = header.find('B').expect("B column");
        let original = header.find("Original").expect("Original column");
        assert!(a < b && b < original);
        assert!(header.contains("Simplified"));
    }

    #[test]
    fn test_unsatisfiable_notice() {
        let output = Formatter::new().format_report(&report("A&!A", "A"));

        assert!(output.contains("Original Expression is Unsatisfiable."));
        assert!(output.contains("Satisfiable Inputs for Simplified Expression:\n -A=1\n"));
        assert!(output.contains("are Not Equivalent."));
    }

    #[test]
    fn test_evaluation_raw_and_table() {
        let assignment: Assignment = [
            (verity::Variable::new('A').unwrap(), true),
            (verity::Variable::new('B').unwrap(), false),
        ]
        .into_iter()
        .collect();
        let formatter = Formatter::new();

        assert_eq!(formatter.format_evaluation("A&B", &assignment, false, true), "0\n");

        let output = formatter.format_evaluation("A|B", &assignment, true, false);
        assert!(output.contains("Variable"));
        assert!(output.ends_with("A|B = 1\n"));
    }

    #[test]
    fn test_suggestion_lists_counterexamples() {
        let output = Formatter::new().format_suggestion("A", &report("A&B", "A"));

        assert!(output.starts_with("Suggested: A\n"));
        assert!(output.contains("are Not Equivalent."));
        assert!(output.contains("differs at -A=1 -B=0: original 0 suggested 1"));
    }
}
