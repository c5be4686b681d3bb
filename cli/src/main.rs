mod error_formatter;
mod formatter;
mod interactive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use std::io;
use tracing::debug;
use verity::{Engine, ResourceLimits};

#[derive(Parser)]
#[command(name = "verity")]
#[command(about = "Check that a simplified boolean expression still means the same thing.")]
#[command(
    long_about = "Verity builds the full truth table of an original and a simplified boolean expression,\nreports whether they are equivalent, and lists the inputs that satisfy each of them.\n\nExpressions use single-letter variables, '&' for AND, '|' for OR, '!' for NOT and parentheses.\nThere is no precedence between '&' and '|': expressions are evaluated strictly left to right."
)]
#[command(version)]
struct Cli {
    /// Log engine progress to stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an original expression with its simplified form
    ///
    /// Prints the truth table, the satisfying inputs of both expressions and
    /// whether they are equivalent. Missing expressions are prompted for.
    Check {
        /// Original expression, e.g. "((!(A&B)|!C)&(C&A&B))|(A&C)"
        original: Option<String>,
        /// Simplified expression, e.g. "A&C"
        simplified: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Refuse expressions with more variables than this (2^N rows)
        #[arg(long, value_name = "N")]
        max_variables: Option<usize>,
        /// Prompt for both expressions, pre-filled with any given on the command line
        #[arg(short, long)]
        interactive: bool,
    },
    /// Evaluate one expression for given variable values
    ///
    /// Examples:
    ///   verity eval "A|B&C" A=1 B=0 C=0
    ///   verity eval "!a&b" a=false b=true
    Eval {
        /// Expression to evaluate
        expression: String,
        /// Variable values (format: NAME=VALUE, VALUE is 1, 0, true or false)
        bindings: Vec<String>,
        /// Output the result only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Suggest a smaller equivalent expression and verify it
    ///
    /// Reduces the expression through a binary decision diagram and checks
    /// the suggestion against the original with a full truth table.
    Suggest {
        /// Expression to simplify
        expression: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Check {
            original,
            simplified,
            json,
            max_variables,
            interactive,
        } => check_command(
            original.clone(),
            simplified.clone(),
            *json,
            *max_variables,
            *interactive,
        ),
        Commands::Eval {
            expression,
            bindings,
            raw,
        } => eval_command(expression, bindings, *raw),
        Commands::Suggest { expression } => suggest_command(expression),
    };

    if let Err(e) = result {
        if let Some(verity_err) = e.downcast_ref::<verity::VerityError>() {
            eprintln!("{}", error_formatter::format_error(verity_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "verity=debug" } else { "verity=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn check_command(
    original: Option<String>,
    simplified: Option<String>,
    json: bool,
    max_variables: Option<usize>,
    interactive: bool,
) -> Result<()> {
    let (original, simplified) = match (original, simplified) {
        (Some(original), Some(simplified)) if !interactive => (original, simplified),
        (original, simplified) => interactive::prompt_expressions(original, simplified, interactive)?,
    };

    let limits = match max_variables {
        Some(max) => ResourceLimits::default().with_max_variables(max),
        None => ResourceLimits::default(),
    };
    let engine = Engine::with_limits(limits);
    let report = engine.run(&original, &simplified)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_report(&report));
    }

    Ok(())
}

fn eval_command(expression: &str, bindings: &[String], raw: bool) -> Result<()> {
    let refs: Vec<&str> = bindings.iter().map(|s| s.as_str()).collect();
    let assignment = verity::parse_assignment(&refs)?;

    let engine = Engine::new();
    let result = engine.evaluate(expression, &assignment)?;

    let formatter = Formatter::default();
    print!(
        "{}",
        formatter.format_evaluation(expression, &assignment, result, raw)
    );

    Ok(())
}

fn suggest_command(expression: &str) -> Result<()> {
    let engine = Engine::new();
    let parsed = verity::parse(expression, "original", engine.limits())?;
    let suggestion = verity::suggest_simplification(&parsed)?;
    debug!(%suggestion, "verifying suggestion");

    // Verify the suggestion the same way a hand-written one would be
    let report = engine.run(expression, &suggestion)?;

    let formatter = Formatter::default();
    print!("{}", formatter.format_suggestion(&suggestion, &report));

    Ok(())
}
