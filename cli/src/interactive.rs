use anyhow::{Context, Result};
use inquire::Text;

const GATE_HELP: &str = "'&' is AND, '|' is OR, '!' is NOT; evaluated left to right, no precedence";

/// Prompt for whichever expressions were not given on the command line.
///
/// With `prompt_all`, both are asked for and any given value becomes the
/// prompt's initial text.
pub fn prompt_expressions(
    original: Option<String>,
    simplified: Option<String>,
    prompt_all: bool,
) -> Result<(String, String)> {
    let original = match original {
        Some(value) if !prompt_all => value,
        given => prompt_expression("Enter Original Expression:", given.as_deref())
            .context("Failed to read the original expression")?,
    };

    let simplified = match simplified {
        Some(value) if !prompt_all => value,
        given => prompt_expression("Enter Simplified Expression:", given.as_deref())
            .context("Failed to read the simplified expression")?,
    };

    Ok((original, simplified))
}

fn prompt_expression(message: &str, initial: Option<&str>) -> Result<String> {
    let mut prompt = Text::new(message).with_help_message(GATE_HELP);
    if let Some(initial) = initial {
        prompt = prompt.with_initial_value(initial);
    }
    Ok(prompt.prompt()?)
}
