//! `variables` command: print the variable catalog

use super::shared::{RunSummary, load_recipe, warn_empty_recipe};
use crate::cli::args::{OutputFormat, VariablesArgs};
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

pub fn run_variables(args: VariablesArgs) -> anyhow::Result<RunSummary> {
    let result = load_recipe(&args.recipe)?;
    let mut summary = RunSummary::from_result(&result);
    if result.is_empty() {
        warn_empty_recipe(&args.recipe);
        return Ok(summary);
    }

    let variables = result.variables();
    let mut out = std::io::stdout().lock();
    write_variables(&mut out, &variables, args.output_format)
        .context("Failed to write variable list")?;
    summary.series_reported = variables.len();
    Ok(summary)
}

pub fn write_variables<W: Write>(
    out: &mut W,
    variables: &[String],
    format: OutputFormat,
) -> crate::Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(
                out,
                "{}",
                format!("Variables ({}):", variables.len()).bright_green().bold()
            )?;
            for name in variables {
                writeln!(out, "  - {}", name)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, variables)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "variable")?;
            for name in variables {
                writeln!(out, "{}", name)?;
            }
        }
    }
    Ok(())
}
