//! `observations` command: list every parsed observation

use super::shared::{RunSummary, load_recipe, warn_empty_recipe};
use crate::cli::args::{ObservationsArgs, OutputFormat};
use crate::recipe::ParseResult;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

pub fn run_observations(args: ObservationsArgs) -> anyhow::Result<RunSummary> {
    let result = load_recipe(&args.recipe)?;
    let summary = RunSummary::from_result(&result);
    if result.is_empty() {
        warn_empty_recipe(&args.recipe);
        return Ok(summary);
    }

    let mut out = std::io::stdout().lock();
    write_observations(&mut out, &result, args.output_format)
        .context("Failed to write observations")?;
    Ok(summary)
}

/// Write observations in the requested format
pub fn write_observations<W: Write>(
    out: &mut W,
    result: &ParseResult,
    format: OutputFormat,
) -> crate::Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(
                out,
                "{}",
                format!("{:>8}  {:<24} {:>12}", "time (s)", "variable", "value").bold()
            )?;
            for obs in &result.observations {
                writeln!(
                    out,
                    "{:>8}  {:<24} {:>12}",
                    obs.time(),
                    obs.variable(),
                    obs.value()
                )?;
            }
            let stats = &result.stats;
            writeln!(out)?;
            writeln!(
                out,
                "{} {} observations from {} lines ({} skipped, {} values discarded)",
                "Summary:".bright_green().bold(),
                stats.observations_parsed,
                stats.total_lines,
                stats.lines_skipped,
                stats.values_discarded
            )?;
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "observations": result.observations,
                "stats": result.stats,
            });
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "time,variable,value")?;
            for obs in &result.observations {
                writeln!(out, "{},{},{}", obs.time(), obs.variable(), obs.value())?;
            }
        }
    }
    Ok(())
}
