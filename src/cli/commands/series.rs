//! `series` command: print the (time, value) pairs of selected variables

use super::shared::{RunSummary, load_recipe, warn_empty_recipe};
use crate::cli::args::{OutputFormat, SeriesArgs};
use crate::series::Series;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;
use tracing::warn;

pub fn run_series(args: SeriesArgs) -> anyhow::Result<RunSummary> {
    let result = load_recipe(&args.recipe)?;
    let mut summary = RunSummary::from_result(&result);
    if result.is_empty() {
        warn_empty_recipe(&args.recipe);
        return Ok(summary);
    }

    let series: Vec<Series> = args
        .variables
        .iter()
        .map(|name| {
            let s = result.series(name);
            if s.is_empty() {
                warn!("Variable '{}' not found in recipe", name);
            }
            s
        })
        .collect();

    let mut out = std::io::stdout().lock();
    write_series(&mut out, &series, args.output_format).context("Failed to write series")?;
    summary.series_reported = series.len();
    Ok(summary)
}

pub fn write_series<W: Write>(
    out: &mut W,
    series: &[Series],
    format: OutputFormat,
) -> crate::Result<()> {
    match format {
        OutputFormat::Human => {
            for s in series {
                writeln!(
                    out,
                    "{} ({} points)",
                    s.name().bright_cyan().bold(),
                    s.len()
                )?;
                for (time, value) in s.points() {
                    writeln!(out, "  {:>8} s  {}", time, value)?;
                }
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, series)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "variable,time,value")?;
            for s in series {
                for (time, value) in s.points() {
                    writeln!(out, "{},{},{}", s.name(), time, value)?;
                }
            }
        }
    }
    Ok(())
}
