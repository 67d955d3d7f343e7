//! `plot` command: braille chart of selected variables over recipe time

use super::shared::{RunSummary, load_recipe, warn_empty_recipe};
use crate::cli::args::PlotArgs;
use crate::config::{Config, PlotConfig};
use crate::constants::MIN_CHART_WIDTH;
use crate::render::{Chart, terminal_geometry};
use crate::series::Series;
use anyhow::Context;
use std::io::Write;
use tracing::{debug, warn};

/// Columns reserved for value labels and the frame when sizing from the terminal
const TERMINAL_MARGIN: usize = 14;

pub fn run_plot(args: PlotArgs, config: &Config) -> anyhow::Result<RunSummary> {
    args.validate()?;

    let mut plot_config = config.plot.clone();
    apply_cli_overrides(&mut plot_config, &args);
    plot_config.validate().context("Invalid plot settings")?;

    let result = load_recipe(&args.recipe)?;
    let mut summary = RunSummary::from_result(&result);
    if result.is_empty() {
        warn_empty_recipe(&args.recipe);
        return Ok(summary);
    }

    let catalog = result.variables();
    let selected = select_variables(&args.variables, &plot_config.default_variables, &catalog);
    debug!("Plotting variables: {:?}", selected);

    let series: Vec<Series> = selected.iter().map(|name| result.series(name)).collect();
    for s in series.iter().filter(|s| s.is_empty()) {
        warn!("Variable '{}' not found in recipe", s.name());
    }

    let (width, height) = chart_size(&plot_config);
    let chart = Chart::from_config(&plot_config, width, height);
    let text = chart.render(&series)?;

    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())
        .context("Failed to write chart")?;

    summary.series_reported = series.len();
    Ok(summary)
}

/// Apply CLI argument overrides to the plot configuration
fn apply_cli_overrides(plot: &mut PlotConfig, args: &PlotArgs) {
    if let Some(width) = args.width {
        plot.width = Some(width);
    }
    if let Some(height) = args.height {
        plot.height = height;
    }
    if let Some(title) = &args.title {
        plot.title = title.clone();
    }
    if args.no_color {
        plot.color = false;
    }
}

/// Explicit names are plotted as given; otherwise the configured defaults
/// that actually occur in the recipe.
pub fn select_variables(
    requested: &[String],
    defaults: &[String],
    catalog: &[String],
) -> Vec<String> {
    if !requested.is_empty() {
        return requested.to_vec();
    }

    defaults
        .iter()
        .filter(|name| {
            let present = catalog.contains(name);
            if !present {
                warn!("Default variable '{}' not found in recipe, skipping", name);
            }
            present
        })
        .cloned()
        .collect()
}

/// Plot area size: configured width or the terminal width minus label room
fn chart_size(plot: &PlotConfig) -> (usize, usize) {
    let width = plot.width.unwrap_or_else(|| {
        let (term_w, _) = terminal_geometry();
        term_w.saturating_sub(TERMINAL_MARGIN).max(MIN_CHART_WIDTH)
    });
    (width, plot.height)
}
