//! Command implementations for the recipe CLI
//!
//! Each subcommand lives in its own module:
//! - `observations`: every parsed observation plus a parse summary
//! - `variables`: the variable catalog
//! - `series`: per-variable (time, value) pairs
//! - `plot`: braille chart of selected variables

pub mod observations;
pub mod plot;
pub mod series;
pub mod shared;
pub mod variables;

pub use shared::RunSummary;

use crate::cli::args::{Args, Commands};
use tracing::{debug, info};

/// Main command runner
///
/// Sets up logging and configuration, then dispatches to the subcommand.
pub fn run(args: Args) -> anyhow::Result<RunSummary> {
    shared::setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let command = args.get_command()?;
    let config = shared::load_configuration(&args)?;

    let summary = match command {
        Commands::Observations(a) => observations::run_observations(a),
        Commands::Variables(a) => variables::run_variables(a),
        Commands::Series(a) => series::run_series(a),
        Commands::Plot(a) => plot::run_plot(a, &config),
    }?;

    if summary.empty_recipe {
        info!("Finished: recipe contained no observations");
    } else {
        info!(
            "Finished: {} observations across {} variables, {} reported",
            summary.observations, summary.variables, summary.series_reported
        );
    }
    Ok(summary)
}
