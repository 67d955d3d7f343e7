//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, recipe loading and the empty-recipe
//! warning used by every subcommand.

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::EMPTY_RECIPE_WARNING;
use crate::recipe::{ParseResult, RecipeParser};
use anyhow::Context;
use colored::Colorize;
use std::path::Path;
use tracing::{debug, info, warn};

/// What a command run produced, for the caller's exit handling
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Observations parsed from the recipe
    pub observations: usize,
    /// Distinct variables in the recipe
    pub variables: usize,
    /// Series written or plotted
    pub series_reported: usize,
    /// The recipe produced no observations
    pub empty_recipe: bool,
}

impl RunSummary {
    pub fn from_result(result: &ParseResult) -> Self {
        Self {
            observations: result.observations.len(),
            variables: result.variables().len(),
            series_reported: 0,
            empty_recipe: result.is_empty(),
        }
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) -> crate::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mocvd_recipe={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration (explicit file, default location, or built-in defaults)
pub fn load_configuration(args: &Args) -> anyhow::Result<Config> {
    let config = Config::load(args.config_file.as_deref()).with_context(|| match &args.config_file {
        Some(path) => format!("Failed to load config file {}", path.display()),
        None => "Failed to load default configuration".to_string(),
    })?;
    config.validate().context("Invalid configuration")?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Read and parse the recipe at `path` (`-` for standard input)
pub fn load_recipe(path: &Path) -> anyhow::Result<ParseResult> {
    info!("Parsing recipe {}", path.display());
    let result = RecipeParser::new()
        .parse_file(path)
        .with_context(|| format!("Failed to read recipe {}", path.display()))?;

    info!(
        "Recipe parsed: {} observations ({} values discarded, {:.1}% accepted)",
        result.stats.observations_parsed,
        result.stats.values_discarded,
        result.stats.acceptance_rate()
    );
    Ok(result)
}

/// Surface an empty parse as a non-fatal, user-facing warning
pub fn warn_empty_recipe(path: &Path) {
    warn!("Recipe {} produced no observations", path.display());
    eprintln!("{} {}", "Warning:".yellow().bold(), EMPTY_RECIPE_WARNING);
}
