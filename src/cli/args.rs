//! Command-line argument definitions for the recipe tool
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::error::{RecipeError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the MOCVD recipe tool
///
/// Parses time-annotated process recipes into observations and plots
/// parameter series in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mocvd-recipe",
    version,
    about = "Parse MOCVD process recipes and plot parameters over time",
    long_about = "Reads a time-annotated MOCVD process recipe, accumulates the recipe clock \
                  line by line (H:M:S sets it, a bare integer advances it) and extracts every \
                  numeric name=value assignment. Results can be listed, exported as JSON/CSV \
                  or plotted as a braille chart in the terminal."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// JSON configuration file for plot defaults. If not specified,
    /// looks for <config dir>/mocvd-recipe/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List every observation extracted from the recipe
    Observations(ObservationsArgs),
    /// List the distinct variable names found in the recipe
    Variables(VariablesArgs),
    /// Print the (time, value) series of selected variables
    Series(SeriesArgs),
    /// Plot selected variables against recipe time
    Plot(PlotArgs),
}

/// Arguments for the observations command
#[derive(Debug, Clone, Parser)]
pub struct ObservationsArgs {
    /// Recipe file to parse ("-" reads standard input)
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the variables command
#[derive(Debug, Clone, Parser)]
pub struct VariablesArgs {
    /// Recipe file to parse ("-" reads standard input)
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the series command
#[derive(Debug, Clone, Parser)]
pub struct SeriesArgs {
    /// Recipe file to parse ("-" reads standard input)
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,

    /// Variables to extract (repeatable)
    #[arg(
        short = 'n',
        long = "variable",
        value_name = "NAME",
        required = true,
        help = "Variable to extract; repeat for several"
    )]
    pub variables: Vec<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the plot command
#[derive(Debug, Clone, Parser)]
pub struct PlotArgs {
    /// Recipe file to parse ("-" reads standard input)
    #[arg(value_name = "RECIPE")]
    pub recipe: PathBuf,

    /// Variables to plot (repeatable)
    ///
    /// If not specified, plots the configured defaults (ReactorTemp and
    /// ReactorPress) that occur in the recipe.
    #[arg(
        short = 'n',
        long = "variable",
        value_name = "NAME",
        help = "Variable to plot; repeat for several"
    )]
    pub variables: Vec<String>,

    /// Plot area width in characters (defaults to the terminal width)
    #[arg(long = "width", value_name = "COLS")]
    pub width: Option<usize>,

    /// Plot area height in characters
    #[arg(long = "height", value_name = "ROWS")]
    pub height: Option<usize>,

    /// Chart title
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Disable ANSI colours
    #[arg(long = "no-color", help = "Disable coloured output")]
    pub no_color: bool,
}

/// Output format options for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command, or a configuration error when none was given
    pub fn get_command(&self) -> Result<Commands> {
        self.command
            .clone()
            .ok_or_else(|| RecipeError::configuration("No subcommand given"))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl PlotArgs {
    /// Validate explicit size overrides before anything is parsed
    pub fn validate(&self) -> Result<()> {
        if self.width == Some(0) || self.height == Some(0) {
            return Err(RecipeError::configuration(
                "Plot width and height must be greater than 0",
            ));
        }
        Ok(())
    }
}
