//! MOCVD Recipe Library
//!
//! A Rust library for reading time-annotated MOCVD process recipes and
//! turning them into per-variable time series.
//!
//! This library provides tools for:
//! - Parsing recipe text with a running clock (`H:M:S` sets it, bare integers
//!   advance it) into `(time, variable, value)` observations
//! - Deriving the variable catalog and per-variable series
//! - Rendering selected series as a braille chart in the terminal
//!
//! ```rust
//! use mocvd_recipe::{parse, series_for, variables_of};
//!
//! let observations = parse(["00:01:00 ReactorTemp=650", "30 ReactorTemp=700"]);
//! assert_eq!(variables_of(&observations), vec!["ReactorTemp"]);
//!
//! let (times, values) = series_for(&observations, "ReactorTemp").into_parts();
//! assert_eq!(times, vec![60, 90]);
//! assert_eq!(values, vec![650.0, 700.0]);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod recipe;
pub mod render;
pub mod series;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{Config, PlotConfig};
pub use error::{RecipeError, Result};
pub use models::Observation;
pub use recipe::{ParseResult, ParseStats, RecipeParser, parse};
pub use series::{Series, series_for, variables_of};
