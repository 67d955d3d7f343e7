//! Recipe parser for time-annotated MOCVD process recipes
//!
//! A recipe is plain text. Each non-comment line may start with a timestamp
//! and may contain any number of `name = value` assignments:
//!
//! ```text
//! # growth step
//! 00:00:00 ReactorTemp=500 ReactorPress=100
//! 00:05:00 ReactorTemp=650
//! 30 TMGa.Flow=12.5
//! ```
//!
//! `H:M:S` timestamps set the running clock, bare integers advance it. Every
//! assignment with a numeric value becomes an [`Observation`] at the current
//! clock value; anything else is skipped without failing the parse.
//!
//! ## Architecture
//!
//! - [`parser`] - line scan, clock threading and file loading
//! - [`timestamp`] - leading timestamp detection as a [`ClockEffect`]
//! - [`assignment`] - `name = value` extraction and numeric interpretation
//! - [`stats`] - parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use mocvd_recipe::recipe::parse;
//!
//! let observations = parse(["00:00:10 A=1.5 B=2", "5 A=2"]);
//! assert_eq!(observations.len(), 3);
//! assert_eq!(observations[2].time(), 15);
//! ```
//!
//! [`Observation`]: crate::models::Observation

pub mod assignment;
pub mod parser;
pub mod stats;
pub mod timestamp;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use assignment::{Assignment, extract_assignments, parse_value};
pub use parser::{RecipeParser, parse, read_recipe_text};
pub use stats::{ParseResult, ParseStats};
pub use timestamp::ClockEffect;
