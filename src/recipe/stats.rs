//! Parsing statistics and result structures for recipe processing
//!
//! The counters describe what the parser saw and dropped; they never change
//! which observations are produced.

use crate::models::Observation;
use crate::series::{Series, series_for, variables_of};

/// Parsing result with observations and basic statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Observations in line order, then match order
    pub observations: Vec<Observation>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// True when the recipe produced no observations at all
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Sorted, de-duplicated variable names
    pub fn variables(&self) -> Vec<String> {
        variables_of(&self.observations)
    }

    /// Time series for one variable (empty if it never occurs)
    pub fn series(&self, name: &str) -> Series {
        series_for(&self.observations, name)
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Every input line, including blanks and comments
    pub total_lines: usize,

    /// Blank and comment lines
    pub lines_skipped: usize,

    /// Lines whose leading timestamp was applied to the clock
    pub timestamp_lines: usize,

    /// `name = value` matches found
    pub assignments_matched: usize,

    /// Observations emitted
    pub observations_parsed: usize,

    /// Matches dropped because the value was not numeric
    pub values_discarded: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of matched assignments that became observations
    pub fn acceptance_rate(&self) -> f64 {
        if self.assignments_matched == 0 {
            0.0
        } else {
            (self.observations_parsed as f64 / self.assignments_matched as f64) * 100.0
        }
    }
}
