//! Core data structures shared by the parser, the series extractor and the
//! presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One `(time, variable, value)` data point extracted from a recipe.
///
/// Observations are created only by the recipe parser and are read-only
/// afterwards; the fields are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    time: u64,
    variable: String,
    value: f64,
}

impl Observation {
    pub(crate) fn new(time: u64, variable: impl Into<String>, value: f64) -> Self {
        Self {
            time,
            variable: variable.into(),
            value,
        }
    }

    /// Accumulated recipe time in seconds
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}s {}={}", self.time, self.variable, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_accessors() {
        let obs = Observation::new(90, "ReactorTemp", 650.5);
        assert_eq!(obs.time(), 90);
        assert_eq!(obs.variable(), "ReactorTemp");
        assert_eq!(obs.value(), 650.5);
        assert_eq!(obs.to_string(), "t=90s ReactorTemp=650.5");
    }

    #[test]
    fn test_observation_serializes_with_field_names() {
        let obs = Observation::new(10, "TMGa.Flow", 2.0);
        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["time"], 10);
        assert_eq!(json["variable"], "TMGa.Flow");
        assert_eq!(json["value"], 2.0);
    }
}
