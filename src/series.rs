//! Series extraction: project one variable's `(time, value)` pairs out of a
//! flat observation list, and derive the variable catalog.

use crate::models::Observation;
use serde::Serialize;
use std::collections::BTreeSet;

/// Ordered `(time, value)` pairs for a single variable.
///
/// `times` and `values` are always the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    times: Vec<u64>,
    values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            times: Vec::new(),
            values: Vec::new(),
        }
    }

    fn push(&mut self, time: u64, value: f64) {
        self.times.push(time);
        self.values.push(value);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn times(&self) -> &[u64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// `(time, value)` pairs in recipe order
    pub fn points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<u64>, Vec<f64>) {
        (self.times, self.values)
    }
}

/// Distinct variable names, sorted lexicographically
pub fn variables_of(observations: &[Observation]) -> Vec<String> {
    observations
        .iter()
        .map(Observation::variable)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// All observations of `name`, in their original relative order
pub fn series_for(observations: &[Observation], name: &str) -> Series {
    let mut series = Series::new(name);
    for obs in observations.iter().filter(|obs| obs.variable() == name) {
        series.push(obs.time(), obs.value());
    }
    series
}
