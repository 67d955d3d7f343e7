//! Test utilities for recipe parser testing
//!
//! Shared sample recipes and temp-file helpers used by the test modules below.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;
mod timestamp_tests;

/// Helper to create a realistic growth recipe
pub fn create_test_recipe() -> String {
    r#"# GaN buffer growth
# ramp-up
00:00:00 ReactorTemp=500 ReactorPress=100 NH3.Flow=0
00:05:00 ReactorTemp=650 ReactorPress=200
60 ReactorTemp=800 TMGa.Flow=12.5

# hold
00:10:00 ReactorTemp=1050 ReactorPress=200 Mode=GROW
   30   TMGa.Flow = 15
00:20:00 ReactorTemp=500"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

/// `(time, variable, value)` triples for compact assertions
pub fn triples(observations: &[crate::models::Observation]) -> Vec<(u64, String, f64)> {
    observations
        .iter()
        .map(|obs| (obs.time(), obs.variable().to_string(), obs.value()))
        .collect()
}
