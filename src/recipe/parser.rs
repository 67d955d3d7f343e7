//! Core recipe parsing
//!
//! One linear scan over the lines: trim, skip comments, apply the leading
//! timestamp to a local clock, then emit one observation per numeric
//! assignment at the current clock value.

use super::assignment::extract_assignments;
use super::stats::{ParseResult, ParseStats};
use super::timestamp::ClockEffect;
use crate::constants::COMMENT_MARKER;
use crate::error::{RecipeError, Result};
use crate::models::Observation;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parse recipe lines into observations.
///
/// Malformed content never fails the parse; it is skipped.
pub fn parse<I, S>(lines: I) -> Vec<Observation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RecipeParser::new().parse_lines(lines).observations
}

/// Recipe parser entry points for lines, whole texts and files
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeParser;

impl RecipeParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a sequence of lines, collecting statistics alongside
    pub fn parse_lines<I, S>(&self, lines: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut clock: u64 = 0;
        let mut observations = Vec::new();
        let mut stats = ParseStats::new();

        for (index, raw) in lines.into_iter().enumerate() {
            stats.total_lines += 1;
            let line_number = index + 1;
            let line = raw.as_ref().trim();

            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                stats.lines_skipped += 1;
                continue;
            }

            if let Some(effect) = ClockEffect::detect(line) {
                clock = effect.apply(clock);
                stats.timestamp_lines += 1;
            }

            for assignment in extract_assignments(line) {
                stats.assignments_matched += 1;
                match assignment.numeric_value() {
                    Some(value) => {
                        observations.push(Observation::new(clock, assignment.name, value));
                        stats.observations_parsed += 1;
                    }
                    None => {
                        stats.values_discarded += 1;
                        debug!(
                            "Line {}: discarding non-numeric value {}={}",
                            line_number, assignment.name, assignment.raw_value
                        );
                    }
                }
            }
        }

        debug!(
            "Parsed {} lines: {} observations, {} skipped lines, {} discarded values",
            stats.total_lines,
            stats.observations_parsed,
            stats.lines_skipped,
            stats.values_discarded
        );

        ParseResult {
            observations,
            stats,
        }
    }

    /// Parse a whole recipe text; `\r\n`, `\n`, `\r` and the other Unicode
    /// line boundaries (form feed, NEL, U+2028, ...) all end a line
    pub fn parse_str(&self, text: &str) -> ParseResult {
        self.parse_lines(split_lines(text))
    }

    /// Read and parse a UTF-8 recipe file, or standard input when `path` is `-`
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        let text = read_recipe_text(path)?;
        let result = self.parse_str(&text);
        debug!(
            "Recipe {}: {} observations",
            path.display(),
            result.observations.len()
        );
        Ok(result)
    }
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line and paragraph separators
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into lines; a final break does not start an extra empty line
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((index, brk)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..index];
        let mut next = index + brk.len_utf8();
        if brk == '\r' && rest[next..].starts_with('\n') {
            next += 1;
        }
        rest = &rest[next..];
        Some(line)
    })
}

/// Load recipe text, reporting missing files and non-UTF-8 content distinctly
pub fn read_recipe_text(path: &Path) -> Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        buf
    } else {
        if !path.exists() {
            return Err(RecipeError::file_not_found(path));
        }
        std::fs::read(path)?
    };

    String::from_utf8(bytes).map_err(|source| RecipeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
