//! `identifier = value` extraction and numeric interpretation of values

use crate::constants::ASSIGNMENT_PATTERN;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ASSIGNMENT_PATTERN).expect("assignment pattern is valid"));

/// A raw assignment as matched on a line, before numeric interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub name: &'a str,
    pub raw_value: &'a str,
}

impl Assignment<'_> {
    /// Interpret the captured value as a float, `None` when it is not numeric
    pub fn numeric_value(&self) -> Option<f64> {
        parse_value(self.raw_value)
    }
}

/// All assignments on `line`, left to right, non-overlapping
pub fn extract_assignments(line: &str) -> impl Iterator<Item = Assignment<'_>> {
    ASSIGNMENT_RE.captures_iter(line).filter_map(|caps| {
        Some(Assignment {
            name: caps.get(1)?.as_str(),
            raw_value: caps.get(2)?.as_str(),
        })
    })
}

/// Parse a captured value token as `f64`.
///
/// Accepts everything `f64::from_str` does (decimals, exponents, `inf`,
/// `nan`) plus single `_` digit separators between two digits.
pub fn parse_value(token: &str) -> Option<f64> {
    let cleaned = strip_digit_separators(token)?;
    cleaned.parse::<f64>().ok()
}

fn strip_digit_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }

    let bytes = token.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        let between_digits = before.is_some_and(|c| c.is_ascii_digit())
            && after.is_some_and(|c| c.is_ascii_digit());
        if !between_digits {
            return None;
        }
    }

    Some(Cow::Owned(token.replace('_', "")))
}
