//! Leading timestamp detection and clock effects
//!
//! A recipe line may start with either an absolute `H:M:S` timestamp, which
//! sets the running clock, or a bare integer, which advances it. The choice is
//! made per line and expressed as a [`ClockEffect`].

use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TIMESTAMP_PATTERN};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// Effect a timestamp token has on the running clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEffect {
    /// Colon form: the clock jumps to this many seconds
    SetClock(u64),
    /// Bare integer: the clock moves forward by this many seconds
    AdvanceClock(u64),
}

impl ClockEffect {
    /// Detect a timestamp token at the start of an already-trimmed line.
    ///
    /// Returns `None` only when the line has no leading timestamp.
    pub fn detect(line: &str) -> Option<Self> {
        let token = TIMESTAMP_RE.captures(line)?.get(1)?.as_str();
        Some(Self::from_token(token))
    }

    /// Interpret a matched token (`H:M:S` or digits only)
    fn from_token(token: &str) -> Self {
        if token.contains(':') {
            let mut parts = token.splitn(3, ':').map(component);
            let hours = parts.next().unwrap_or(0);
            let minutes = parts.next().unwrap_or(0);
            let seconds = parts.next().unwrap_or(0);
            let total = hours
                .saturating_mul(SECONDS_PER_HOUR)
                .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
                .saturating_add(seconds);
            Self::SetClock(total)
        } else {
            Self::AdvanceClock(component(token))
        }
    }

    /// New clock value after applying this effect to `clock`
    pub fn apply(self, clock: u64) -> u64 {
        match self {
            Self::SetClock(seconds) => seconds,
            Self::AdvanceClock(delta) => clock.saturating_add(delta),
        }
    }
}

/// All-digit timestamp component; values past `u64::MAX` saturate
fn component(digits: &str) -> u64 {
    digits.parse::<u64>().unwrap_or_else(|_| {
        warn!("Timestamp component '{}' out of range, saturating", digits);
        u64::MAX
    })
}
