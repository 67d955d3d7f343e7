//! Axis ranges and terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

/// Inclusive value range of one chart axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Exact extrema of the finite values.
    ///
    /// * No finite values at all gives `(0.0, 1.0)`.
    /// * A flat series is widened by +-0.5 so it still gets a visible span.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
        for v in values.into_iter().filter(|v| v.is_finite()) {
            low = low.min(v);
            high = high.max(v);
        }

        if !low.is_finite() || !high.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }

        if (high - low).abs() < f64::EPSILON {
            return Self {
                min: low - 0.5,
                max: high + 0.5,
            };
        }

        Self {
            min: low,
            max: high,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` inside the range, clamped to `0.0..=1.0`
    pub fn fraction(&self, v: f64) -> f64 {
        ((v - self.min) / self.span()).clamp(0.0, 1.0)
    }

    pub fn midpoint(&self) -> f64 {
        self.min + self.span() / 2.0
    }
}

/// Current terminal size in characters (80x24 fallback)
pub fn terminal_geometry() -> (usize, usize) {
    terminal_size()
        .map(|(Width(w), Height(h))| (usize::from(w), usize::from(h)))
        .unwrap_or((80, 24))
}
