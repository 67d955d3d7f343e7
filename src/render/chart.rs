//! Multi-series line chart on a shared time axis.
//!
//! Layout, top to bottom: title, y-axis label, framed braille plot area with
//! min/mid/max value labels, time tick labels, x-axis label, legend.

use super::bounds::Bounds;
use super::canvas::{BrailleCanvas, DOTS_PER_CELL_Y};
use crate::config::PlotConfig;
use crate::constants::{DECIMAL_PRECISION, MIN_CHART_HEIGHT, MIN_CHART_WIDTH};
use crate::error::{RecipeError, Result};
use crate::series::Series;
use colored::{Color, Colorize};

// Box-drawing glyphs
const TL: char = '┌';
const TR: char = '┐';
const BL: char = '└';
const BR: char = '┘';
const H: char = '─';
const V: char = '│';
const TICK: char = '┤';

/// Border plus one space between value labels and the frame
const FRAME_GUTTER: usize = 2;

const LEGEND_SWATCH: &str = "⣀⣀";

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Blue,
    Color::Red,
];

/// Labels and plot-area size of one chart
#[derive(Debug, Clone)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Plot area width in characters
    pub width: usize,
    /// Plot area height in characters
    pub height: usize,
    pub color: bool,
}

impl Chart {
    pub fn from_config(plot: &PlotConfig, width: usize, height: usize) -> Self {
        Self {
            title: plot.title.clone(),
            x_label: plot.x_label.clone(),
            y_label: plot.y_label.clone(),
            width,
            height,
            color: plot.color,
        }
    }

    fn paint(&self, text: &str, index: usize) -> String {
        if self.color {
            text.color(PALETTE[index % PALETTE.len()]).to_string()
        } else {
            text.to_string()
        }
    }

    /// Render every series into one text block, one `\n`-terminated line per row
    pub fn render(&self, series: &[Series]) -> Result<String> {
        if self.width < MIN_CHART_WIDTH || self.height < MIN_CHART_HEIGHT {
            return Err(RecipeError::ChartTooSmall {
                want_w: MIN_CHART_WIDTH,
                want_h: MIN_CHART_HEIGHT,
                got_w: self.width,
                got_h: self.height,
            });
        }

        let x_bounds = Bounds::of(series.iter().flat_map(|s| s.times().iter().map(|&t| t as f64)));
        let y_bounds = Bounds::of(series.iter().flat_map(|s| s.values().iter().copied()));
        let canvas = self.draw(series, x_bounds, y_bounds);

        let top_label = format!("{:.*}", DECIMAL_PRECISION, y_bounds.max);
        let mid_label = format!("{:.*}", DECIMAL_PRECISION, y_bounds.midpoint());
        let low_label = format!("{:.*}", DECIMAL_PRECISION, y_bounds.min);
        let label_width = [&top_label, &mid_label, &low_label]
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let indent = " ".repeat(label_width + FRAME_GUTTER);
        let total_width = label_width + FRAME_GUTTER + self.width + 1;

        let mut out = String::new();

        // --- heading ---
        let title = centered(&self.title, total_width);
        if self.color {
            out.push_str(&title.bold().to_string());
        } else {
            out.push_str(&title);
        }
        out.push('\n');
        out.push_str(&self.y_label);
        out.push('\n');

        // --- plot area ---
        out.push_str(&format!(
            "{}{}{}{}\n",
            " ".repeat(label_width + 1),
            TL,
            H.to_string().repeat(self.width),
            TR
        ));

        let mid_row = (self.height - 1) / 2;
        for row in 0..self.height {
            let (label, edge) = match row {
                0 => (top_label.as_str(), TICK),
                r if r == self.height - 1 => (low_label.as_str(), TICK),
                r if r == mid_row => (mid_label.as_str(), TICK),
                _ => ("", V),
            };
            out.push_str(&format!(
                "{:>width$} {}",
                label,
                edge,
                width = label_width
            ));
            for cell in canvas.row(row) {
                match cell.owner {
                    Some(owner) if !cell.is_blank() => {
                        out.push_str(&self.paint(&cell.glyph().to_string(), owner));
                    }
                    _ => out.push(' '),
                }
            }
            out.push(V);
            out.push('\n');
        }

        out.push_str(&format!(
            "{}{}{}{}\n",
            " ".repeat(label_width + 1),
            BL,
            H.to_string().repeat(self.width),
            BR
        ));

        // --- time axis ---
        let x_low = format!("{:.*}", DECIMAL_PRECISION, x_bounds.min);
        let x_high = format!("{:.*}", DECIMAL_PRECISION, x_bounds.max);
        let gap = self
            .width
            .saturating_sub(x_low.chars().count() + x_high.chars().count())
            .max(1);
        out.push_str(&format!(
            "{}{}{}{}\n",
            indent,
            x_low,
            " ".repeat(gap),
            x_high
        ));
        out.push_str(&format!("{}{}\n", indent, centered(&self.x_label, self.width)));

        // --- legend ---
        out.push('\n');
        if series.is_empty() {
            out.push_str(&format!("{}(no variables selected)\n", indent));
        }
        for (index, s) in series.iter().enumerate() {
            let note = if s.is_empty() { " (no data)" } else { "" };
            out.push_str(&format!(
                "{}{} {}{}\n",
                indent,
                self.paint(LEGEND_SWATCH, index),
                s.name(),
                note
            ));
        }

        Ok(out)
    }

    /// Map every series into dot space and join consecutive points
    fn draw(&self, series: &[Series], x_bounds: Bounds, y_bounds: Bounds) -> BrailleCanvas {
        let mut canvas = BrailleCanvas::new(self.width, self.height);
        let max_x = (canvas.dot_width() - 1) as f64;
        let max_y = (self.height * DOTS_PER_CELL_Y - 1) as f64;

        for (index, s) in series.iter().enumerate() {
            let mut previous: Option<(usize, usize)> = None;
            for (time, value) in s.points() {
                if !value.is_finite() {
                    previous = None;
                    continue;
                }
                let x = (x_bounds.fraction(time as f64) * max_x).round() as usize;
                let y = (max_y - y_bounds.fraction(value) * max_y).round() as usize;
                match previous {
                    Some(from) => canvas.line(from, (x, y), index),
                    None => canvas.set(x, y, index),
                }
                previous = Some((x, y));
            }
        }

        canvas
    }
}

/// Centre `text` in a field of `width` characters (no trailing padding)
fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}
