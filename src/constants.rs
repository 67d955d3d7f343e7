//! Constants for the recipe grammar and the presentation defaults.

/// Leading timestamp token: `H:M:S` sets the clock, a bare integer advances it
pub const TIMESTAMP_PATTERN: &str = r"^([0-9]+:[0-9]+:[0-9]+|[0-9]+)";

/// `identifier = value`, searched anywhere on a line
pub const ASSIGNMENT_PATTERN: &str = r"([\w.]+)\s*=\s*([\w\d.]+)";

/// Lines starting with this marker (after trimming) are ignored
pub const COMMENT_MARKER: char = '#';

pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Variables plotted when none are selected explicitly
pub const DEFAULT_PLOT_VARIABLES: &[&str] = &["ReactorTemp", "ReactorPress"];

pub const DEFAULT_CHART_TITLE: &str = "MOCVD Recipe Parameter Plot";
pub const DEFAULT_X_LABEL: &str = "Time (s)";
pub const DEFAULT_Y_LABEL: &str = "Value";

/// Default chart height in character rows
pub const DEFAULT_CHART_HEIGHT: usize = 16;

/// Chart must be at least 14 characters wide
pub const MIN_CHART_WIDTH: usize = 14;
/// Chart must be at least 7 characters tall
pub const MIN_CHART_HEIGHT: usize = 7;

/// Axis labels are rounded to one decimal place
pub const DECIMAL_PRECISION: usize = 1;

/// Message shown when a recipe yields no observations
pub const EMPTY_RECIPE_WARNING: &str = "No parseable data found in recipe";

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "mocvd-recipe";
pub const CONFIG_FILE_NAME: &str = "config.json";
