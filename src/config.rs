//! Configuration management and validation.
//!
//! Only the presentation layer is configurable: which variables are plotted
//! by default and how the chart is labelled and sized. The recipe parser has
//! no settings. Configuration is layered: built-in defaults, then an optional
//! JSON file, then command-line overrides.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_TITLE,
    DEFAULT_PLOT_VARIABLES, DEFAULT_X_LABEL, DEFAULT_Y_LABEL, MIN_CHART_HEIGHT, MIN_CHART_WIDTH,
};
use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plot: PlotConfig,
}

/// Chart defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Variables plotted when none are given on the command line
    pub default_variables: Vec<String>,

    pub title: String,

    pub x_label: String,

    pub y_label: String,

    /// Plot area width in characters; derived from the terminal when unset
    pub width: Option<usize>,

    /// Plot area height in characters
    pub height: usize,

    /// Colour series and headings
    pub color: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            default_variables: DEFAULT_PLOT_VARIABLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            title: DEFAULT_CHART_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            width: None,
            height: DEFAULT_CHART_HEIGHT,
            color: true,
        }
    }
}

impl Config {
    /// `<user config dir>/mocvd-recipe/config.json`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            RecipeError::configuration("Could not determine user configuration directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RecipeError::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&contents).map_err(|source| RecipeError::ConfigFormat {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Explicit file if given, else the default location if it exists, else defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject settings the renderer cannot honour
    pub fn validate(&self) -> Result<()> {
        self.plot.validate()
    }
}

impl PlotConfig {
    /// Reject chart sizes below the renderer minimum
    pub fn validate(&self) -> Result<()> {
        if self.height < MIN_CHART_HEIGHT {
            return Err(RecipeError::configuration(format!(
                "Plot height must be at least {} rows, got {}",
                MIN_CHART_HEIGHT, self.height
            )));
        }

        if let Some(width) = self.width {
            if width < MIN_CHART_WIDTH {
                return Err(RecipeError::configuration(format!(
                    "Plot width must be at least {} columns, got {}",
                    MIN_CHART_WIDTH, width
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.plot.default_variables,
            vec!["ReactorTemp", "ReactorPress"]
        );
        assert_eq!(config.plot.title, "MOCVD Recipe Parameter Plot");
        assert_eq!(config.plot.x_label, "Time (s)");
        assert_eq!(config.plot.y_label, "Value");
        assert!(config.plot.width.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"{{ "plot": {{ "default_variables": ["TMGa.Flow"], "width": 60 }} }}"#
        )
        .unwrap();

        let config = Config::from_file(temp_file.path()).unwrap();
        assert_eq!(config.plot.default_variables, vec!["TMGa.Flow"]);
        assert_eq!(config.plot.width, Some(60));
        assert_eq!(config.plot.height, DEFAULT_CHART_HEIGHT);
        assert_eq!(config.plot.y_label, "Value");
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "plot = {{}}").unwrap();

        let err = Config::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, RecipeError::ConfigFormat { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/config.json"))).unwrap_err();
        assert!(matches!(err, RecipeError::Configuration { .. }));
    }

    #[test]
    fn test_validate_rejects_tiny_charts() {
        let mut config = Config::default();
        config.plot.height = 3;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.plot.width = Some(5);
        assert!(config.validate().is_err());
    }
}
