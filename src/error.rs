//! Error handling for recipe loading, configuration and chart rendering.
//!
//! The recipe parser itself never fails on malformed content; these errors
//! cover everything around it: reading the recipe, loading configuration and
//! laying out a chart.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Recipe file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Recipe file is not valid UTF-8 text: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart too small: need at least {want_w}x{want_h} cells, got {got_w}x{got_h}")]
    ChartTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
}

impl RecipeError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
