//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a measurement table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot open table {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed table row: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Invalid value {value} in column '{column}' (row {row}): expected a finite, non-negative number")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: f64,
    },
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No tiers to plot")]
    EmptyReport,

    #[error("Chart rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
