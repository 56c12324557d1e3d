//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod plot;

// Re-export main command functions
pub use models::{table_path, CropTier, Dataset, Mode, PlotArgs};
pub use plot::{chart_title, execute_plot, validate_args};
