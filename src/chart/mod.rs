//! Bar chart generation using the plotters library.
//!
//! This module turns a `ComparativeReport` into an SVG grouped bar chart
//! comparing `x_Faster` medians across crop tiers.

pub mod generator;

// Re-export main types
pub use generator::{generate_bar_chart, ChartConfig};
