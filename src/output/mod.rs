//! Output writers for charts and summaries.
//!
//! This module handles:
//! - Writing the SVG chart to disk
//! - Text tables of timing statistics
//! - JSON summaries

pub mod json;
pub mod svg;
pub mod text;

// Re-export main functions
pub use json::{summary_to_string, SummaryDocument, TierDocument};
pub use svg::write_svg;
pub use text::format_timing_table;
