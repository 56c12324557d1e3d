//! Aggregation of benchmark tables into per-category statistics.
//!
//! This module transforms raw measurement rows into:
//! - Per-(image, band) medians (grouped rows)
//! - Per-category timing statistics and `x_Faster` medians
//! - A tier-by-category comparison for charting

pub mod category;
pub mod grouped;
pub mod report;
pub mod stats;
pub mod summary;

// Re-export main types and functions
pub use category::{band_matches, select, Banded, Category};
pub use grouped::{group_by_image_band, GroupedSummary};
pub use report::{ComparativeReport, TierAnalysis, TierSeries};
pub use summary::{extract_x_faster_median, summarize_categories, summarize_category, CategorySummary};
