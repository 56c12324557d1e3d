//! Per-category summaries of one table.
//!
//! Two reductions run side by side and must not be merged:
//! - the `x_Faster` value is a median of the per-image medians from
//!   [`group_by_image_band`](super::grouped::group_by_image_band), so repeat
//!   counts per image do not skew it;
//! - timing statistics are computed over the raw trials, keeping trial-level
//!   variance in the standard deviation.

use super::category::{select, Category};
use super::grouped::GroupedSummary;
use super::stats::{median, std_dev};
use crate::parser::MeasurementRecord;
use log::debug;
use serde::Serialize;

/// Statistics of one category within one table
///
/// **Public** - printed per tier and embedded in JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    #[serde(rename = "Category")]
    pub category: Category,

    /// Raw trials matched by the category
    #[serde(rename = "Trials")]
    pub trials: usize,

    #[serde(rename = "Median_Time_without_TLM")]
    pub median_time_without_tlm: Option<f64>,

    #[serde(rename = "Std_Time_without_TLM")]
    pub std_time_without_tlm: Option<f64>,

    #[serde(rename = "Median_Time_with_TLM")]
    pub median_time_with_tlm: Option<f64>,

    #[serde(rename = "Std_Time_with_TLM")]
    pub std_time_with_tlm: Option<f64>,

    /// Median of per-image `x_Faster` medians
    #[serde(rename = "x_Faster")]
    pub x_faster: Option<f64>,
}

impl CategorySummary {
    /// True when no raw trial matched the category
    pub fn is_missing(&self) -> bool {
        self.trials == 0
    }
}

/// Median `x_Faster` of a category over grouped rows
///
/// **Public** - the value plotted for one (tier, category) bar
///
/// # Arguments
/// * `grouped` - Output of `group_by_image_band` for one table
/// * `category` - Category to resolve
///
/// # Returns
/// `None` when no grouped row matches
pub fn extract_x_faster_median(grouped: &[GroupedSummary], category: Category) -> Option<f64> {
    let values: Vec<f64> = select(category, grouped)
        .into_iter()
        .map(|row| row.x_faster_median)
        .collect();

    median(&values)
}

/// Summarize one category of one table
///
/// **Public** - combines raw timing statistics with the grouped ratio
pub fn summarize_category(
    records: &[MeasurementRecord],
    grouped: &[GroupedSummary],
    category: Category,
) -> CategorySummary {
    let subset = select(category, records);

    let without: Vec<f64> = subset.iter().map(|r| r.time_without_tlm).collect();
    let with: Vec<f64> = subset.iter().map(|r| r.time_with_tlm).collect();

    CategorySummary {
        category,
        trials: subset.len(),
        median_time_without_tlm: median(&without),
        std_time_without_tlm: std_dev(&without),
        median_time_with_tlm: median(&with),
        std_time_with_tlm: std_dev(&with),
        x_faster: extract_x_faster_median(grouped, category),
    }
}

/// Summarize every requested category, in the given order
///
/// **Public** - main entry point for the summarizer
pub fn summarize_categories(
    records: &[MeasurementRecord],
    grouped: &[GroupedSummary],
    categories: &[Category],
) -> Vec<CategorySummary> {
    let summaries: Vec<CategorySummary> = categories
        .iter()
        .map(|&category| summarize_category(records, grouped, category))
        .collect();

    debug!(
        "Summarized {} categories ({} without data)",
        summaries.len(),
        summaries.iter().filter(|s| s.is_missing()).count()
    );

    summaries
}
