//! Cross-tier comparison of `x_Faster` medians.
//!
//! Each tier (crop size) contributes one value per category. Values are kept
//! positionally aligned with the category list so that index `i` of every
//! tier refers to the same category; the chart relies on this to place bars
//! of one category next to each other.

use super::category::Category;
use super::grouped::{group_by_image_band, GroupedSummary};
use super::summary::{extract_x_faster_median, summarize_categories, CategorySummary};
use crate::parser::MeasurementTable;
use log::{debug, warn};
use serde::Serialize;

/// Everything computed for one tier's table
#[derive(Debug, Clone, PartialEq)]
pub struct TierAnalysis {
    pub label: String,
    pub grouped: Vec<GroupedSummary>,
    pub summaries: Vec<CategorySummary>,
}

impl TierAnalysis {
    /// Run grouping and category summaries over one table
    ///
    /// **Public** - per-tier pipeline, independent of every other tier
    pub fn from_table(label: &str, table: &MeasurementTable, categories: &[Category]) -> Self {
        if table.is_empty() {
            warn!("Table for {} ({}) has no rows", label, table.source);
        }

        let grouped = group_by_image_band(&table.records);
        let summaries = summarize_categories(&table.records, &grouped, categories);

        Self {
            label: label.to_string(),
            grouped,
            summaries,
        }
    }
}

/// `x_Faster` values of one tier, one slot per category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSeries {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

/// Tier-by-category matrix of `x_Faster` medians
///
/// **Public** - input of the chart renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeReport {
    pub categories: Vec<Category>,
    pub tiers: Vec<TierSeries>,
}

impl ComparativeReport {
    /// Align ratio values of several tiers
    ///
    /// # Arguments
    /// * `tiers` - (tier label, grouped rows) in report order
    /// * `categories` - Category order shared by every tier
    pub fn assemble<'a, I>(tiers: I, categories: &[Category]) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [GroupedSummary])>,
    {
        let tiers: Vec<TierSeries> = tiers
            .into_iter()
            .map(|(label, grouped)| TierSeries {
                label: label.to_string(),
                values: categories
                    .iter()
                    .map(|&category| extract_x_faster_median(grouped, category))
                    .collect(),
            })
            .collect();

        let report = Self {
            categories: categories.to_vec(),
            tiers,
        };

        for category in report.categories_without_data() {
            warn!("No tier has data for category {}", category);
        }
        debug!(
            "Assembled report: {} tiers x {} categories",
            report.tiers.len(),
            report.categories.len()
        );

        report
    }

    /// Assemble from per-tier analyses, keeping their order
    pub fn from_analyses(analyses: &[TierAnalysis], categories: &[Category]) -> Self {
        Self::assemble(
            analyses
                .iter()
                .map(|a| (a.label.as_str(), a.grouped.as_slice())),
            categories,
        )
    }

    /// Series of one tier, by label
    pub fn tier(&self, label: &str) -> Option<&TierSeries> {
        self.tiers.iter().find(|t| t.label == label)
    }

    /// Value of one (tier, category) cell; `None` if absent or undefined
    pub fn value(&self, label: &str, category: Category) -> Option<f64> {
        let index = self.categories.iter().position(|&c| c == category)?;
        self.tier(label)?.values.get(index).copied().flatten()
    }

    /// Values of one category across all tiers, in tier order
    ///
    /// Returns an empty vector if the category is not part of the report.
    pub fn column(&self, category: Category) -> Vec<Option<f64>> {
        match self.categories.iter().position(|&c| c == category) {
            Some(index) => self
                .tiers
                .iter()
                .map(|t| t.values.get(index).copied().flatten())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Largest defined value in the report
    pub fn max_value(&self) -> Option<f64> {
        self.tiers
            .iter()
            .flat_map(|t| t.values.iter().flatten().copied())
            .reduce(f64::max)
    }

    /// Categories that are missing in every tier
    pub fn categories_without_data(&self) -> Vec<Category> {
        self.categories
            .iter()
            .copied()
            .filter(|&c| self.column(c).iter().all(Option::is_none))
            .collect()
    }
}
