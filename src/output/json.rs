//! JSON rendering of a run's summaries.
//!
//! Missing statistics serialize as `null`, never as `0`.

use crate::aggregator::{Category, CategorySummary, ComparativeReport, TierAnalysis};
use crate::utils::error::OutputError;
use chrono::Utc;
use log::debug;
use serde::Serialize;

/// Top-level JSON document printed with `--json`
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument<'a> {
    /// Table-name pattern of the dataset
    pub dataset: &'a str,

    pub mode: &'a str,

    /// Timestamp when the summary was generated
    pub generated_at: String,

    pub categories: &'a [Category],

    pub tiers: Vec<TierDocument<'a>>,
}

/// One tier: chart values plus timing statistics
#[derive(Debug, Clone, Serialize)]
pub struct TierDocument<'a> {
    pub label: &'a str,

    /// Aligned with `categories`
    pub x_faster: &'a [Option<f64>],

    pub timings: &'a [CategorySummary],
}

impl<'a> SummaryDocument<'a> {
    /// Pair each analysis with its report series
    ///
    /// Tiers are matched by position; both slices come from the same run.
    pub fn new(
        dataset: &'a str,
        mode: &'a str,
        analyses: &'a [TierAnalysis],
        report: &'a ComparativeReport,
    ) -> Self {
        let tiers = analyses
            .iter()
            .zip(&report.tiers)
            .map(|(analysis, series)| TierDocument {
                label: &analysis.label,
                x_faster: &series.values,
                timings: &analysis.summaries,
            })
            .collect();

        Self {
            dataset,
            mode,
            generated_at: Utc::now().to_rfc3339(),
            categories: &report.categories,
            tiers,
        }
    }
}

/// Serialize a summary document with pretty printing
///
/// **Public** - used by the plot command for `--json`
pub fn summary_to_string(document: &SummaryDocument<'_>) -> Result<String, OutputError> {
    let json = serde_json::to_string_pretty(document).map_err(OutputError::SerializationFailed)?;
    debug!("Summary JSON: {} bytes", json.len());
    Ok(json)
}
