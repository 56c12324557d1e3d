//! Per-image grouping of raw trials.
//!
//! Every (image, band) pair seen in a table becomes one `GroupedSummary` whose
//! fields are medians over the repeated trials of that pair. Ratio summaries
//! are computed from these rows so that images measured more often do not
//! weigh more.

use super::stats::median;
use crate::parser::MeasurementRecord;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Medians of one (image, band) group
///
/// **Public** - input of ratio extraction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSummary {
    pub image: String,

    pub resolution_band: String,

    /// Number of raw trials in the group
    pub trials: usize,

    pub x_faster_median: f64,
    pub time_without_tlm_median: f64,
    pub time_with_tlm_median: f64,
    pub nb_requests_without_tlm_median: f64,
    pub nb_requests_with_tlm_median: f64,
    pub bandwidth_without_tlm_median: f64,
    pub bandwidth_with_tlm_median: f64,
}

/// Group records by (image, band) and reduce each group to medians
///
/// **Public** - main entry point for grouping
///
/// # Arguments
/// * `records` - All rows of one table
///
/// # Returns
/// One row per distinct (image, band), sorted by image then band
pub fn group_by_image_band(records: &[MeasurementRecord]) -> Vec<GroupedSummary> {
    let mut groups: BTreeMap<(&str, &str), Vec<&MeasurementRecord>> = BTreeMap::new();

    for record in records {
        groups
            .entry((record.image.as_str(), record.resolution_band.as_str()))
            .or_default()
            .push(record);
    }

    debug!(
        "Grouped {} records into {} (image, band) groups",
        records.len(),
        groups.len()
    );

    groups
        .into_iter()
        .map(|((image, band), rows)| summarize_group(image, band, &rows))
        .collect()
}

/// Reduce one non-empty group
///
/// **Private** - called once per BTreeMap entry
fn summarize_group(image: &str, band: &str, rows: &[&MeasurementRecord]) -> GroupedSummary {
    GroupedSummary {
        image: image.to_string(),
        resolution_band: band.to_string(),
        trials: rows.len(),
        x_faster_median: median_of(rows, |r| r.x_faster),
        time_without_tlm_median: median_of(rows, |r| r.time_without_tlm),
        time_with_tlm_median: median_of(rows, |r| r.time_with_tlm),
        nb_requests_without_tlm_median: median_of(rows, |r| r.nb_requests_without_tlm as f64),
        nb_requests_with_tlm_median: median_of(rows, |r| r.nb_requests_with_tlm as f64),
        bandwidth_without_tlm_median: median_of(rows, |r| r.bandwidth_without_tlm),
        bandwidth_with_tlm_median: median_of(rows, |r| r.bandwidth_with_tlm),
    }
}

fn median_of(rows: &[&MeasurementRecord], field: impl Fn(&MeasurementRecord) -> f64) -> f64 {
    let values: Vec<f64> = rows.iter().map(|r| field(r)).collect();
    // groups always hold at least one row
    median(&values).unwrap_or_default()
}
