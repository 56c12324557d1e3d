//! Row schema of the benchmark tables.
//!
//! One `MeasurementRecord` is one benchmark trial: a single image/band read
//! timed once without and once with TLM-indexed access.

use serde::{Deserialize, Serialize};

/// One benchmark trial as read from a table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// Image (product) identifier
    #[serde(rename = "Image")]
    pub image: String,

    /// Resolution band label, e.g. "R10m" or "R10m_TCI"
    #[serde(rename = "Resolution_Band")]
    pub resolution_band: String,

    /// Speed ratio `time_without_tlm / time_with_tlm`
    #[serde(rename = "x_Faster")]
    pub x_faster: f64,

    #[serde(rename = "Time_without_TLM(s)")]
    pub time_without_tlm: f64,

    #[serde(rename = "Time_with_TLM(s)")]
    pub time_with_tlm: f64,

    #[serde(rename = "Nb_requests_without_TLM")]
    pub nb_requests_without_tlm: u64,

    #[serde(rename = "Nb_requests_with_TLM")]
    pub nb_requests_with_tlm: u64,

    #[serde(rename = "Bandwidth_without_TLM(MB)")]
    pub bandwidth_without_tlm: f64,

    #[serde(rename = "Bandwidth_with_TLM(MB)")]
    pub bandwidth_with_tlm: f64,
}

impl MeasurementRecord {
    /// Build a record with only the identifying fields and the ratio set.
    ///
    /// Timings are derived so that `x_faster` stays consistent; request and
    /// bandwidth counters are zero. Handy for tests and quick fixtures.
    pub fn with_ratio(image: &str, band: &str, x_faster: f64) -> Self {
        Self {
            image: image.to_string(),
            resolution_band: band.to_string(),
            x_faster,
            time_without_tlm: x_faster,
            time_with_tlm: 1.0,
            nb_requests_without_tlm: 0,
            nb_requests_with_tlm: 0,
            bandwidth_without_tlm: 0.0,
            bandwidth_with_tlm: 0.0,
        }
    }

    /// Set both timings (seconds)
    pub fn with_times(mut self, without_tlm: f64, with_tlm: f64) -> Self {
        self.time_without_tlm = without_tlm;
        self.time_with_tlm = with_tlm;
        self
    }

    /// Numeric fields paired with their column names, in table order
    pub(crate) fn numeric_fields(&self) -> [(&'static str, f64); 7] {
        use crate::utils::config::*;

        [
            (COL_X_FASTER, self.x_faster),
            (COL_TIME_WITHOUT_TLM, self.time_without_tlm),
            (COL_TIME_WITH_TLM, self.time_with_tlm),
            (COL_NB_REQUESTS_WITHOUT_TLM, self.nb_requests_without_tlm as f64),
            (COL_NB_REQUESTS_WITH_TLM, self.nb_requests_with_tlm as f64),
            (COL_BANDWIDTH_WITHOUT_TLM, self.bandwidth_without_tlm),
            (COL_BANDWIDTH_WITH_TLM, self.bandwidth_with_tlm),
        ]
    }
}

/// All rows of one benchmark table, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    /// Where the rows came from (file path or "<memory>")
    pub source: String,

    pub records: Vec<MeasurementRecord>,
}

impl MeasurementTable {
    pub fn new(source: impl Into<String>, records: Vec<MeasurementRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
