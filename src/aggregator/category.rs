//! Resolution-band categories and the rule that maps bands onto them.
//!
//! A `_TCI` category matches its band exactly. A plain category matches every
//! band that starts with its label and is not itself a `_TCI` band, so
//! "R10m" collects "R10m" but never "R10m_TCI".

use crate::utils::config::TCI_SUFFIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of summary categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "R10m")]
    R10m,
    #[serde(rename = "R20m")]
    R20m,
    #[serde(rename = "R60m")]
    R60m,
    #[serde(rename = "R10m_TCI")]
    R10mTci,
    #[serde(rename = "R20m_TCI")]
    R20mTci,
    #[serde(rename = "R60m_TCI")]
    R60mTci,
}

impl Category {
    /// All categories in chart order: plain bands first, then TCI
    pub const ALL: [Category; 6] = [
        Category::R10m,
        Category::R20m,
        Category::R60m,
        Category::R10mTci,
        Category::R20mTci,
        Category::R60mTci,
    ];

    /// Band label of the category, as it appears in the tables
    pub fn label(self) -> &'static str {
        match self {
            Category::R10m => "R10m",
            Category::R20m => "R20m",
            Category::R60m => "R60m",
            Category::R10mTci => "R10m_TCI",
            Category::R20mTci => "R20m_TCI",
            Category::R60mTci => "R60m_TCI",
        }
    }

    pub fn is_tci(self) -> bool {
        self.label().ends_with(TCI_SUFFIX)
    }

    /// Look up a category by its exact label
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Check whether `band` belongs to this category
    pub fn matches(self, band: &str) -> bool {
        band_matches(self.label(), band)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything tagged with a resolution band
pub trait Banded {
    fn band(&self) -> &str;
}

impl Banded for crate::parser::MeasurementRecord {
    fn band(&self) -> &str {
        &self.resolution_band
    }
}

impl Banded for super::grouped::GroupedSummary {
    fn band(&self) -> &str {
        &self.resolution_band
    }
}

/// Band matching rule on raw labels
///
/// **Public** - works for any category label, not only the known set
///
/// Note the plain rule is a prefix test: a band such as "R10mX" would be
/// counted under "R10m".
pub fn band_matches(category: &str, band: &str) -> bool {
    if category.ends_with(TCI_SUFFIX) {
        band == category
    } else {
        band.starts_with(category) && !band.ends_with(TCI_SUFFIX)
    }
}

/// Select the items whose band falls into `category`
///
/// **Public** - used for both raw records and grouped rows
///
/// # Returns
/// Matching items in input order; empty when nothing matches
pub fn select<'a, T: Banded>(category: Category, items: &'a [T]) -> Vec<&'a T> {
    items.iter().filter(|item| category.matches(item.band())).collect()
}
