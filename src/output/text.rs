//! Plain-text timing tables for stdout.

use crate::aggregator::CategorySummary;

const COLUMNS: [&str; 5] = [
    "Category",
    "Median_Time_without_TLM",
    "Std_Time_without_TLM",
    "Median_Time_with_TLM",
    "Std_Time_with_TLM",
];

/// Placeholder for undefined statistics
pub const MISSING: &str = "None";

/// Format one tier's timing summaries as an aligned table
///
/// **Public** - printed once per tier by the plot command
///
/// # Arguments
/// * `label` - Tier display label, e.g. "SMALL CROP"
/// * `summaries` - One entry per category, in category order
///
/// # Returns
/// A header line, a column header row and one row per category
pub fn format_timing_table(label: &str, summaries: &[CategorySummary]) -> String {
    let mut out = format!("Summary times for {}:\n", label);

    let category_width = summaries
        .iter()
        .map(|s| s.category.label().len())
        .chain(std::iter::once(COLUMNS[0].len()))
        .max()
        .unwrap_or_default();

    out.push_str(&format!("{:<width$}", COLUMNS[0], width = category_width));
    for column in &COLUMNS[1..] {
        out.push_str(&format!("  {}", column));
    }
    out.push('\n');

    for summary in summaries {
        let cells = [
            summary.median_time_without_tlm,
            summary.std_time_without_tlm,
            summary.median_time_with_tlm,
            summary.std_time_with_tlm,
        ];

        out.push_str(&format!(
            "{:<width$}",
            summary.category.label(),
            width = category_width
        ));
        for (column, cell) in COLUMNS[1..].iter().zip(cells) {
            out.push_str(&format!("  {:>width$}", format_cell(cell), width = column.len()));
        }
        out.push('\n');
    }

    out
}

/// Six decimals, or the missing placeholder
pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6}", v),
        None => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Category;

    fn summary(category: Category, median: Option<f64>) -> CategorySummary {
        CategorySummary {
            category,
            trials: median.map_or(0, |_| 1),
            median_time_without_tlm: median,
            std_time_without_tlm: None,
            median_time_with_tlm: median.map(|m| m / 2.0),
            std_time_with_tlm: None,
            x_faster: median.map(|_| 2.0),
        }
    }

    #[test]
    fn test_format_timing_table_layout() {
        let table = format_timing_table(
            "SMALL CROP",
            &[
                summary(Category::R10m, Some(1.5)),
                summary(Category::R60mTci, None),
            ],
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Summary times for SMALL CROP:");
        assert!(lines[1].starts_with("Category"));
        assert!(lines[2].starts_with("R10m "));
        assert!(lines[2].contains("1.500000"));
        assert!(lines[2].contains("0.750000"));
        assert!(lines[3].starts_with("R60m_TCI"));
        assert_eq!(lines[3].matches(MISSING).count(), 4);
        // every row is as wide as the header
        assert_eq!(lines[1].len(), lines[2].len());
        assert_eq!(lines[1].len(), lines[3].len());
    }

    #[test]
    fn test_missing_is_not_zero() {
        assert_eq!(format_cell(None), "None");
        assert_eq!(format_cell(Some(0.0)), "0.000000");
    }
}
