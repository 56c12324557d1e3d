use pretty_assertions::assert_eq;
use tlm_bench_plots::aggregator::stats::{median, std_dev};
use tlm_bench_plots::aggregator::{
    band_matches, extract_x_faster_median, group_by_image_band, select, summarize_categories,
    Category, ComparativeReport, TierAnalysis,
};
use tlm_bench_plots::parser::{MeasurementRecord, MeasurementTable};

fn record(image: &str, band: &str, x_faster: f64) -> MeasurementRecord {
    MeasurementRecord::with_ratio(image, band, x_faster)
}

#[test]
fn test_median_definition() {
    assert_eq!(median(&[5.0]), Some(5.0));
    assert_eq!(median(&[2.0, 4.0]), Some(3.0));
    assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
}

#[test]
fn test_std_dev_of_one_value_is_missing() {
    assert_eq!(std_dev(&[1.25]), None);
}

#[test]
fn test_category_matcher_prefix_and_suffix_rule() {
    let records = vec![
        record("A", "R10m", 1.0),
        record("A", "R10m_TCI", 1.0),
        record("A", "R20m", 1.0),
    ];

    let plain: Vec<&str> = select(Category::R10m, &records)
        .iter()
        .map(|r| r.resolution_band.as_str())
        .collect();
    let tci: Vec<&str> = select(Category::R10mTci, &records)
        .iter()
        .map(|r| r.resolution_band.as_str())
        .collect();

    assert_eq!(plain, vec!["R10m"]);
    assert_eq!(tci, vec!["R10m_TCI"]);
}

#[test]
fn test_category_matcher_keeps_loose_prefix() {
    // Bands extending a plain label are admitted as long as they are not TCI
    assert!(band_matches("R10m", "R10mX"));
    assert!(!band_matches("R10m", "R20m"));
}

#[test]
fn test_end_to_end_single_table() {
    let records = vec![
        record("A", "R10m", 2.0),
        record("A", "R10m", 4.0),
        record("B", "R10m", 3.0),
    ];

    let grouped = group_by_image_band(&records);

    assert_eq!(grouped.len(), 2);
    assert_eq!(
        (grouped[0].image.as_str(), grouped[0].resolution_band.as_str(), grouped[0].x_faster_median),
        ("A", "R10m", 3.0)
    );
    assert_eq!(
        (grouped[1].image.as_str(), grouped[1].resolution_band.as_str(), grouped[1].x_faster_median),
        ("B", "R10m", 3.0)
    );
    assert_eq!(extract_x_faster_median(&grouped, Category::R10m), Some(3.0));
}

#[test]
fn test_aggregation_is_idempotent() {
    let records = vec![
        record("B", "R20m", 1.9).with_times(3.8, 2.0),
        record("A", "R20m", 2.2).with_times(4.4, 2.0),
        record("A", "R20m_TCI", 1.1).with_times(1.1, 1.0),
        record("A", "R20m", 2.6).with_times(5.2, 2.0),
    ];

    let first_grouped = group_by_image_band(&records);
    let second_grouped = group_by_image_band(&records);
    assert_eq!(first_grouped, second_grouped);

    let first = summarize_categories(&records, &first_grouped, &Category::ALL);
    let second = summarize_categories(&records, &second_grouped, &Category::ALL);
    assert_eq!(first, second);
}

#[test]
fn test_missing_category_is_not_zero() {
    let table = MeasurementTable::new("inline", vec![record("A", "R10m", 2.0)]);
    let analysis = TierAnalysis::from_table("SMALL CROP", &table, &Category::ALL);

    let r60 = analysis
        .summaries
        .iter()
        .find(|s| s.category == Category::R60m)
        .unwrap();

    assert_eq!(r60.trials, 0);
    assert_eq!(r60.median_time_without_tlm, None);
    assert_eq!(r60.std_time_without_tlm, None);
    assert_eq!(r60.median_time_with_tlm, None);
    assert_eq!(r60.std_time_with_tlm, None);
    assert_eq!(r60.x_faster, None);
    assert_ne!(r60.x_faster, Some(0.0));
}

#[test]
fn test_comparative_report_alignment_across_tiers() {
    let small = MeasurementTable::new(
        "small",
        vec![record("A", "R60m_TCI", 1.5), record("A", "R10m", 2.0)],
    );
    let big = MeasurementTable::new("big", vec![record("A", "R10m", 5.0)]);

    let analyses = vec![
        TierAnalysis::from_table("SMALL", &small, &Category::ALL),
        TierAnalysis::from_table("BIG", &big, &Category::ALL),
    ];
    let report = ComparativeReport::from_analyses(&analyses, &Category::ALL);

    let labels: Vec<&str> = report.tiers.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["SMALL", "BIG"]);
    assert_eq!(report.column(Category::R60mTci), vec![Some(1.5), None]);

    let tci_index = Category::ALL
        .iter()
        .position(|&c| c == Category::R60mTci)
        .unwrap();
    assert_eq!(report.tiers[0].values[tci_index], Some(1.5));
    assert_eq!(report.tiers[1].values[tci_index], None);
}

#[test]
fn test_timing_and_ratio_paths_stay_separate() {
    // Image A has three fast repeats, image B one slow trial.
    let records = vec![
        record("A", "R20m", 1.0).with_times(1.0, 1.0),
        record("A", "R20m", 1.0).with_times(1.0, 1.0),
        record("A", "R20m", 1.0).with_times(1.0, 1.0),
        record("B", "R20m", 3.0).with_times(9.0, 3.0),
    ];
    let grouped = group_by_image_band(&records);
    let summaries = summarize_categories(&records, &grouped, &[Category::R20m]);

    // ratio: median of per-image medians {1.0, 3.0}
    assert_eq!(summaries[0].x_faster, Some(2.0));
    // timings: median over all four raw trials
    assert_eq!(summaries[0].median_time_without_tlm, Some(1.0));
    assert_eq!(summaries[0].trials, 4);
}
