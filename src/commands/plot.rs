//! Plot command implementation.
//!
//! The plot command:
//! 1. Loads every tier's table (all of them, before any aggregation)
//! 2. Groups rows and summarizes categories per tier
//! 3. Prints timing summaries
//! 4. Assembles the cross-tier comparison
//! 5. Renders the bar chart
//! 6. Writes the chart file

use super::models::{CropTier, PlotArgs};
use crate::aggregator::{Category, ComparativeReport, TierAnalysis};
use crate::chart::{generate_bar_chart, ChartConfig};
use crate::output::{format_timing_table, summary_to_string, write_svg, SummaryDocument};
use crate::parser::{read_table, MeasurementTable};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Plot command arguments
///
/// # Returns
/// Path of the written chart
///
/// # Errors
/// * Missing or malformed input table (nothing is written)
/// * Chart rendering or file write errors
pub fn execute_plot(args: PlotArgs) -> Result<PathBuf> {
    let start_time = Instant::now();
    let run_name = args.run_name();

    info!("Using dataset: {}", args.dataset.name());
    info!("CSV_PATTERN: {}", args.dataset.csv_pattern());
    info!("Mode: {}", args.mode);

    // Step 1: Load tables
    info!("Step 1/6: Loading {} tables...", args.tiers.len());
    let tables = load_tables(&args)?;

    // Step 2: Aggregate per tier
    info!("Step 2/6: Aggregating tables...");
    let analyses: Vec<TierAnalysis> = tables
        .iter()
        .map(|(tier, table)| TierAnalysis::from_table(tier.label(), table, &Category::ALL))
        .collect();

    for analysis in &analyses {
        debug!(
            "{}: {} (image, band) groups",
            analysis.label,
            analysis.grouped.len()
        );
    }

    // Step 3: Assemble comparison
    info!("Step 3/6: Assembling comparison across tiers...");
    let report = ComparativeReport::from_analyses(&analyses, &Category::ALL);

    // Step 4: Print summaries
    info!("Step 4/6: Printing timing summaries...");
    if args.json {
        let document = SummaryDocument::new(
            args.dataset.csv_pattern(),
            args.mode.as_str(),
            &analyses,
            &report,
        );
        println!(
            "{}",
            summary_to_string(&document).context("Failed to serialize summaries")?
        );
    } else {
        for analysis in &analyses {
            println!("{}", format_timing_table(&analysis.label, &analysis.summaries));
        }
    }

    // Step 5: Render chart
    info!("Step 5/6: Rendering bar chart...");
    let config = args
        .chart_config
        .clone()
        .unwrap_or_default()
        .with_title(chart_title(&run_name));
    let svg = generate_bar_chart(&report, Some(&config)).context("Failed to render bar chart")?;

    // Step 6: Write chart
    info!("Step 6/6: Writing chart...");
    let chart_path = args.chart_path();
    write_svg(&svg, &chart_path).context("Failed to write chart SVG")?;

    info!("✓ Chart written to: {}", chart_path.display());

    let elapsed = start_time.elapsed();
    info!("Plot completed in {:.2}s", elapsed.as_secs_f64());

    Ok(chart_path)
}

/// Load every requested tier's table
///
/// **Private** - any failure aborts the whole run
fn load_tables(args: &PlotArgs) -> Result<Vec<(CropTier, MeasurementTable)>> {
    let mut tables = Vec::with_capacity(args.tiers.len());

    for &tier in &args.tiers {
        let path = args.table_path(tier);
        let table = read_table(&path)
            .with_context(|| format!("Failed to load {} table", tier.label()))?;
        tables.push((tier, table));
    }

    Ok(tables)
}

/// Title shown above the chart
pub fn chart_title(run_name: &str) -> String {
    format!("Faster time ratio comparison for {}", run_name)
}

/// Validate plot arguments
///
/// **Public** - can be called before execute_plot for early validation
pub fn validate_args(args: &PlotArgs) -> Result<()> {
    if args.tiers.is_empty() {
        anyhow::bail!("At least one crop tier is required");
    }

    for (i, tier) in args.tiers.iter().enumerate() {
        if args.tiers[..i].contains(tier) {
            anyhow::bail!("Crop tier {:?} is listed more than once", tier);
        }
    }

    if let Some(config) = &args.chart_config {
        validate_chart_config(config)?;
    }

    Ok(())
}

fn validate_chart_config(config: &ChartConfig) -> Result<()> {
    if config.width < 200 || config.height < 150 {
        anyhow::bail!(
            "Chart size {}x{} is too small (min 200x150)",
            config.width,
            config.height
        );
    }

    if !(config.bar_width > 0.0 && config.bar_width <= 1.0) {
        anyhow::bail!("Bar width must be in (0, 1], got {}", config.bar_width);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&PlotArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_no_tiers() {
        let args = PlotArgs {
            tiers: vec![],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_duplicate_tier() {
        let args = PlotArgs {
            tiers: vec![CropTier::Small, CropTier::Big, CropTier::Small],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_tiny_chart() {
        let args = PlotArgs {
            chart_config: Some(ChartConfig::new().with_size(100, 100)),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_chart_title() {
        assert_eq!(
            chart_title("KAYRROS_online"),
            "Faster time ratio comparison for KAYRROS_online"
        );
    }
}
