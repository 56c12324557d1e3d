//! TLM Bench Plots CLI
//!
//! Compares `x_Faster` medians of TLM benchmark tables across crop sizes
//! and prints per-category timing summaries.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use tlm_bench_plots::chart::ChartConfig;
use tlm_bench_plots::commands::{execute_plot, validate_args, CropTier, Dataset, Mode, PlotArgs};
use tlm_bench_plots::utils::config::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_OUTPUT_DIR, DEFAULT_RESULTS_DIR,
    RESULTS_DIR_ENV,
};

/// TLM Bench Plots - crop-size comparison of TLM benchmark results
#[derive(Parser, Debug)]
#[command(name = "tlm-bench-plots")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Dataset name
    #[arg(value_enum, ignore_case = true)]
    dataset: Dataset,

    /// Where the benchmark read its images from
    #[arg(value_enum, default_value_t = Mode::Online)]
    mode: Mode,

    /// Directory holding the benchmark tables
    #[arg(long, env = RESULTS_DIR_ENV, default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    /// Directory the chart is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Crop tier to include (repeatable; default: all, smallest first)
    #[arg(long = "tier", value_enum)]
    tiers: Vec<CropTier>,

    /// Print summaries as JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments; invalid dataset or mode exits here with usage
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let tiers = if cli.tiers.is_empty() {
        CropTier::ALL.to_vec()
    } else {
        cli.tiers
    };

    let args = PlotArgs {
        dataset: cli.dataset,
        mode: cli.mode,
        results_dir: cli.results_dir,
        output_dir: cli.output_dir,
        tiers,
        chart_config: Some(ChartConfig::new().with_size(cli.width, cli.height)),
        json: cli.json,
    };

    // Validate args first
    validate_args(&args)?;

    execute_plot(args)?;

    Ok(())
}
