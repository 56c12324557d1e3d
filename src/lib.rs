//! TLM Bench Plots
//!
//! Aggregation and charting of TLM benchmark tables: per-image medians,
//! per-category `x_Faster` ratios and timing statistics, and a grouped bar
//! chart comparing crop-size tiers.
//!
//! This crate provides the core implementation for the
//! `tlm-bench-plots` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! tlm-bench-plots DS1 online --results-dir benchmark_results
//! ```
//!
//! The library can also be used directly:
//!
//! ```ignore
//! use tlm_bench_plots::aggregator::{Category, ComparativeReport, TierAnalysis};
//! use tlm_bench_plots::parser::read_table;
//!
//! let table = read_table("benchmark_results/KAYRROS_online_small_crop.csv")?;
//! let small = TierAnalysis::from_table("SMALL CROP", &table, &Category::ALL);
//! let report = ComparativeReport::from_analyses(&[small], &Category::ALL);
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
