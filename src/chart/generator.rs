//! Grouped bar chart of `x_Faster` medians, rendered to SVG with plotters.
//!
//! Layout: one group per category along the x axis, one bar per tier inside
//! each group, bars centred on the category tick. A missing value draws
//! nothing, leaving a visible gap instead of a zero-height bar.

use crate::aggregator::ComparativeReport;
use crate::utils::config::{BAR_WIDTH, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use crate::utils::error::ChartError;
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;

// Font sizes
const TITLE_FONT_SIZE: u32 = 22;
const AXIS_LABEL_FONT_SIZE: u32 = 16;
const TICK_LABEL_FONT_SIZE: u32 = 14;
const LEGEND_FONT_SIZE: u32 = 13;

const X_AXIS_LABEL: &str = "Resolution";
const Y_AXIS_LABEL: &str = "Time ratio (time_no_tlm / time_tlm)";
const LEGEND_PREFIX: &str = "Time ratio gain median";

/// Headroom above the tallest bar, for the legend
const Y_HEADROOM: f64 = 1.25;

/// Tier colours, cycled when there are more tiers than entries
const COLORS: &[RGBColor] = &[
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
    RGBColor(148, 103, 189), // Purple
    RGBColor(140, 86, 75),   // Brown
];

/// Chart rendering options
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Width of a single bar, in category units (a group spans 1.0)
    pub bar_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Faster time ratio comparison".to_string(),
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            bar_width: BAR_WIDTH,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Render the comparison report as an SVG bar chart
///
/// **Public** - main entry point for chart generation
///
/// # Arguments
/// * `report` - Tier-by-category values
/// * `config` - Rendering options (defaults if None)
///
/// # Returns
/// SVG document as a string
///
/// # Errors
/// * `ChartError::EmptyReport` - report has no tiers
/// * `ChartError::RenderFailed` - plotters backend failure
pub fn generate_bar_chart(
    report: &ComparativeReport,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if report.tiers.is_empty() {
        return Err(ChartError::EmptyReport);
    }

    let config = config.cloned().unwrap_or_default();
    info!(
        "Generating bar chart: {} categories x {} tiers",
        report.categories.len(),
        report.tiers.len()
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(render_failed)?;

        draw_bars(&root, report, &config)?;

        root.present().map_err(render_failed)?;
    }

    info!("Chart generated successfully ({} bytes)", svg.len());

    Ok(svg)
}

/// Draw axes, bars and legend
///
/// **Private** - the drawing area must be freshly filled
fn draw_bars(
    root: &DrawingArea<SVGBackend, Shift>,
    report: &ComparativeReport,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let num_categories = report.categories.len();
    let num_tiers = report.tiers.len();
    let y_max = report
        .max_value()
        .map(|v| v * Y_HEADROOM)
        .filter(|v| *v > 0.0)
        .unwrap_or(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(num_categories as f64 - 0.5), 0.0..y_max)
        .map_err(render_failed)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_categories)
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if x.round() >= 0.0 && idx < num_categories && (x - idx as f64).abs() < 0.3 {
                report.categories[idx].label().to_string()
            } else {
                String::new()
            }
        })
        .bold_line_style(BLACK.mix(0.2))
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(render_failed)?;

    let middle = (num_tiers as f64 - 1.0) / 2.0;
    let half = config.bar_width / 2.0;

    for (tier_idx, tier) in report.tiers.iter().enumerate() {
        let color = COLORS[tier_idx % COLORS.len()];
        let offset = (tier_idx as f64 - middle) * config.bar_width;

        let bars = tier
            .values
            .iter()
            .enumerate()
            .filter_map(|(cat_idx, value)| value.map(|v| (cat_idx as f64 + offset, v)))
            .map(|(center, v)| {
                Rectangle::new([(center - half, 0.0), (center + half, v)], color.filled())
            });

        debug!(
            "Tier {}: {} of {} bars drawn",
            tier.label,
            tier.values.iter().flatten().count(),
            num_categories
        );

        chart
            .draw_series(bars)
            .map_err(render_failed)?
            .label(format!("{} {}", LEGEND_PREFIX, tier.label))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(render_failed)?;

    Ok(())
}

fn render_failed(err: impl std::fmt::Display) -> ChartError {
    ChartError::RenderFailed(err.to_string())
}
