//! Configuration and constants for the CLI.

/// Default directory holding the benchmark tables
pub const DEFAULT_RESULTS_DIR: &str = "benchmark_results";

/// Default directory the chart is written to
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Environment variable that overrides the results directory
pub const RESULTS_DIR_ENV: &str = "TLM_RESULTS_DIR";

/// Suffix appended to `<pattern>_<mode>` for the chart file name
pub const CHART_FILE_SUFFIX: &str = "bars_plot.svg";

/// Suffix marking a true-colour-image band
pub const TCI_SUFFIX: &str = "_TCI";

// Chart layout
pub const DEFAULT_CHART_WIDTH: u32 = 1100;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;
pub const BAR_WIDTH: f64 = 0.1; // in category units

// Numeric column headers of the benchmark tables
pub const COL_X_FASTER: &str = "x_Faster";
pub const COL_TIME_WITHOUT_TLM: &str = "Time_without_TLM(s)";
pub const COL_TIME_WITH_TLM: &str = "Time_with_TLM(s)";
pub const COL_NB_REQUESTS_WITHOUT_TLM: &str = "Nb_requests_without_TLM";
pub const COL_NB_REQUESTS_WITH_TLM: &str = "Nb_requests_with_TLM";
pub const COL_BANDWIDTH_WITHOUT_TLM: &str = "Bandwidth_without_TLM(MB)";
pub const COL_BANDWIDTH_WITH_TLM: &str = "Bandwidth_with_TLM(MB)";
