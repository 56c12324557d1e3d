use crate::chart::ChartConfig;
use crate::utils::config::{CHART_FILE_SUFFIX, DEFAULT_OUTPUT_DIR, DEFAULT_RESULTS_DIR};
use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};

/// Benchmarked dataset, selecting the table-name pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    #[value(name = "DS1")]
    Ds1,
    #[value(name = "DS2")]
    Ds2,
    #[value(name = "KAYRROS")]
    Kayrros,
    #[value(name = "DS2_KAYRROS")]
    Ds2Kayrros,
    #[value(name = "DS2_NTILE1")]
    Ds2Ntile1,
}

impl Dataset {
    /// Name as given on the command line
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Ds1 => "DS1",
            Dataset::Ds2 => "DS2",
            Dataset::Kayrros => "KAYRROS",
            Dataset::Ds2Kayrros => "DS2_KAYRROS",
            Dataset::Ds2Ntile1 => "DS2_NTILE1",
        }
    }

    /// Prefix shared by every table of the dataset
    pub fn csv_pattern(self) -> &'static str {
        match self {
            Dataset::Ds1 => "DS_2CPS_20250527T092507_S20250527T074219",
            Dataset::Ds2 => "DS_2CPS_20250527T093652_S20250527T075023",
            Dataset::Kayrros => "KAYRROS",
            Dataset::Ds2Kayrros => "DS_2CPS_20250527T093652_S20250527T075023_KAYRROS",
            Dataset::Ds2Ntile1 => "DS_2CPS_20250527T093652_S20250527T075023_IPF_NTILE1",
        }
    }
}

/// Where the benchmark read its images from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    Local,
    #[default]
    Online,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Local => "local",
            Mode::Online => "online",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crop size tier, one table each
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CropTier {
    Small,
    #[value(name = "small2t")]
    Small2Tiles,
    Medium,
    Big,
    Huge,
}

impl CropTier {
    /// All tiers, smallest first
    pub const ALL: [CropTier; 5] = [
        CropTier::Small,
        CropTier::Small2Tiles,
        CropTier::Medium,
        CropTier::Big,
        CropTier::Huge,
    ];

    /// File-name component of the tier's table
    pub fn file_stem(self) -> &'static str {
        match self {
            CropTier::Small => "small_crop",
            CropTier::Small2Tiles => "small2t_crop",
            CropTier::Medium => "medium_crop",
            CropTier::Big => "big_crop",
            CropTier::Huge => "huge_crop",
        }
    }

    /// Label used in stdout headers and the chart legend
    pub fn label(self) -> &'static str {
        match self {
            CropTier::Small => "SMALL CROP",
            CropTier::Small2Tiles => "SMALL 2-TILES CROP",
            CropTier::Medium => "MEDIUM CROP",
            CropTier::Big => "BIG CROP",
            CropTier::Huge => "HUGE CROP",
        }
    }
}

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlotArgs {
    pub dataset: Dataset,

    pub mode: Mode,

    /// Directory holding the input tables
    pub results_dir: PathBuf,

    /// Directory the chart is written to
    pub output_dir: PathBuf,

    /// Tiers to compare, in chart order
    pub tiers: Vec<CropTier>,

    /// Chart configuration (title is filled in from dataset and mode if None)
    pub chart_config: Option<ChartConfig>,

    /// Print summaries as JSON instead of text tables
    pub json: bool,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            dataset: Dataset::Ds1,
            mode: Mode::default(),
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            tiers: CropTier::ALL.to_vec(),
            chart_config: None,
            json: false,
        }
    }
}

impl PlotArgs {
    /// `<pattern>_<mode>`, the common prefix of inputs and output
    pub fn run_name(&self) -> String {
        format!("{}_{}", self.dataset.csv_pattern(), self.mode)
    }

    /// Input table of one tier
    pub fn table_path(&self, tier: CropTier) -> PathBuf {
        table_path(&self.results_dir, self.dataset, self.mode, tier)
    }

    /// Output chart file
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}", self.run_name(), CHART_FILE_SUFFIX))
    }
}

/// `<dir>/<pattern>_<mode>_<tier>.csv`
pub fn table_path(results_dir: &Path, dataset: Dataset, mode: Mode, tier: CropTier) -> PathBuf {
    results_dir.join(format!(
        "{}_{}_{}.csv",
        dataset.csv_pattern(),
        mode,
        tier.file_stem()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_names_are_case_insensitive() {
        assert_eq!(Dataset::from_str("ds1", true), Ok(Dataset::Ds1));
        assert_eq!(Dataset::from_str("DS2_NTILE1", true), Ok(Dataset::Ds2Ntile1));
        assert_eq!(Dataset::from_str("ds2_kayrros", true), Ok(Dataset::Ds2Kayrros));
        assert!(Dataset::from_str("DS3", true).is_err());

        for dataset in Dataset::value_variants() {
            assert_eq!(Dataset::from_str(dataset.name(), false), Ok(*dataset));
        }
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::from_str("local", false), Ok(Mode::Local));
        assert_eq!(Mode::from_str("online", false), Ok(Mode::Online));
        assert!(Mode::from_str("offline", false).is_err());
        assert_eq!(Mode::default(), Mode::Online);
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(CropTier::from_str("small2t", false), Ok(CropTier::Small2Tiles));
        assert_eq!(CropTier::from_str("huge", false), Ok(CropTier::Huge));
    }

    #[test]
    fn test_paths() {
        let args = PlotArgs {
            dataset: Dataset::Kayrros,
            mode: Mode::Local,
            results_dir: PathBuf::from("results"),
            output_dir: PathBuf::from("out"),
            ..Default::default()
        };

        assert_eq!(
            args.table_path(CropTier::Small2Tiles),
            PathBuf::from("results/KAYRROS_local_small2t_crop.csv")
        );
        assert_eq!(args.chart_path(), PathBuf::from("out/KAYRROS_local_bars_plot.svg"));
    }
}
