// src/config/plot_config.rs

use serde::{Deserialize, Serialize};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::{Path, PathBuf};

use crate::benchmark::table::DuplicatePolicy;
use crate::charts::style::{LineStyle, SeriesColor};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Directory the benchmark CSV files are read from
    pub data_dir: String,

    /// Directory chart images are written to (created if missing)
    pub output_dir: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// How repeated lengths in one record set are handled
    pub duplicate_policy: DuplicatePolicy,

    /// File name of the JSON speedup report, relative to `output_dir`
    pub report_file: String,

    /// Serial (baseline) table
    pub baseline: BaselineConfig,

    /// Accelerated backends compared against the baseline
    #[serde(default = "default_backends")]
    pub backends: Vec<BackendConfig>,

    /// Image sizes
    pub chart: ChartConfig,
}

/// Serial benchmark table and the modes drawn from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// CSV file name, relative to `data_dir`
    pub table: String,

    /// Mode whose timings every speedup is measured against
    pub mode: String,

    /// Serial modes drawn on the serial throughput chart
    #[serde(default = "default_serial_modes")]
    pub modes: Vec<SeriesStyle>,
}

/// Colour and line pattern for one mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub mode: String,
    pub color: SeriesColor,
    #[serde(default)]
    pub line_style: LineStyle,
}

/// One accelerated backend (CUDA, OpenCL)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Coarse grouping label, e.g. "CUDA"
    pub name: String,

    /// CSV file name, relative to `data_dir`
    pub table: String,

    /// Colour shared by every mode of this backend on the speedup chart
    pub color: SeriesColor,

    /// Thread count used for each mode in comparison and speedup charts
    pub modes: Vec<ModeThreads>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeThreads {
    pub mode: String,
    pub threads: u32,

    /// Line pattern on the speedup chart; derived from the mode name when unset
    #[serde(default)]
    pub line_style: Option<LineStyle>,
}

impl ModeThreads {
    pub fn new(mode: &str, threads: u32) -> Self {
        ModeThreads {
            mode: mode.to_string(),
            threads,
            line_style: None,
        }
    }

    pub fn line_style(&self) -> LineStyle {
        self.line_style.unwrap_or_else(|| LineStyle::for_mode(&self.mode))
    }
}

/// Output image sizes in pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub speedup_width: u32,
    pub speedup_height: u32,
}

fn default_serial_modes() -> Vec<SeriesStyle> {
    [
        ("Serial", SeriesColor::Blue, LineStyle::Solid),
        ("Serial Ifs", SeriesColor::Green, LineStyle::Dashed),
        ("Serial 2D", SeriesColor::Red, LineStyle::DashDot),
    ]
    .into_iter()
    .map(|(mode, color, line_style)| SeriesStyle {
        mode: mode.to_string(),
        color,
        line_style,
    })
    .collect()
}

fn default_backends() -> Vec<BackendConfig> {
    vec![
        BackendConfig {
            name: "CUDA".to_string(),
            table: "cuda_benchmark.csv".to_string(),
            color: SeriesColor::Blue,
            modes: vec![
                ModeThreads::new("CUDA", 256),
                ModeThreads::new("CUDA Ifs", 256),
                ModeThreads::new("CUDA 2D", 256),
            ],
        },
        BackendConfig {
            name: "OpenCL".to_string(),
            table: "opencl_benchmark.csv".to_string(),
            color: SeriesColor::Green,
            modes: vec![
                ModeThreads::new("OpenCL", 128),
                ModeThreads::new("OpenCL Ifs", 128),
                ModeThreads::new("OpenCL 2D", 128),
            ],
        },
    ]
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            data_dir: ".".to_string(),
            output_dir: "img".to_string(),
            log_level: "info".to_string(),
            duplicate_policy: DuplicatePolicy::Reject,
            report_file: "speedup_report.json".to_string(),
            baseline: BaselineConfig::default(),
            backends: default_backends(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        BaselineConfig {
            table: "serial_benchmark.csv".to_string(),
            mode: "Serial".to_string(),
            modes: default_serial_modes(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            width: 1000,
            height: 600,
            speedup_width: 1200,
            speedup_height: 700,
        }
    }
}

impl PlotConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("benchplot.toml").exists() {
            builder = builder.add_source(File::with_name("benchplot.toml"));
        } else if Path::new("benchplot.yaml").exists() {
            builder = builder.add_source(File::with_name("benchplot.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from(path.as_ref()).required(true));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let chart = ChartConfig::default();
        let baseline = BaselineConfig::default();
        Config::builder()
            .set_default("data_dir", ".")?
            .set_default("output_dir", "img")?
            .set_default("log_level", "info")?
            .set_default("duplicate_policy", "reject")?
            .set_default("report_file", "speedup_report.json")?
            .set_default("baseline.table", baseline.table)?
            .set_default("baseline.mode", baseline.mode)?
            .set_default("chart.width", i64::from(chart.width))?
            .set_default("chart.height", i64::from(chart.height))?
            .set_default("chart.speedup_width", i64::from(chart.speedup_width))?
            .set_default("chart.speedup_height", i64::from(chart.speedup_height))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. BENCHPLOT_OUTPUT_DIR or BENCHPLOT_CHART__WIDTH
        let config = builder
            .add_source(
                Environment::with_prefix("BENCHPLOT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    pub fn baseline_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.baseline.table)
    }

    pub fn backend_path(&self, backend: &BackendConfig) -> PathBuf {
        Path::new(&self.data_dir).join(&backend.table)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.output_dir).join(file_name)
    }
}
