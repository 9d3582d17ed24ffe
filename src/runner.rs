// src/runner.rs

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::benchmark::records::{TableKind, TimingRecord};
use crate::benchmark::report::SpeedupReport;
use crate::benchmark::speedup::SpeedupComputer;
use crate::benchmark::table::TimingTable;
use crate::charts::builders;
use crate::charts::render::render_chart;
use crate::charts::spec::ChartSpec;
use crate::config::PlotConfig;
use crate::error::Result;

/// A chart ready to be drawn, with its image size
#[derive(Debug, Clone)]
pub struct PlannedChart {
    pub spec: ChartSpec,
    pub size: (u32, u32),
}

/// Every chart and the speedup report for one set of tables
#[derive(Debug, Clone)]
pub struct ChartPlan {
    pub charts: Vec<PlannedChart>,
    pub report: SpeedupReport,
}

pub struct ChartRunner {
    config: PlotConfig,
    written: Vec<PathBuf>,
}

impl ChartRunner {
    pub fn new(config: PlotConfig) -> Self {
        ChartRunner {
            config,
            written: Vec::new(),
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Files written by the last `run_all`
    pub fn written_files(&self) -> &[PathBuf] {
        &self.written
    }

    /// Load every table and derive all charts and speedups without drawing anything
    pub fn plan(&self) -> Result<ChartPlan> {
        let config = &self.config;
        let chart_size = (config.chart.width, config.chart.height);
        let speedup_size = (config.chart.speedup_width, config.chart.speedup_height);
        let mut charts = Vec::new();

        let baseline = TimingTable::load(config.baseline_path(), TableKind::Baseline)?;
        charts.push(PlannedChart {
            spec: builders::serial_throughput(&baseline, &config.baseline.modes)?,
            size: chart_size,
        });

        let baseline_records: Vec<TimingRecord> = baseline
            .select(&config.baseline.mode, None)
            .into_iter()
            .cloned()
            .collect();
        if baseline_records.is_empty() {
            warn!(
                "Baseline mode '{}' has no rows in {}",
                config.baseline.mode,
                baseline.name()
            );
        }

        let computer = SpeedupComputer::new(config.duplicate_policy);
        let mut report = SpeedupReport::new(baseline.name(), &config.baseline.mode);

        for backend in &config.backends {
            let table = TimingTable::load(config.backend_path(backend), TableKind::Accelerated)?;

            charts.extend(
                builders::thread_breakdowns(&table, backend)?
                    .into_iter()
                    .map(|spec| PlannedChart { spec, size: chart_size }),
            );
            charts.push(PlannedChart {
                spec: builders::mode_comparison(&table, backend)?,
                size: chart_size,
            });

            let speedups = computer.compute_backend(&baseline_records, table.records(), backend)?;
            info!("{}: {} speedup points", backend.name, speedups.len());
            report.add_records(speedups);
        }

        charts.push(PlannedChart {
            spec: builders::speedup_chart(&report.records, &config.backends, &config.baseline.mode),
            size: speedup_size,
        });

        Ok(ChartPlan { charts, report })
    }

    /// Draw every chart and write the speedup report
    pub fn run_all(&mut self) -> Result<SpeedupReport> {
        let plan = self.plan()?;
        self.written.clear();
        fs::create_dir_all(&self.config.output_dir)?;

        for chart in &plan.charts {
            let path = self.config.output_path(&chart.spec.file_name);
            render_chart(&chart.spec, &path, chart.size)?;
            self.written.push(path);
        }

        let report_path = self.config.output_path(&self.config.report_file);
        plan.report.save_to_file(&report_path)?;
        info!("Wrote {}", report_path.display());
        self.written.push(report_path);

        Ok(plan.report)
    }
}
