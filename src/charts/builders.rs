// src/charts/builders.rs

use log::debug;

use crate::benchmark::records::{SpeedupRecord, TimingRecord, CELLS_PER_SECOND};
use crate::benchmark::table::TimingTable;
use crate::charts::spec::{file_slug, ChartSpec, Series};
use crate::charts::style::{LineStyle, SeriesColor};
use crate::config::{BackendConfig, SeriesStyle};
use crate::error::Result;

/// Serial throughput is plotted in millions of cells per second
pub const SERIAL_THROUGHPUT_SCALE: f64 = 1_000_000.0;

/// Accelerated throughput is plotted in billions of cells per second
pub const ACCELERATED_THROUGHPUT_SCALE: f64 = 1_000_000_000.0;

const WORLD_SIZE: &str = "World size";
const WORLD_SIZE_LOG2: &str = "World size (2^x)";

fn throughput_points<'a, I>(records: I, scale: f64, log_length: bool) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = &'a TimingRecord>,
{
    records
        .into_iter()
        .filter_map(|r| {
            let cells = r.cells_per_second?;
            let x = if log_length {
                (r.length as f64).log2()
            } else {
                r.length as f64
            };
            Some((x, cells / scale))
        })
        .collect()
}

/// Throughput vs. world size for each configured serial mode
pub fn serial_throughput(table: &TimingTable, modes: &[SeriesStyle]) -> Result<ChartSpec> {
    table.require_column(CELLS_PER_SECOND)?;

    let mut chart = ChartSpec::new(
        "serial_times.png",
        "Serial execution throughput",
        WORLD_SIZE,
        "Cells/s (millions)",
    );

    for style in modes {
        let rows = table.select(&style.mode, None);
        if rows.is_empty() {
            debug!("{}: no rows for serial mode '{}'", table.name(), style.mode);
            continue;
        }
        chart.push(Series::new(
            &style.mode,
            throughput_points(rows, SERIAL_THROUGHPUT_SCALE, false),
            style.color,
            style.line_style,
        ));
    }

    Ok(chart)
}

/// Throughput of one mode, one series per thread count.
///
/// Returns `None` when the table has no rows for `mode`.
pub fn thread_breakdown(table: &TimingTable, mode: &str) -> Result<Option<ChartSpec>> {
    table.require_column(CELLS_PER_SECOND)?;

    let thread_counts = table.thread_counts(mode);
    if thread_counts.is_empty() {
        debug!("{}: no rows for mode '{}'", table.name(), mode);
        return Ok(None);
    }

    let mut chart = ChartSpec::new(
        &format!("{}_times.png", file_slug(mode)),
        &format!("Execution throughput for mode: {}", mode),
        WORLD_SIZE_LOG2,
        "Cells/s (billions)",
    );

    for (i, threads) in thread_counts.into_iter().enumerate() {
        let rows = table.select(mode, Some(threads));
        chart.push(Series::new(
            &format!("{} tpb", threads),
            throughput_points(rows, ACCELERATED_THROUGHPUT_SCALE, true),
            SeriesColor::nth(i),
            LineStyle::Solid,
        ));
    }

    Ok(Some(chart))
}

/// Per-thread breakdown charts for every mode configured on `backend`
pub fn thread_breakdowns(table: &TimingTable, backend: &BackendConfig) -> Result<Vec<ChartSpec>> {
    let mut charts = Vec::new();
    for mode in &backend.modes {
        if let Some(chart) = thread_breakdown(table, &mode.mode)? {
            charts.push(chart);
        }
    }
    Ok(charts)
}

/// All modes of a backend at their configured thread counts on one chart
pub fn mode_comparison(table: &TimingTable, backend: &BackendConfig) -> Result<ChartSpec> {
    table.require_column(CELLS_PER_SECOND)?;

    let mut chart = ChartSpec::new(
        &format!("{}_time_comparison.png", file_slug(&backend.name)),
        &format!("Comparison of {} execution modes", backend.name),
        WORLD_SIZE_LOG2,
        "Cells/s (billions)",
    );

    for (i, mode) in backend.modes.iter().enumerate() {
        let rows = table.select(&mode.mode, Some(mode.threads));
        if rows.is_empty() {
            debug!(
                "{}: no rows for mode '{}' with threads = {}, skipping series",
                table.name(),
                mode.mode,
                mode.threads
            );
            continue;
        }
        chart.push(Series::new(
            &format!("{} ({} tpb)", mode.mode, mode.threads),
            throughput_points(rows, ACCELERATED_THROUGHPUT_SCALE, true),
            SeriesColor::nth(i),
            LineStyle::Solid,
        ));
    }

    Ok(chart)
}

/// Speedup curves, coloured by backend and patterned by mode variant
pub fn speedup_chart(records: &[SpeedupRecord], backends: &[BackendConfig], baseline_mode: &str) -> ChartSpec {
    let mut chart = ChartSpec::new(
        "speedup.png",
        &format!("Speedup over {} execution", baseline_mode.to_lowercase()),
        WORLD_SIZE,
        "Speedup",
    );

    for backend in backends {
        let backend_records: Vec<&SpeedupRecord> =
            records.iter().filter(|r| r.backend == backend.name).collect();

        let mut modes: Vec<&str> = Vec::new();
        for record in &backend_records {
            if !modes.contains(&record.mode.as_str()) {
                modes.push(&record.mode);
            }
        }

        for mode in modes {
            let line_style = backend
                .modes
                .iter()
                .find(|m| m.mode == mode)
                .map(|m| m.line_style())
                .unwrap_or_else(|| LineStyle::for_mode(mode));
            let points = backend_records
                .iter()
                .filter(|r| r.mode == mode)
                .map(|r| (r.length as f64, r.speedup))
                .collect();
            chart.push(Series::new(mode, points, backend.color, line_style));
        }
    }

    chart
}
