// src/benchmark/records.rs

use serde::{Deserialize, Serialize};

pub const MODE: &str = "Mode";
pub const THREADS: &str = "Threads";
pub const LENGTH: &str = "Length";
pub const WIDTH: &str = "Width";
pub const HEIGHT: &str = "Height";
pub const ITERATIONS: &str = "Iterations";
pub const TIME_SECONDS: &str = "Time[s]";
pub const TIME_MICROS: &str = "Time[μs]";
pub const TIME_MICROS_ASCII: &str = "Time[us]";
pub const CELLS_PER_SECOND: &str = "Cells/s";

/// Unit of the elapsed-time column in a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Microseconds,
}

impl TimeUnit {
    pub fn to_micros(self, value: f64) -> f64 {
        match self {
            TimeUnit::Seconds => value * 1_000_000.0,
            TimeUnit::Microseconds => value,
        }
    }
}

/// Which layout a table is expected to have.
///
/// The serial benchmark writes `Time[s]` and no `Threads` column; the CUDA and
/// OpenCL benchmarks write `Threads` and `Time[μs]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Baseline,
    Accelerated,
}

impl TableKind {
    pub fn time_unit(self) -> TimeUnit {
        match self {
            TableKind::Baseline => TimeUnit::Seconds,
            TableKind::Accelerated => TimeUnit::Microseconds,
        }
    }

    /// Accepted headers for the elapsed-time column, preferred name first
    pub fn time_headers(self) -> &'static [&'static str] {
        match self {
            TableKind::Baseline => &[TIME_SECONDS],
            TableKind::Accelerated => &[TIME_MICROS, TIME_MICROS_ASCII],
        }
    }

    pub fn requires_threads(self) -> bool {
        matches!(self, TableKind::Accelerated)
    }
}

/// One row of a benchmark table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    pub mode: String,
    pub threads: Option<u32>,
    pub length: u64,
    /// Wall-clock time in microseconds
    pub elapsed_us: f64,
    pub cells_per_second: Option<f64>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub iterations: Option<u32>,
}

impl TimingRecord {
    pub fn new(mode: &str, threads: Option<u32>, length: u64, elapsed_us: f64) -> Self {
        TimingRecord {
            mode: mode.to_string(),
            threads,
            length,
            elapsed_us,
            cells_per_second: None,
            width: None,
            height: None,
            iterations: None,
        }
    }

    pub fn with_throughput(mut self, cells_per_second: f64) -> Self {
        self.cells_per_second = Some(cells_per_second);
        self
    }

    pub fn matches(&self, mode: &str, threads: Option<u32>) -> bool {
        self.mode == mode && (threads.is_none() || self.threads == threads)
    }
}

/// Ratio of baseline time to accelerated time at one problem size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedupRecord {
    pub length: u64,
    pub speedup: f64,
    pub mode: String,
    pub backend: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_micros() {
        assert_eq!(TimeUnit::Seconds.to_micros(2.5), 2_500_000.0);
        assert_eq!(TimeUnit::Microseconds.to_micros(2.5), 2.5);
    }

    #[test]
    fn test_record_matching() {
        let record = TimingRecord::new("CUDA", Some(256), 1024, 10.0);
        assert!(record.matches("CUDA", Some(256)));
        assert!(record.matches("CUDA", None));
        assert!(!record.matches("CUDA", Some(128)));
        assert!(!record.matches("CUDA 2D", Some(256)));
    }

    #[test]
    fn test_table_kind_layout() {
        assert_eq!(TableKind::Baseline.time_unit(), TimeUnit::Seconds);
        assert!(!TableKind::Baseline.requires_threads());
        assert!(TableKind::Accelerated.time_headers().contains(&"Time[us]"));
    }
}
