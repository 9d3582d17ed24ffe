// src/benchmark/report.rs

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::benchmark::records::SpeedupRecord;
use crate::error::Result;

/// Every speedup computed in one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedupReport {
    pub generated_at: DateTime<Utc>,
    pub baseline_table: String,
    pub baseline_mode: String,
    pub records: Vec<SpeedupRecord>,
}

impl SpeedupReport {
    pub fn new(baseline_table: &str, baseline_mode: &str) -> Self {
        SpeedupReport {
            generated_at: Utc::now(),
            baseline_table: baseline_table.to_string(),
            baseline_mode: baseline_mode.to_string(),
            records: Vec::new(),
        }
    }

    pub fn add_records<I: IntoIterator<Item = SpeedupRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    /// Records of one backend, in insertion order
    pub fn backend_records<'a>(&'a self, backend: &'a str) -> impl Iterator<Item = &'a SpeedupRecord> + 'a {
        self.records.iter().filter(move |r| r.backend == backend)
    }

    /// Best speedup seen for any mode of any backend
    pub fn peak(&self) -> Option<&SpeedupRecord> {
        self.records
            .iter()
            .max_by(|a, b| a.speedup.total_cmp(&b.speedup))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let report = serde_json::from_str(&json)?;
        Ok(report)
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(80));
        println!("SPEEDUP OVER {}", self.baseline_mode.to_uppercase());
        println!("{}", "=".repeat(80));
        println!("\nGenerated: {}", self.generated_at);
        println!("Baseline:  {} ({})", self.baseline_table, self.baseline_mode);

        if self.records.is_empty() {
            println!("\nNo speedup records.");
            println!("\n{}", "=".repeat(80));
            return;
        }

        println!("\n{}", "-".repeat(80));
        println!("{:<10} {:<20} {:>15} {:>15}", "Backend", "Mode", "Length", "Speedup");
        println!("{}", "-".repeat(80));

        for record in &self.records {
            println!(
                "{:<10} {:<20} {:>15} {:>14.2}x",
                record.backend, record.mode, record.length, record.speedup
            );
        }

        if let Some(peak) = self.peak() {
            println!("{}", "-".repeat(80));
            println!(
                "Peak: {:.2}x ({} at length {})",
                peak.speedup, peak.mode, peak.length
            );
        }

        println!("\n{}", "=".repeat(80));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mode: &str, backend: &str, length: u64, speedup: f64) -> SpeedupRecord {
        SpeedupRecord {
            length,
            speedup,
            mode: mode.to_string(),
            backend: backend.to_string(),
        }
    }

    #[test]
    fn test_peak_and_backend_filter() {
        let mut report = SpeedupReport::new("serial_benchmark.csv", "Serial");
        assert!(report.peak().is_none());

        report.add_records(vec![
            record("CUDA", "CUDA", 1024, 8.0),
            record("OpenCL", "OpenCL", 1024, 12.5),
            record("CUDA 2D", "CUDA", 2048, 3.0),
        ]);

        assert_eq!(report.peak().unwrap().mode, "OpenCL");
        assert_eq!(report.backend_records("CUDA").count(), 2);
        assert_eq!(report.backend_records("HIP").count(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speedup_report.json");

        let mut report = SpeedupReport::new("serial_benchmark.csv", "Serial");
        report.add_records(vec![record("CUDA", "CUDA", 1024, 8.0)]);
        report.save_to_file(&path).unwrap();

        let loaded = SpeedupReport::load_from_file(&path).unwrap();
        assert_eq!(loaded.records, report.records);
        assert_eq!(loaded.generated_at, report.generated_at);
    }
}
