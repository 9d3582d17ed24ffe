// src/benchmark/speedup.rs

use log::{debug, warn};

use crate::benchmark::records::{SpeedupRecord, TimingRecord};
use crate::benchmark::table::{DuplicatePolicy, LengthIndex};
use crate::config::BackendConfig;
use crate::error::{PlotError, Result};

/// Joins baseline timings against accelerated timings on problem size.
///
/// Only lengths present in the baseline are considered, in the order they
/// first appear there. A length the accelerated run never reached is skipped
/// without error; a length only the accelerated run has is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedupComputer {
    policy: DuplicatePolicy,
}

impl SpeedupComputer {
    pub fn new(policy: DuplicatePolicy) -> Self {
        SpeedupComputer { policy }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Speedup of one (mode, threads) configuration over `baseline`
    pub fn compute(
        &self,
        baseline: &[TimingRecord],
        candidates: &[TimingRecord],
        mode: &str,
        backend: &str,
        threads: u32,
    ) -> Result<Vec<SpeedupRecord>> {
        let baseline_index = LengthIndex::build(baseline, self.policy, "baseline")?;
        self.compute_indexed(&baseline_index, candidates, mode, backend, threads)
    }

    /// Like `compute`, against a baseline index that is already built
    pub fn compute_indexed(
        &self,
        baseline_index: &LengthIndex,
        candidates: &[TimingRecord],
        mode: &str,
        backend: &str,
        threads: u32,
    ) -> Result<Vec<SpeedupRecord>> {
        let filtered: Vec<&TimingRecord> = candidates
            .iter()
            .filter(|r| r.matches(mode, Some(threads)))
            .collect();

        if filtered.is_empty() {
            warn!("No data found for mode '{}' with threads = {}", mode, threads);
            return Ok(Vec::new());
        }

        let candidate_label = format!("{} ({} tpb)", mode, threads);
        let candidate_index = LengthIndex::build(filtered, self.policy, &candidate_label)?;

        let mut speedups = Vec::with_capacity(baseline_index.len());
        for (length, baseline_us) in baseline_index.iter() {
            let Some(candidate_us) = candidate_index.get(length) else {
                debug!("{}: no timing for length {}, skipping", candidate_label, length);
                continue;
            };

            if !candidate_us.is_finite() || candidate_us <= 0.0 {
                return Err(PlotError::NonPositiveElapsed {
                    mode: mode.to_string(),
                    length,
                    elapsed: candidate_us,
                });
            }

            let speedup = baseline_us / candidate_us;
            if !speedup.is_finite() {
                return Err(PlotError::NonFiniteSpeedup {
                    mode: mode.to_string(),
                    length,
                    baseline_us,
                    candidate_us,
                });
            }

            speedups.push(SpeedupRecord {
                length,
                speedup,
                mode: mode.to_string(),
                backend: backend.to_string(),
            });
        }

        Ok(speedups)
    }

    /// Speedups for every configured mode of a backend, concatenated in config order.
    /// The baseline index is built once and shared by every mode.
    pub fn compute_backend(
        &self,
        baseline: &[TimingRecord],
        candidates: &[TimingRecord],
        backend: &BackendConfig,
    ) -> Result<Vec<SpeedupRecord>> {
        let baseline_index = LengthIndex::build(baseline, self.policy, "baseline")?;
        let mut speedups = Vec::new();
        for mode in &backend.modes {
            speedups.extend(self.compute_indexed(
                &baseline_index,
                candidates,
                &mode.mode,
                &backend.name,
                mode.threads,
            )?);
        }
        Ok(speedups)
    }
}
