// src/benchmark/table.rs

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::benchmark::records::{
    TableKind, TimeUnit, TimingRecord, CELLS_PER_SECOND, HEIGHT, ITERATIONS, LENGTH, MODE,
    THREADS, WIDTH,
};
use crate::error::{PlotError, Result};

/// What to do when a keyed index sees the same length more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with `PlotError::DuplicateLength`
    #[default]
    Reject,
    /// Keep the row that appears first in the table
    First,
    /// Average every row for that length
    Mean,
}

/// A loaded benchmark table
#[derive(Debug, Clone)]
pub struct TimingTable {
    name: String,
    kind: TableKind,
    columns: Vec<String>,
    records: Vec<TimingRecord>,
}

impl TimingTable {
    /// Load a table from disk
    pub fn load<P: AsRef<Path>>(path: P, kind: TableKind) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PlotError::MissingInput {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let table = Self::from_reader(&path.display().to_string(), file, kind)?;
        debug!(
            "Loaded {} rows ({} modes) from {}",
            table.len(),
            table.modes().len(),
            table.name
        );
        Ok(table)
    }

    /// Parse a table from any reader. `name` is used in error messages.
    pub fn from_reader<R: Read>(name: &str, reader: R, kind: TableKind) -> Result<Self> {
        let csv_error = |source: csv::Error| PlotError::Csv {
            table: name.to_string(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers().map_err(csv_error)?.clone();
        let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let find = |column: &str| columns.iter().position(|h| h == column);
        let require = |column: &str| {
            find(column).ok_or_else(|| PlotError::MissingColumn {
                table: name.to_string(),
                column: column.to_string(),
            })
        };

        let mode_idx = require(MODE)?;
        let length_idx = require(LENGTH)?;
        let time_headers = kind.time_headers();
        let time_idx = time_headers
            .iter()
            .find_map(|header| find(*header))
            .ok_or_else(|| PlotError::MissingColumn {
                table: name.to_string(),
                column: time_headers[0].to_string(),
            })?;
        let time_column = columns[time_idx].clone();
        let threads_idx = if kind.requires_threads() {
            Some(require(THREADS)?)
        } else {
            find(THREADS)
        };
        let cells_idx = find(CELLS_PER_SECOND);
        let width_idx = find(WIDTH);
        let height_idx = find(HEIGHT);
        let iterations_idx = find(ITERATIONS);

        let unit = kind.time_unit();
        let mut records = Vec::new();

        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(csv_error)?;
            // header is line 1
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(row as u64 + 2);
            let field = |idx: usize| record.get(idx).unwrap_or("");
            let optional = |idx: Option<usize>| idx.map(field).filter(|value| !value.is_empty());

            let mode = field(mode_idx).to_string();
            let length: u64 = parse_field(name, line, LENGTH, field(length_idx))?;
            let elapsed: f64 = parse_field(name, line, &time_column, field(time_idx))?;
            let threads = optional(threads_idx)
                .map(|value| parse_field::<u32>(name, line, THREADS, value))
                .transpose()?;
            let cells_per_second = optional(cells_idx)
                .map(|value| parse_field::<f64>(name, line, CELLS_PER_SECOND, value))
                .transpose()?;
            let width = optional(width_idx)
                .map(|value| parse_field::<u64>(name, line, WIDTH, value))
                .transpose()?;
            let height = optional(height_idx)
                .map(|value| parse_field::<u64>(name, line, HEIGHT, value))
                .transpose()?;
            let iterations = optional(iterations_idx)
                .map(|value| parse_field::<u32>(name, line, ITERATIONS, value))
                .transpose()?;

            if kind.requires_threads() && threads.is_none() {
                return Err(PlotError::InvalidValue {
                    table: name.to_string(),
                    line,
                    column: THREADS.to_string(),
                    value: String::new(),
                });
            }

            trace!("{}:{} {} threads={:?} length={}", name, line, mode, threads, length);

            records.push(TimingRecord {
                mode,
                threads,
                length,
                elapsed_us: unit.to_micros(elapsed),
                cells_per_second,
                width,
                height,
                iterations,
            });
        }

        Ok(TimingTable {
            name: name.to_string(),
            kind,
            columns,
            records,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Unit the elapsed column was written in. Records are always stored in microseconds.
    pub fn source_unit(&self) -> TimeUnit {
        self.kind.time_unit()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Fail with `MissingColumn` unless the header row contains `column`
    pub fn require_column(&self, column: &str) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(PlotError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
        }
    }

    pub fn records(&self) -> &[TimingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct modes in order of first appearance
    pub fn modes(&self) -> Vec<&str> {
        let mut modes: Vec<&str> = Vec::new();
        for record in &self.records {
            if !modes.contains(&record.mode.as_str()) {
                modes.push(&record.mode);
            }
        }
        modes
    }

    /// Distinct thread counts recorded for `mode`, ascending
    pub fn thread_counts(&self, mode: &str) -> Vec<u32> {
        let mut threads: Vec<u32> = self
            .records
            .iter()
            .filter(|r| r.mode == mode)
            .filter_map(|r| r.threads)
            .collect();
        threads.sort_unstable();
        threads.dedup();
        threads
    }

    /// Distinct lengths in order of first appearance
    pub fn lengths(&self) -> Vec<u64> {
        let mut lengths = Vec::new();
        for record in &self.records {
            if !lengths.contains(&record.length) {
                lengths.push(record.length);
            }
        }
        lengths
    }

    /// Rows for `mode`, restricted to `threads` when given
    pub fn select(&self, mode: &str, threads: Option<u32>) -> Vec<&TimingRecord> {
        self.records
            .iter()
            .filter(|r| r.matches(mode, threads))
            .collect()
    }
}

fn parse_field<T: FromStr>(table: &str, line: u64, column: &str, value: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| PlotError::InvalidValue {
        table: table.to_string(),
        line,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Elapsed time per length, built once per record set
#[derive(Debug, Clone, Default)]
pub struct LengthIndex {
    order: Vec<u64>,
    elapsed_us: HashMap<u64, f64>,
}

impl LengthIndex {
    /// Index `records` by length. `label` names the record set in duplicate errors.
    pub fn build<'a, I>(records: I, policy: DuplicatePolicy, label: &str) -> Result<Self>
    where
        I: IntoIterator<Item = &'a TimingRecord>,
    {
        let mut order = Vec::new();
        let mut sums: HashMap<u64, (f64, u32)> = HashMap::new();

        for record in records {
            match sums.entry(record.length) {
                Entry::Vacant(entry) => {
                    order.push(record.length);
                    entry.insert((record.elapsed_us, 1));
                }
                Entry::Occupied(mut entry) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(PlotError::DuplicateLength {
                            label: label.to_string(),
                            length: record.length,
                        });
                    }
                    DuplicatePolicy::First => {}
                    DuplicatePolicy::Mean => {
                        let (sum, count) = entry.get_mut();
                        *sum += record.elapsed_us;
                        *count += 1;
                    }
                },
            }
        }

        let elapsed_us = sums
            .into_iter()
            .map(|(length, (sum, count))| (length, sum / count as f64))
            .collect();

        Ok(LengthIndex { order, elapsed_us })
    }

    pub fn get(&self, length: u64) -> Option<f64> {
        self.elapsed_us.get(&length).copied()
    }

    /// Indexed lengths in order of first appearance
    pub fn lengths(&self) -> &[u64] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.order.iter().map(move |length| (*length, self.elapsed_us[length]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
