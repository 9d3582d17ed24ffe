// src/error.rs

use std::path::PathBuf;

/// Errors raised while loading benchmark tables or producing charts
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("table '{table}' is missing column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("table '{table}', line {line}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        table: String,
        line: u64,
        column: String,
        value: String,
    },

    #[error("{label}: duplicate rows for length {length}")]
    DuplicateLength { label: String, length: u64 },

    #[error("mode '{mode}' has non-positive or non-finite elapsed time {elapsed} at length {length}")]
    NonPositiveElapsed { mode: String, length: u64, elapsed: f64 },

    #[error("mode '{mode}' speedup at length {length} is not finite ({baseline_us} / {candidate_us})")]
    NonFiniteSpeedup {
        mode: String,
        length: u64,
        baseline_us: f64,
        candidate_us: f64,
    },

    #[error("failed to read CSV from '{table}': {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to render chart '{file}': {message}")]
    Render { file: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PlotError>;
