// src/config/mod.rs

pub mod plot_config;

// Re-export main types for convenience
pub use plot_config::{BackendConfig, BaselineConfig, ChartConfig, ModeThreads, PlotConfig, SeriesStyle};
