// src/charts/mod.rs

pub mod builders;
pub mod render;
pub mod spec;
pub mod style;

pub use render::render_chart;
pub use spec::{file_slug, ChartSpec, Series};
pub use style::{LineStyle, SeriesColor};
