// src/charts/spec.rs

use std::ops::Range;

use crate::charts::style::{LineStyle, SeriesColor};

/// File-name stem for a mode or backend: lower-cased, spaces replaced by underscores
pub fn file_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// One line on a chart, drawn with circular markers at every point
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: SeriesColor,
    pub line_style: LineStyle,
}

impl Series {
    /// Points are sorted by x so the line runs left to right
    pub fn new(label: &str, mut points: Vec<(f64, f64)>, color: SeriesColor, line_style: LineStyle) -> Self {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Series {
            label: label.to_string(),
            points,
            color,
            line_style,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything needed to draw a line chart, independent of the drawing backend
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub file_name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn new(file_name: &str, title: &str, x_label: &str, y_label: &str) -> Self {
        ChartSpec {
            file_name: file_name.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            series: Vec::new(),
        }
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    /// Axis ranges covering every point with a 5% margin. The y axis always includes zero.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points = self.series.iter().flat_map(|s| s.points.iter());
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = 0.0_f64;
        let mut y_max = f64::NEG_INFINITY;

        for &(x, y) in points.filter(|(x, y)| x.is_finite() && y.is_finite()) {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if x_min > x_max {
            return (0.0..1.0, 0.0..1.0);
        }

        (pad(x_min, x_max), pad(y_min, y_max.max(y_min)))
    }
}

fn pad(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let margin = if span > 0.0 {
        span * 0.05
    } else {
        (max.abs() * 0.05).max(1.0)
    };
    let low = if min == 0.0 { 0.0 } else { min - margin };
    low..max + margin
}
