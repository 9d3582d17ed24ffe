// src/charts/render.rs

use std::fmt::Display;
use std::fs;
use std::path::Path;

use log::info;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::charts::spec::ChartSpec;
use crate::error::{PlotError, Result};

fn render_error<E: Display>(path: &Path, err: E) -> PlotError {
    PlotError::Render {
        file: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Draw `spec` as a PNG line chart with markers, grid and legend
pub fn render_chart(spec: &ChartSpec, path: &Path, size: (u32, u32)) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let (x_range, y_range) = spec.bounds();
    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .draw()
        .map_err(|e| render_error(path, e))?;

    for series in &spec.series {
        let color = series.color.rgb();
        let style = color.stroke_width(2);
        let points = series.points.clone();

        let annotation = match series.line_style.dash_pattern() {
            None => chart.draw_series(LineSeries::new(points, style)),
            Some((dash, gap)) => chart.draw_series(DashedLineSeries::new(points, dash, gap, style)),
        }
        .map_err(|e| render_error(path, e))?;

        annotation
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        chart
            .draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, 4, color.filled())),
            )
            .map_err(|e| render_error(path, e))?;
    }

    if !spec.series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| render_error(path, e))?;
    }

    root.present().map_err(|e| render_error(path, e))?;
    info!("Wrote {}", path.display());
    Ok(())
}
