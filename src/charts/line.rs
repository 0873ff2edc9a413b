//! Line Chart Renderer
//! Draws a single timing series, sorted by x, with a tick at every factor.

use super::{ChartError, ChartSpec};
use log::debug;
use plotters::prelude::*;
use polars::prelude::*;
use std::error::Error;
use std::path::Path;

/// Color for the timing curve and its markers
pub const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180); // Blue

/// Extract `(x, y)` pairs from the record set, sorted ascending by x.
///
/// Rows with a missing value in either column are skipped.
pub fn prepare_series(
    df: &DataFrame,
    x_col: &str,
    y_col: &str,
) -> Result<Vec<(i64, f64)>, ChartError> {
    let xs = df.column(x_col)?.i64()?;
    let ys = df.column(y_col)?.f64()?;

    let mut series: Vec<(i64, f64)> = xs
        .into_iter()
        .zip(ys)
        .filter_map(|(x, y)| Some((x?, y?)))
        .collect();
    series.sort_by_key(|&(x, _)| x);
    Ok(series)
}

/// Render the series as a line with point markers.
///
/// Points are plotted in ascending x order regardless of input order, and
/// the x axis gets a labelled tick at each distinct x value. An existing
/// file at `path` is overwritten.
pub fn render_line_chart(
    series: &[(i64, f64)],
    spec: &ChartSpec,
    path: &Path,
) -> Result<(), ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let mut points = series.to_vec();
    points.sort_by_key(|&(x, _)| x);

    debug!(
        "rendering line chart ({} points) to {}",
        points.len(),
        path.display()
    );
    draw(&points, spec, path).map_err(|e| ChartError::Backend(e.to_string()))
}

// Points must arrive sorted by x.
fn draw(points: &[(i64, f64)], spec: &ChartSpec, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (spec.width, spec.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let ticks = distinct_x(points);
    let (x_range, y_range) = axis_bounds(points);

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 56))
        .margin(40)
        .x_label_area_size(120)
        .y_label_area_size(180)
        .build_cartesian_2d(x_range.with_key_points(ticks), y_range)?;

    chart
        .configure_mesh()
        .light_line_style(BLACK.mix(0.15))
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", 40))
        .label_style(("sans-serif", 32))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        SERIES_COLOR.stroke_width(6),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 10, SERIES_COLOR.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn distinct_x(points: &[(i64, f64)]) -> Vec<i64> {
    let mut xs: Vec<i64> = points.iter().map(|&(x, _)| x).collect();
    xs.dedup();
    xs
}

/// Axis ranges with a little padding so markers never sit on the frame.
fn axis_bounds(
    points: &[(i64, f64)],
) -> (std::ops::Range<i64>, std::ops::Range<f64>) {
    let x_min = points.first().map(|p| p.0).unwrap_or(0);
    let x_max = points.last().map(|p| p.0).unwrap_or(1);
    let (x_min, x_max) = if x_min == x_max {
        (x_min - 1, x_max + 1)
    } else {
        (x_min, x_max)
    };

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(_, y) in points {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let spread = y_max - y_min;
    let pad = if spread > 0.0 {
        spread * 0.08
    } else {
        (y_max.abs() * 0.1).max(1.0)
    };

    (x_min..x_max, (y_min - pad)..(y_max + pad))
}
