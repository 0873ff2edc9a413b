//! Bar Chart Renderer
//! Draws per-group mean bars with standard-deviation error bars to a PNG.

use super::{ChartError, ChartSpec};
use crate::stats::GroupStats;
use log::debug;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Color palette for group bars
pub const PALETTE: [RGBColor; 8] = [
    RGBColor(102, 194, 165), // Green
    RGBColor(252, 141, 98),  // Orange
    RGBColor(141, 160, 203), // Violet
    RGBColor(231, 138, 195), // Pink
    RGBColor(166, 216, 84),  // Lime
    RGBColor(255, 217, 47),  // Yellow
    RGBColor(229, 196, 148), // Tan
    RGBColor(179, 179, 179), // Grey
];

/// Render one bar per group (height = mean, whisker = mean ± std).
///
/// Groups are drawn in the order given; a group without a defined standard
/// deviation gets a bar but no whisker. An existing file at `path` is
/// overwritten.
pub fn render_bar_chart(
    groups: &[GroupStats],
    spec: &ChartSpec,
    path: &Path,
) -> Result<(), ChartError> {
    if groups.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    debug!(
        "rendering bar chart ({} groups) to {}",
        groups.len(),
        path.display()
    );
    draw(groups, spec, path).map_err(|e| ChartError::Backend(e.to_string()))
}

fn draw(groups: &[GroupStats], spec: &ChartSpec, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (spec.width, spec.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 64))
        .margin(40)
        .x_label_area_size(140)
        .y_label_area_size(200)
        .build_cartesian_2d((0..groups.len()).into_segmented(), 0f64..y_axis_max(groups))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(BLACK.mix(0.15))
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style(("sans-serif", 44))
        .label_style(("sans-serif", 36))
        .x_label_formatter(&|seg: &SegmentValue<usize>| match seg {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    chart.draw_series(groups.iter().enumerate().map(|(i, group)| {
        let color = PALETTE[i % PALETTE.len()];
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), group.mean),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 30, 30);
        bar
    }))?;

    chart.draw_series(groups.iter().enumerate().filter_map(|(i, group)| {
        group.std.map(|std| {
            // Keep the lower whisker on-axis when std exceeds the mean.
            ErrorBar::new_vertical(
                SegmentValue::CenterOf(i),
                (group.mean - std).max(0.0),
                group.mean,
                group.mean + std,
                BLACK.stroke_width(6),
                24,
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

/// Y-axis ceiling: the tallest bar plus its whisker, with headroom.
fn y_axis_max(groups: &[GroupStats]) -> f64 {
    let top = groups
        .iter()
        .map(|g| g.mean + g.std.unwrap_or(0.0))
        .fold(0.0_f64, f64::max);
    if top > 0.0 {
        top * 1.1
    } else {
        1.0
    }
}
