//! Charts module - static PNG chart rendering

mod bar;
mod line;

pub use bar::{render_bar_chart, PALETTE};
pub use line::{prepare_series, render_line_chart, SERIES_COLOR};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no data points to plot")]
    EmptySeries,
    #[error("rendering failed: {0}")]
    Backend(String),
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Fixed presentation for one chart: caption, axis descriptions and the
/// output resolution in pixels.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub width: u32,
    pub height: u32,
}
