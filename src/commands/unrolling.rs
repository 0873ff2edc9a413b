//! Loop unrolling command.
//!
//! Loads the unrolling timing results and renders the sorted timing curve.

use crate::charts::{prepare_series, render_line_chart, ChartSpec};
use crate::data::{coerce_columns, CsvLoader};
use anyhow::{Context, Result};
use log::{debug, info};
use polars::prelude::DataType;
use std::path::PathBuf;

/// Column names for unrolling result files, in file order.
pub const COLUMNS: [&str; 2] = ["unroll_factor", "time_ns"];

/// Fixed presentation of the timing chart.
pub const CHART: ChartSpec = ChartSpec {
    title: "Copy Loop Timing vs Unroll Factor",
    x_desc: "Unroll Factor",
    y_desc: "Avg Time (ns)",
    width: 2400,
    height: 1500,
};

/// Arguments for the unrolling command
#[derive(Debug, Clone)]
pub struct UnrollingArgs {
    /// Result file with one row per unroll factor
    pub input: PathBuf,

    /// Output path for the timing chart
    pub chart: PathBuf,
}

impl Default for UnrollingArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("results.csv"),
            chart: PathBuf::from("loop_unrolling_plot.png"),
        }
    }
}

/// Execute the unrolling command: load, coerce, render.
pub fn execute_unrolling(args: UnrollingArgs) -> Result<()> {
    info!("Loading {}", args.input.display());
    let loader = CsvLoader::new(COLUMNS);
    let mut df = loader
        .load(&args.input)
        .context("Failed to load benchmark results")?;

    coerce_columns(
        &mut df,
        &[
            ("unroll_factor", DataType::Int64),
            ("time_ns", DataType::Float64),
        ],
    )
    .context("Failed to coerce result columns")?;
    debug!("record set: {} rows", df.height());

    let series = prepare_series(&df, "unroll_factor", "time_ns")
        .context("Failed to extract the timing series")?;

    render_line_chart(&series, &CHART, &args.chart).context("Failed to render timing chart")?;
    info!("✓ Chart written to: {}", args.chart.display());

    Ok(())
}
