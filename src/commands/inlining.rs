//! Inlining comparison command.
//!
//! Combines the per-mode benchmark result files, prints the execution time
//! summary and renders the grouped bar chart.

use crate::charts::{render_bar_chart, ChartSpec};
use crate::data::{coerce_columns, concat_record_sets, CsvLoader};
use crate::stats::summarize;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use polars::prelude::DataType;
use std::path::PathBuf;

/// Column names for inlining result files, in file order.
pub const COLUMNS: [&str; 3] = ["mode", "n", "time"];

/// Fixed presentation of the comparison chart.
pub const CHART: ChartSpec = ChartSpec {
    title: "Average Execution Time by Inlining Strategy",
    x_desc: "Inlining Mode",
    y_desc: "Time (seconds)",
    width: 3000,
    height: 1800,
};

const SUMMARY_HEADER: &str = "⏱️ Execution Time Summary (in seconds):";

/// Arguments for the inlining command
#[derive(Debug, Clone)]
pub struct InliningArgs {
    /// Result files to combine, in order
    pub inputs: Vec<PathBuf>,

    /// Output path for the comparison chart
    pub chart: PathBuf,
}

impl Default for InliningArgs {
    fn default() -> Self {
        Self {
            inputs: vec![
                PathBuf::from("default_results.csv"),
                PathBuf::from("force_results.csv"),
                PathBuf::from("noinline_results.csv"),
            ],
            chart: PathBuf::from("inlining_comparison.png"),
        }
    }
}

/// Execute the inlining command: load, combine, coerce, summarize, render.
///
/// Any failing stage aborts the run before the summary is printed or the
/// chart file is touched.
pub fn execute_inlining(args: InliningArgs) -> Result<()> {
    if args.inputs.is_empty() {
        bail!("no input files supplied");
    }

    info!("Loading {} result file(s)", args.inputs.len());
    let loader = CsvLoader::new(COLUMNS);
    let frames = loader
        .load_all(&args.inputs)
        .context("Failed to load benchmark results")?;

    let mut df = concat_record_sets(frames).context("Failed to combine result files")?;
    debug!("combined record set: {} rows", df.height());

    coerce_columns(
        &mut df,
        &[("n", DataType::Int64), ("time", DataType::Float64)],
    )
    .context("Failed to coerce result columns")?;

    let summary = summarize(&df, "mode", "time").context("Failed to summarize execution times")?;

    println!("{SUMMARY_HEADER}");
    println!("{}", summary.frame());

    render_bar_chart(summary.groups(), &CHART, &args.chart)
        .context("Failed to render comparison chart")?;
    info!("✓ Chart written to: {}", args.chart.display());

    Ok(())
}
