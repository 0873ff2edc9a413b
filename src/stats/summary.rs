//! Grouped Summary Statistics
//! Descriptive per-group statistics over one numeric value column.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("value column {0:?} is not numeric")]
    NotNumeric(String),
}

/// Statistics for a single group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub label: String,
    pub count: u32,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n-1 divisor); `None` when fewer than two
    /// observations exist.
    pub std: Option<f64>,
}

/// Per-group aggregate of one value column, ordered by group label.
#[derive(Debug, Clone)]
pub struct GroupedSummary {
    frame: DataFrame,
    groups: Vec<GroupStats>,
}

impl GroupedSummary {
    /// Summary table, one row per group: label, mean, min, max, std, count.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Per-group statistics in display order.
    pub fn groups(&self) -> &[GroupStats] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Aggregate `value_col` per distinct value of `group_col`.
///
/// Groups are sorted by label so repeated runs over the same data print the
/// same table. Every observation belongs to exactly one group; min and max
/// are widened to floats so integer value columns summarize too.
pub fn summarize(
    df: &DataFrame,
    group_col: &str,
    value_col: &str,
) -> Result<GroupedSummary, StatsError> {
    if !is_numeric_dtype(df.column(value_col)?.dtype()) {
        return Err(StatsError::NotNumeric(value_col.to_string()));
    }

    let frame = df
        .clone()
        .lazy()
        .group_by([col(group_col)])
        .agg([
            col(value_col).mean().alias("mean"),
            col(value_col).min().cast(DataType::Float64).alias("min"),
            col(value_col).max().cast(DataType::Float64).alias("max"),
            col(value_col).std(1).alias("std"),
            col(value_col).count().alias("count"),
        ])
        .sort([group_col], SortMultipleOptions::default())
        .collect()?;

    let groups = extract_groups(&frame, group_col)?;
    Ok(GroupedSummary { frame, groups })
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn extract_groups(frame: &DataFrame, group_col: &str) -> Result<Vec<GroupStats>, StatsError> {
    let labels = frame.column(group_col)?;
    let means = frame.column("mean")?.f64()?;
    let mins = frame.column("min")?.f64()?;
    let maxs = frame.column("max")?.f64()?;
    let stds = frame.column("std")?.f64()?;
    let counts = frame.column("count")?.u32()?;

    let mut groups = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let label = labels
            .get(row)?
            .to_string()
            .trim_matches('"')
            .to_string();
        groups.push(GroupStats {
            label,
            count: counts.get(row).unwrap_or(0),
            mean: means.get(row).unwrap_or(f64::NAN),
            min: mins.get(row).unwrap_or(f64::NAN),
            max: maxs.get(row).unwrap_or(f64::NAN),
            std: stds.get(row),
        });
    }
    Ok(groups)
}
