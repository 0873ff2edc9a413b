//! CSV Record Set Loader
//! Reads headerless benchmark result files into DataFrames using Polars.

use log::debug;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("{}: expected {expected} columns, found {found}", path.display())]
    ColumnCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("cannot concatenate record sets with different schemas: [{left}] vs [{right}]")]
    SchemaMismatch { left: String, right: String },
    #[error("no data loaded")]
    NoData,
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Loads headerless CSV files under an explicit column-name list.
///
/// The result files never carry a header row; names are assigned in the
/// declared order. Every column is read as text; semantic types are applied
/// afterwards by [`coerce_columns`](crate::data::coerce_columns).
pub struct CsvLoader {
    columns: Vec<String>,
}

impl CsvLoader {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Column names assigned to loaded files, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Load a single CSV file into a record set.
    ///
    /// A missing or unreadable file is fatal and reported with its path.
    pub fn load(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        let mut df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(LazyFrame::collect)
            .map_err(|source| LoaderError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        if df.width() != self.columns.len() {
            return Err(LoaderError::ColumnCount {
                path: path.to_path_buf(),
                expected: self.columns.len(),
                found: df.width(),
            });
        }
        df.set_column_names(self.columns.iter().map(String::as_str))?;

        debug!(
            "loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );
        Ok(df)
    }

    /// Load several files, in the order supplied.
    pub fn load_all(&self, paths: &[PathBuf]) -> Result<Vec<DataFrame>, LoaderError> {
        paths.iter().map(|path| self.load(path)).collect()
    }
}

/// Concatenate record sets in input order, preserving per-file row order.
///
/// All inputs must share one schema (same names, order and types); the
/// loader guarantees this when the same column list was used throughout.
pub fn concat_record_sets(frames: Vec<DataFrame>) -> Result<DataFrame, LoaderError> {
    let mut iter = frames.into_iter();
    let mut combined = iter.next().ok_or(LoaderError::NoData)?;

    for frame in iter {
        if combined.schema() != frame.schema() {
            return Err(LoaderError::SchemaMismatch {
                left: schema_list(&combined),
                right: schema_list(&frame),
            });
        }
        combined.vstack_mut(&frame)?;
    }

    Ok(combined)
}

fn schema_list(df: &DataFrame) -> String {
    df.schema()
        .iter()
        .map(|(name, dtype)| format!("{name}: {dtype}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(label_col: &str, labels: Vec<&str>, values: Vec<&str>) -> DataFrame {
        DataFrame::new(vec![
            Column::new(label_col.into(), labels),
            Column::new("value".into(), values),
        ])
        .unwrap()
    }

    #[test]
    fn loader_reports_declared_columns() {
        let loader = CsvLoader::new(["mode", "n", "time"]);
        assert_eq!(loader.columns(), ["mode", "n", "time"]);
    }

    #[test]
    fn concat_preserves_row_order_across_inputs() {
        let first = frame("mode", vec!["a", "b"], vec!["1", "2"]);
        let second = frame("mode", vec!["c"], vec!["3"]);

        let combined = concat_record_sets(vec![first, second]).unwrap();

        assert_eq!(combined.height(), 3);
        let modes = combined.column("mode").unwrap();
        let collected: Vec<String> = (0..combined.height())
            .map(|i| {
                modes
                    .get(i)
                    .unwrap()
                    .to_string()
                    .trim_matches('"')
                    .to_string()
            })
            .collect();
        assert_eq!(collected, ["a", "b", "c"]);
    }

    #[test]
    fn concat_rejects_mismatched_schemas() {
        let first = frame("mode", vec!["a"], vec!["1"]);
        let second = frame("kind", vec!["b"], vec!["2"]);

        let err = concat_record_sets(vec![first, second]).unwrap_err();
        assert!(matches!(err, LoaderError::SchemaMismatch { .. }));
        assert!(err.to_string().contains("kind"));
    }

    #[test]
    fn concat_requires_at_least_one_input() {
        let err = concat_record_sets(Vec::new()).unwrap_err();
        assert!(matches!(err, LoaderError::NoData));
    }
}
