//! Semantic Type Coercion
//! Converts textual record-set columns to their numeric types, in place.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoerceError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("cannot coerce {value:?} to {dtype} (column {column:?}, row {row})")]
    Invalid {
        column: String,
        row: usize,
        value: String,
        dtype: DataType,
    },
}

/// Reinterpret the named columns under new semantic types, in place.
///
/// Column positions and all untargeted columns are left untouched. The cast
/// is strict: a single value that does not parse under its target type fails
/// the whole operation and names the offending row. The frame is only
/// mutated once every target column has coerced cleanly, so a failure never
/// leaves a half-typed record set behind. Missing fields count as failures.
pub fn coerce_columns(
    df: &mut DataFrame,
    targets: &[(&str, DataType)],
) -> Result<(), CoerceError> {
    let mut coerced_all = Vec::with_capacity(targets.len());

    for (name, dtype) in targets {
        let original = df.column(name)?.as_materialized_series().clone();

        let coerced = match original.strict_cast(dtype) {
            Ok(series) => series,
            Err(fallback) => {
                // Re-run leniently so the first bad row can be named.
                let lenient = original.cast(dtype)?;
                return Err(first_invalid(&original, &lenient, name, dtype)
                    .unwrap_or(CoerceError::Polars(fallback)));
            }
        };

        if coerced.null_count() > 0 {
            if let Some(err) = first_invalid(&original, &coerced, name, dtype) {
                return Err(err);
            }
        }

        coerced_all.push(coerced);
    }

    for series in coerced_all {
        df.with_column(series)?;
    }

    Ok(())
}

/// First row whose coerced value is null: either a value the cast could not
/// parse, or a field that was missing in the source file.
fn first_invalid(
    original: &Series,
    coerced: &Series,
    name: &str,
    dtype: &DataType,
) -> Option<CoerceError> {
    for row in 0..coerced.len() {
        let Ok(value) = coerced.get(row) else { continue };
        if !value.is_null() {
            continue;
        }
        let shown = original
            .get(row)
            .map(|v| v.to_string().trim_matches('"').to_string())
            .unwrap_or_default();
        return Some(CoerceError::Invalid {
            column: name.to_string(),
            row,
            value: shown,
            dtype: dtype.clone(),
        });
    }
    None
}
