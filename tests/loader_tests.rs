use benchplot::data::{coerce_columns, concat_record_sets, CsvLoader, LoaderError};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_load_assigns_columns_in_declared_order() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "results.csv",
        "default,1000000,0.0123\ndefault,1000000,0.0125\n",
    );

    let loader = CsvLoader::new(["mode", "n", "time"]);
    let df = loader.load(&path).unwrap();

    assert_eq!(column_names(&df), vec!["mode", "n", "time"]);
    assert_eq!(df.height(), 2);
}

#[test]
fn test_loaded_columns_are_textual_before_coercion() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), "results.csv", "default,1000000,0.0123\n");

    let loader = CsvLoader::new(["mode", "n", "time"]);
    let df = loader.load(&path).unwrap();

    for column in df.get_columns() {
        assert_eq!(column.dtype(), &DataType::String);
    }
}

#[test]
fn test_first_line_is_data_not_a_header() {
    let dir = tempdir().unwrap();
    // Looks like a header, but the files have none; every line is a record.
    let path = write_csv(dir.path(), "results.csv", "mode,n,time\ndefault,10,0.5\n");

    let loader = CsvLoader::new(["mode", "n", "time"]);
    let df = loader.load(&path).unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(
        df.column("mode").unwrap().str().unwrap().get(0),
        Some("mode")
    );
}

#[test]
fn test_missing_file_error_names_the_path() {
    let loader = CsvLoader::new(["mode", "n", "time"]);
    let err = loader.load(Path::new("does_not_exist.csv")).unwrap_err();

    assert!(matches!(err, LoaderError::Read { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn test_column_count_mismatch_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), "short.csv", "8,120.5\n1,400.25\n");

    let loader = CsvLoader::new(["mode", "n", "time"]);
    let err = loader.load(&path).unwrap_err();

    assert!(matches!(err, LoaderError::ColumnCount { .. }));
    let message = err.to_string();
    assert!(message.contains("short.csv"));
    assert!(message.contains("expected 3"));
}

#[test]
fn test_concatenation_preserves_input_order() {
    let dir = tempdir().unwrap();
    let first = write_csv(dir.path(), "a.csv", "a1,1,0.1\na2,2,0.2\n");
    let second = write_csv(dir.path(), "b.csv", "b1,3,0.3\n");
    let third = write_csv(dir.path(), "c.csv", "c1,4,0.4\n");

    let loader = CsvLoader::new(["mode", "n", "time"]);
    let frames = loader.load_all(&[first, second, third]).unwrap();
    let combined = concat_record_sets(frames).unwrap();

    assert_eq!(combined.height(), 4);
    let modes = combined.column("mode").unwrap().str().unwrap();
    let collected: Vec<&str> = modes.into_iter().flatten().collect();
    assert_eq!(collected, ["a1", "a2", "b1", "c1"]);
}

#[test]
fn test_coercion_failure_names_row_and_column() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), "bad.csv", "default,1000,0.5\ndefault,1000,fast\n");

    let loader = CsvLoader::new(["mode", "n", "time"]);
    let mut df = loader.load(&path).unwrap();

    let err = coerce_columns(
        &mut df,
        &[("n", DataType::Int64), ("time", DataType::Float64)],
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("time"));
    assert!(message.contains("row 1"));
    assert!(message.contains("fast"));
}

#[test]
fn test_coerced_pipeline_yields_numeric_columns() {
    let dir = tempdir().unwrap();
    let first = write_csv(dir.path(), "a.csv", "default,1000000,0.0123\n");
    let second = write_csv(dir.path(), "b.csv", "force,1000000,0.0098\n");

    let loader = CsvLoader::new(["mode", "n", "time"]);
    let frames = loader.load_all(&[first, second]).unwrap();
    let mut df = concat_record_sets(frames).unwrap();
    coerce_columns(
        &mut df,
        &[("n", DataType::Int64), ("time", DataType::Float64)],
    )
    .unwrap();

    assert_eq!(df.column("n").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("time").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("n").unwrap().i64().unwrap().get(0), Some(1000000));
}
