//! Data module - CSV loading and type coercion

mod coerce;
mod loader;

pub use coerce::{coerce_columns, CoerceError};
pub use loader::{concat_record_sets, CsvLoader, LoaderError};
