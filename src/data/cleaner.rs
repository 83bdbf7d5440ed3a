//! Data Cleaner Module
//! Row filtering and column projection over the loaded table.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Per-column null counts, in the table's column order.
pub fn missing_value_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect()
}

/// Drop every row whose value in `column` is missing.
///
/// For float columns NaN counts as missing too.
pub fn drop_missing(df: &DataFrame, column: &str) -> Result<DataFrame, CleanerError> {
    let dtype = df
        .column(column)
        .map_err(|_| CleanerError::ColumnNotFound(column.to_string()))?
        .dtype()
        .clone();

    let mut keep = col(column).is_not_null();
    if dtype.is_float() {
        keep = keep.and(col(column).is_not_nan());
    }

    Ok(df.clone().lazy().filter(keep).collect()?)
}

/// Project the table down to `columns`, in the listed order.
pub fn project(df: &DataFrame, columns: &[&str]) -> Result<DataFrame, CleanerError> {
    for &column in columns {
        if df.column(column).is_err() {
            return Err(CleanerError::ColumnNotFound(column.to_string()));
        }
    }

    Ok(df.select(columns.iter().copied())?)
}
