//! CSV Data Loader Module
//! Reads the raw movie export into a DataFrame using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not found: {0}")]
    FileNotFound(String),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load a CSV file with a header row using Polars.
///
/// Each column is parsed to the most specific type the schema sample
/// allows; unparseable cells become nulls instead of aborting the read.
pub fn load_csv(path: &str) -> Result<DataFrame, LoaderError> {
    if !Path::new(path).exists() {
        return Err(LoaderError::FileNotFound(path.to_string()));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let err = load_csv("/nonexistent/not_a_real_file.csv").unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }
}
