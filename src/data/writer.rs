//! CSV Writer Module
//! Serializes tables back to disk as delimited text.

use polars::prelude::*;
use std::fs::File;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Serialize the table to `path` with a header row and no index column.
///
/// Any existing file at `path` is overwritten.
pub fn write_csv(df: &mut DataFrame, path: &str) -> Result<(), WriterError> {
    let file = File::create(path).map_err(|source| WriterError::Create {
        path: path.to_string(),
        source,
    })?;

    CsvWriter::new(file).include_header(true).finish(df)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn write_creates_file_with_header() {
        let path = temp_path("imdb_insight_test_write.csv");
        let _ = fs::remove_file(&path);

        let mut df = df!(
            "Title" => ["A", "B"],
            "Rating" => [8.0, 6.5],
        )
        .unwrap();
        write_csv(&mut df, &path).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Title,Rating"));
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn write_overwrites_existing_file() {
        let path = temp_path("imdb_insight_test_overwrite.csv");
        fs::write(&path, "stale content that should disappear").unwrap();

        let mut df = df!("Title" => ["A"]).unwrap();
        write_csv(&mut df, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn round_trip_preserves_shape() {
        let path = temp_path("imdb_insight_test_round_trip.csv");
        let _ = fs::remove_file(&path);

        let mut df = df!(
            "Title" => ["A", "B", "C"],
            "Year" => [2010, 2011, 2012],
            "Rating" => [Some(8.0), None, Some(6.0)],
        )
        .unwrap();
        write_csv(&mut df, &path).unwrap();

        let reloaded = load_csv(&path).unwrap();
        assert_eq!(reloaded.height(), df.height());
        assert_eq!(reloaded.get_column_names(), df.get_column_names());
        assert_eq!(reloaded.column("Rating").unwrap().null_count(), 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unwritable_path_is_reported() {
        let mut df = df!("Title" => ["A"]).unwrap();
        let err = write_csv(&mut df, "/nonexistent_dir/out.csv").unwrap_err();
        assert!(matches!(err, WriterError::Create { .. }));
    }
}
