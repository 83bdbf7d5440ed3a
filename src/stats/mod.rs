//! Stats module - grouped aggregates and rank correlation

pub mod aggregator;
pub mod correlation;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    #[error("Series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("Need at least {needed} paired observations, got {got}")]
    NotEnoughData { needed: usize, got: usize },
}
