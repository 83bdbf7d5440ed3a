//! Rank Correlation Module
//! Spearman correlation with a Student-t significance approximation.

use polars::prelude::*;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::stats::StatsError;

/// Spearman rank correlation coefficient and its two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpearmanResult {
    pub rho: f64,
    pub p_value: f64,
}

/// Extract two numeric columns as paired samples.
///
/// Only rows where both values are present and finite contribute, so the
/// two vectors stay aligned pair by pair.
pub fn paired_numeric(
    df: &DataFrame,
    col_a: &str,
    col_b: &str,
) -> Result<(Vec<f64>, Vec<f64>), StatsError> {
    let a = df
        .column(col_a)
        .map_err(|_| StatsError::ColumnNotFound(col_a.to_string()))?
        .cast(&DataType::Float64)?;
    let b = df
        .column(col_b)
        .map_err(|_| StatsError::ColumnNotFound(col_b.to_string()))?
        .cast(&DataType::Float64)?;
    let a = a.f64()?;
    let b = b.f64()?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (va, vb) in a.into_iter().zip(b) {
        if let (Some(x), Some(y)) = (va, vb) {
            if !x.is_nan() && !y.is_nan() {
                xs.push(x);
                ys.push(y);
            }
        }
    }

    Ok((xs, ys))
}

/// Spearman rank correlation for paired samples.
///
/// Constant input yields `rho = NaN, p = NaN` rather than an error; fewer
/// than two paired observations is an error.
pub fn spearman(xs: &[f64], ys: &[f64]) -> Result<SpearmanResult, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }
    let n = xs.len();
    if n < 2 {
        return Err(StatsError::NotEnoughData { needed: 2, got: n });
    }

    let rho = pearson(&rank(xs), &rank(ys));
    if rho.is_nan() {
        return Ok(SpearmanResult {
            rho: f64::NAN,
            p_value: f64::NAN,
        });
    }

    Ok(SpearmanResult {
        rho,
        p_value: significance(rho, n),
    })
}

/// Two-sided p-value from the t-distribution approximation
/// `t = rho * sqrt((n - 2) / (1 - rho^2))`.
fn significance(rho: f64, n: usize) -> f64 {
    if n == 2 {
        return 1.0;
    }
    let denom = 1.0 - rho * rho;
    if denom <= f64::EPSILON {
        return 0.0;
    }

    let freedom = (n - 2) as f64;
    let t = rho * (freedom / denom).sqrt();
    if let Ok(dist) = StudentsT::new(0.0, 1.0, freedom) {
        2.0 * (1.0 - dist.cdf(t.abs()))
    } else {
        f64::NAN
    }
}

/// Average ranks (1-based); tied values share the mean of their positions.
fn rank(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let shared = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = shared;
        }
        i = j + 1;
    }

    ranks
}

fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_series_give_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [10.0, 20.0, 25.0, 30.0, 100.0];
        let result = spearman(&xs, &ys).unwrap();
        assert!((result.rho - 1.0).abs() < 1e-12);
        assert!(result.p_value < 1e-9);
    }

    #[test]
    fn reversed_series_give_negative_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [9.0, 7.0, 5.0, 1.0];
        let result = spearman(&xs, &ys).unwrap();
        assert!((result.rho + 1.0).abs() < 1e-12);
    }

    #[test]
    fn tied_values_use_average_ranks() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [1.0, 1.0, 2.0, 2.0];
        let result = spearman(&xs, &ys).unwrap();
        assert!((result.rho - 0.894427).abs() < 1e-6);
    }

    #[test]
    fn constant_series_yield_nan_without_failing() {
        let xs = [5.0, 5.0, 5.0];
        let ys = [1.0, 2.0, 3.0];
        let result = spearman(&xs, &ys).unwrap();
        assert!(result.rho.is_nan());
        assert!(result.p_value.is_nan());
    }

    #[test]
    fn two_observations_have_no_significance() {
        let result = spearman(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert!((result.rho - 1.0).abs() < 1e-12);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn single_observation_is_rejected() {
        let err = spearman(&[1.0], &[2.0]).unwrap_err();
        assert!(matches!(
            err,
            StatsError::NotEnoughData { needed: 2, got: 1 }
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = spearman(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, StatsError::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn pairing_skips_rows_missing_either_value() {
        let df = df!(
            "Revenue (Millions)" => [Some(100.0), None, Some(80.0), Some(60.0)],
            "Rating" => [Some(8.0), Some(7.5), None, Some(6.0)],
        )
        .unwrap();

        let (revenue, rating) = paired_numeric(&df, "Revenue (Millions)", "Rating").unwrap();
        assert_eq!(revenue, vec![100.0, 60.0]);
        assert_eq!(rating, vec![8.0, 6.0]);
    }
}
