//! Group Aggregation Module
//! Grouped mean statistics over a single value column.

use polars::prelude::*;
use std::collections::HashMap;

use crate::stats::StatsError;

/// Ordering applied to the aggregated groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOrdering {
    /// Largest mean first; ties keep first-encountered group order.
    MeanDescending,
    /// Group key ascending, numerically when the keys parse as numbers.
    KeyAscending,
}

/// Mean of the value column within one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

/// Group rows by `group_col` and average `value_col` within each group.
///
/// Rows with a missing group key or a missing/NaN value do not contribute;
/// groups with no contributing rows are absent from the result.
pub fn group_mean(
    df: &DataFrame,
    group_col: &str,
    value_col: &str,
    ordering: GroupOrdering,
) -> Result<Vec<GroupMean>, StatsError> {
    let groups = df
        .column(group_col)
        .map_err(|_| StatsError::ColumnNotFound(group_col.to_string()))?;
    let values = df
        .column(value_col)
        .map_err(|_| StatsError::ColumnNotFound(value_col.to_string()))?;
    let values = values.cast(&DataType::Float64)?;
    let values = values.f64()?;

    let mut first_seen: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (f64, usize)> = HashMap::new();

    for i in 0..df.height() {
        let Ok(key) = groups.get(i) else { continue };
        if key.is_null() {
            continue;
        }
        let Some(value) = values.get(i) else { continue };
        if value.is_nan() {
            continue;
        }

        let key = key.to_string().trim_matches('"').to_string();
        if !totals.contains_key(&key) {
            first_seen.push(key.clone());
        }
        let entry = totals.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let mut result: Vec<GroupMean> = first_seen
        .into_iter()
        .map(|key| {
            let (sum, count) = totals[&key];
            GroupMean {
                mean: sum / count as f64,
                count,
                key,
            }
        })
        .collect();

    match ordering {
        GroupOrdering::MeanDescending => {
            // Stable sort, so equal means stay in first-encountered order.
            result.sort_by(|a, b| {
                b.mean
                    .partial_cmp(&a.mean)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        GroupOrdering::KeyAscending => {
            result.sort_by(|a, b| compare_keys(&a.key, &b.key));
        }
    }

    Ok(result)
}

/// Numeric comparison when both keys parse as numbers, lexicographic otherwise.
fn compare_keys(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => a.cmp(b),
    }
}
