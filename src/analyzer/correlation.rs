// Pairwise Pearson correlation over the numeric columns.

use crate::model::{CorrelationRow, Table};

/// Full symmetric correlation matrix in table column order. Empty when
/// the table has no rows or fewer than two numeric columns. The
/// diagonal is always 1.0; an undefined off-diagonal correlation
/// (no overlapping observations, or zero variance) is NaN.
pub fn correlation_matrix(table: &Table) -> Vec<CorrelationRow> {
    let numeric: Vec<(&str, &[Option<f64>])> = table.numeric_columns().collect();
    if table.row_count == 0 || numeric.len() < 2 {
        return Vec::new();
    }

    numeric
        .iter()
        .enumerate()
        .map(|(i, (name, values))| CorrelationRow {
            column: (*name).to_string(),
            entries: numeric
                .iter()
                .enumerate()
                .map(|(j, (other, other_values))| {
                    let value = if i == j {
                        1.0
                    } else {
                        pearson(values, other_values).unwrap_or(f64::NAN)
                    };
                    ((*other).to_string(), value)
                })
                .collect(),
        })
        .collect()
}

/// Pearson correlation coefficient over rows where both columns have
/// a value. Returns None when no rows overlap or either side has zero
/// variance.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();
    if pairs.is_empty() {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let numerator: f64 = pairs
        .iter()
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    let denominator_x: f64 = pairs.iter().map(|(a, _)| (a - mean_x).powi(2)).sum();
    let denominator_y: f64 = pairs.iter().map(|(_, b)| (b - mean_y).powi(2)).sum();

    let denominator = (denominator_x * denominator_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
