// Describe-style column summaries.

use crate::model::{Column, ColumnSummary, ColumnValues, StatValue, Table};
use std::cmp::Ordering;

/// Summarises every numeric column with count/mean/std/min/quartiles/
/// max. Text columns are only summarised (count/unique/top/freq) when
/// the table has no numeric columns at all, matching how mixed-type
/// tables crowd text columns out of the statistics.
pub fn summarize(table: &Table) -> Vec<ColumnSummary> {
    let has_numeric = table.columns.iter().any(Column::is_numeric);

    table
        .columns
        .iter()
        .filter_map(|column| match &column.values {
            ColumnValues::Numeric(values) => Some(ColumnSummary {
                column: column.name.clone(),
                stats: numeric_stats(values),
            }),
            ColumnValues::Text(values) if !has_numeric => Some(ColumnSummary {
                column: column.name.clone(),
                stats: text_stats(values),
            }),
            ColumnValues::Text(_) => None,
        })
        .collect()
}

fn numeric_stats(values: &[Option<f64>]) -> Vec<(&'static str, StatValue)> {
    let mut observed: Vec<f64> = values.iter().flatten().copied().collect();
    observed.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let count = observed.len();
    let mean = if count > 0 {
        observed.iter().sum::<f64>() / count as f64
    } else {
        f64::NAN
    };

    vec![
        ("count", StatValue::Number(count as f64)),
        ("mean", StatValue::Number(mean)),
        ("std", StatValue::Number(sample_std(&observed, mean))),
        (
            "min",
            StatValue::Number(observed.first().copied().unwrap_or(f64::NAN)),
        ),
        ("25%", StatValue::Number(quantile(&observed, 0.25))),
        ("50%", StatValue::Number(quantile(&observed, 0.5))),
        ("75%", StatValue::Number(quantile(&observed, 0.75))),
        (
            "max",
            StatValue::Number(observed.last().copied().unwrap_or(f64::NAN)),
        ),
    ]
}

/// Sample standard deviation; NaN below two observations.
fn sample_std(observed: &[f64], mean: f64) -> f64 {
    if observed.len() < 2 {
        return f64::NAN;
    }
    let sum_sq: f64 = observed.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (observed.len() - 1) as f64).sqrt()
}

/// Quantile with linear interpolation between closest ranks; the
/// input must already be sorted.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = position - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

fn text_stats(values: &[Option<String>]) -> Vec<(&'static str, StatValue)> {
    let observed: Vec<&str> = values.iter().flatten().map(String::as_str).collect();

    // First-seen order so ties resolve deterministically.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in &observed {
        match counts.iter_mut().find(|(seen, _)| seen == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut top: Option<(&str, usize)> = None;
    for &(value, n) in &counts {
        if top.is_none_or(|(_, best)| n > best) {
            top = Some((value, n));
        }
    }

    vec![
        ("count", StatValue::Number(observed.len() as f64)),
        ("unique", StatValue::Number(counts.len() as f64)),
        (
            "top",
            top.map_or(StatValue::Number(f64::NAN), |(value, _)| {
                StatValue::Text(value.to_string())
            }),
        ),
        (
            "freq",
            top.map_or(StatValue::Number(f64::NAN), |(_, n)| {
                StatValue::Number(n as f64)
            }),
        ),
    ]
}
