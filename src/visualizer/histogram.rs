// Distribution histogram with a Gaussian density overlay.

use super::style::PlotStyle;
use crate::model::PlotError;
use plotters::prelude::*;
use std::path::Path;

type Result<T> = core::result::Result<T, PlotError>;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const DENSITY_SAMPLES: usize = 200;

/// Renders one column's distribution: a count histogram with a kernel
/// density curve scaled to the count axis. The drawing backend lives
/// inside this call, so the canvas is released on every exit path.
pub fn render_distribution(
    values: &[f64],
    column: &str,
    display_name: &str,
    style: &PlotStyle,
    output_path: &Path,
) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::InvalidData(format!(
            "column '{column}' has no observed values"
        )));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Degenerate range (constant column): widen so the bar is visible.
    let (min, max) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let bins = sturges_bins(values.len());
    let counts = bin_counts(values, min, max, bins);
    let bin_width = (max - min) / bins as f64;
    let y_max = counts.iter().copied().max().unwrap_or(1).max(1) as f64 * 1.1;

    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&style.background)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let caption = format!("Distribution of {column} in {display_name}");
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(min..max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(column)
        .y_desc("Frequency")
        .light_line_style(&style.grid)
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(bin, &count)| {
            let x0 = min + bin as f64 * bin_width;
            let x1 = x0 + bin_width;
            Rectangle::new([(x0, 0.0), (x1, count as f64)], style.series.filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if let Some(density) = density_curve(values, min, max) {
        // One observation's density integrates to one bin width on
        // the count axis.
        let scale = values.len() as f64 * bin_width;
        chart
            .draw_series(LineSeries::new(
                density.into_iter().map(|(x, d)| (x, d * scale)),
                style.accent.stroke_width(2),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

/// Sturges' rule, minimum one bin.
fn sturges_bins(n: usize) -> usize {
    ((n as f64).log2().ceil() as usize + 1).max(1)
}

fn bin_counts(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<usize> {
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let bin = (((value - min) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }
    counts
}

/// Gaussian kernel density sampled across the plot range, bandwidth by
/// Scott's rule. None when the data has zero spread, where the
/// bandwidth collapses.
fn density_curve(values: &[f64], min: f64, max: f64) -> Option<Vec<(f64, f64)>> {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let bandwidth = variance.sqrt() * n.powf(-0.2);
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        return None;
    }

    let step = (max - min) / (DENSITY_SAMPLES - 1) as f64;
    Some(
        (0..DENSITY_SAMPLES)
            .map(|i| {
                let x = min + i as f64 * step;
                let density = values
                    .iter()
                    .map(|v| gaussian((x - v) / bandwidth))
                    .sum::<f64>()
                    / (n * bandwidth);
                (x, density)
            })
            .collect(),
    )
}

fn gaussian(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * std::f64::consts::PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::style_by_name;

    #[test]
    fn sturges_grows_slowly() {
        assert_eq!(sturges_bins(1), 1);
        assert_eq!(sturges_bins(8), 4);
        assert_eq!(sturges_bins(100), 8);
    }

    #[test]
    fn bin_counts_cover_all_values() {
        let values = [1.0, 1.5, 2.0, 3.0, 4.0];
        let counts = bin_counts(&values, 1.0, 4.0, 3);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
        // The maximum lands in the last bin, not past it.
        assert_eq!(counts[2], 2);
    }

    #[test]
    fn density_integrates_to_roughly_one() {
        let values = [1.0, 2.0, 2.5, 3.0, 4.0, 4.5, 5.0];
        let curve = density_curve(&values, -5.0, 11.0).unwrap();
        let step = curve[1].0 - curve[0].0;
        let integral: f64 = curve.iter().map(|(_, d)| d * step).sum();
        assert!((integral - 1.0).abs() < 0.05, "integral was {integral}");
    }

    #[test]
    fn density_is_skipped_for_constant_data() {
        assert!(density_curve(&[2.0, 2.0, 2.0], 1.5, 2.5).is_none());
    }

    #[test]
    fn empty_values_are_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let style = style_by_name("ggplot").unwrap();
        let result =
            render_distribution(&[], "x", "data.csv", &style, &dir.path().join("x.png"));
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn renders_histogram_png() {
        let dir = tempfile::tempdir().unwrap();
        let style = style_by_name("seaborn").unwrap();
        let path = dir.path().join("x_distribution.png");
        render_distribution(&[1.0, 2.0, 2.0, 3.0, 5.0], "x", "data.csv", &style, &path).unwrap();
        assert!(path.exists());
    }
}
