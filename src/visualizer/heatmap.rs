// Annotated correlation heatmap with a diverging color scale.

use super::style::PlotStyle;
use crate::model::{CorrelationRow, PlotError};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

type Result<T> = core::result::Result<T, PlotError>;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 1000;

/// Renders the correlation matrix as an annotated heatmap. Cell colors
/// diverge around zero; the value itself is printed in each cell. The
/// backend is scoped to this call, releasing the canvas on success and
/// failure alike.
pub fn render_heatmap(
    matrix: &[CorrelationRow],
    display_name: &str,
    style: &PlotStyle,
    output_path: &Path,
) -> Result<()> {
    if matrix.is_empty() {
        return Err(PlotError::InvalidData(
            "correlation matrix is empty".to_string(),
        ));
    }

    let names: Vec<&str> = matrix.iter().map(|row| row.column.as_str()).collect();
    let n = names.len() as u32;

    // (column, flipped row, value): row 0 of the matrix sits at the
    // top of the chart, matching the usual matrix orientation.
    let mut cells: Vec<(u32, u32, f64)> = Vec::new();
    for (row_index, row) in matrix.iter().enumerate() {
        for (col_index, (_, value)) in row.entries.iter().enumerate() {
            cells.push((
                col_index as u32,
                n - 1 - row_index as u32,
                *value,
            ));
        }
    }

    let root = BitMapBackend::new(output_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&style.grid)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let caption = format!("Correlation Heatmap for {display_name}");
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(120)
        .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let x_names = names.clone();
    let y_names = names.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_label_formatter(&move |segment| segment_label(segment, &x_names, false))
        .y_label_formatter(&move |segment| segment_label(segment, &y_names, true))
        .label_style(("sans-serif", 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(cells.iter().map(|&(col, row, value)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(col), SegmentValue::Exact(row)),
                    (SegmentValue::Exact(col + 1), SegmentValue::Exact(row + 1)),
                ],
                diverging_color(value).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let annotation = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(cells.iter().map(|&(col, row, value)| {
            Text::new(
                format!("{value:.2}"),
                (SegmentValue::CenterOf(col), SegmentValue::CenterOf(row)),
                annotation.clone(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present().map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

fn segment_label(segment: &SegmentValue<u32>, names: &[&str], flipped: bool) -> String {
    let index = match segment {
        SegmentValue::CenterOf(value) | SegmentValue::Exact(value) => *value as usize,
        SegmentValue::Last => return String::new(),
    };
    let index = if flipped {
        match names.len().checked_sub(index + 1) {
            Some(i) => i,
            None => return String::new(),
        }
    } else {
        index
    };
    names.get(index).map(|s| (*s).to_string()).unwrap_or_default()
}

/// Diverging blue-white-red scale clamped to [-1, 1] and centered at
/// zero. NaN cells render gray.
fn diverging_color(value: f64) -> RGBColor {
    if value.is_nan() {
        return RGBColor(180, 180, 180);
    }
    let value = value.clamp(-1.0, 1.0);
    let white = RGBColor(255, 255, 255);
    let cool = RGBColor(59, 76, 192);
    let warm = RGBColor(180, 4, 38);
    if value < 0.0 {
        lerp(white, cool, -value)
    } else {
        lerp(white, warm, value)
    }
}

fn lerp(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}
