// Visualizer module: drives chart generation for one table.

mod heatmap;
mod histogram;
mod style;

pub use style::{PlotStyle, style_by_name};

use crate::analyzer::correlation::correlation_matrix;
use crate::config::MAX_DISTRIBUTION_PLOTS;
use crate::model::{PlotError, Table};
use std::path::Path;
use tracing::debug;

pub struct Visualizer {
    style: PlotStyle,
}

impl Visualizer {
    pub fn new() -> Self {
        let style = style::resolve_style();
        debug!("using '{}' plot style", style.name);
        Self { style }
    }

    /// Renders the fixed plot set for one table into `output_dir`,
    /// creating the directory if needed: one distribution histogram
    /// for each of the first three numeric columns, plus a correlation
    /// heatmap when the matrix is non-empty. Any plot failure
    /// propagates; there is no retry or skip at this level.
    pub fn render_all(
        &self,
        table: &Table,
        output_dir: &Path,
        display_name: &str,
    ) -> Result<(), PlotError> {
        std::fs::create_dir_all(output_dir)?;

        for (name, values) in distribution_columns(table) {
            let output_path = output_dir.join(format!("{name}_distribution.png"));
            histogram::render_distribution(&values, &name, display_name, &self.style, &output_path)?;
        }

        let matrix = correlation_matrix(table);
        if !matrix.is_empty() {
            let output_path = output_dir.join("correlation_heatmap.png");
            heatmap::render_heatmap(&matrix, display_name, &self.style, &output_path)?;
        }

        Ok(())
    }
}

/// The first three numeric columns in table order, with their observed
/// (non-missing) values.
fn distribution_columns(table: &Table) -> Vec<(String, Vec<f64>)> {
    table
        .numeric_columns()
        .take(MAX_DISTRIBUTION_PLOTS)
        .map(|(name, values)| {
            (
                name.to_string(),
                values.iter().flatten().copied().collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CsvTableParser, Parser};

    fn table(text: &str) -> Table {
        CsvTableParser::new().parse(text).unwrap()
    }

    #[test]
    fn at_most_three_distribution_columns() {
        let table = table("a,b,c,d,e\n1,2,3,4,5\n6,7,8,9,10\n");
        let columns = distribution_columns(&table);
        let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn text_columns_are_not_plotted() {
        let table = table("region,a,b\nnorth,1,2\nsouth,3,4\n");
        let columns = distribution_columns(&table);
        let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn observed_values_exclude_missing_cells() {
        let table = table("a\n1\n\n3\n");
        let columns = distribution_columns(&table);
        assert_eq!(columns[0].1, vec![1.0, 3.0]);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn four_numeric_columns_produce_three_histograms_and_a_heatmap() {
        let table = table("a,b,c,d\n1,2,3,4\n2,3,4,5\n4,1,2,8\n");
        let dir = tempfile::tempdir().unwrap();
        Visualizer::new()
            .render_all(&table, dir.path(), "data.csv")
            .unwrap();

        let mut files: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        files.sort();
        assert_eq!(
            files,
            vec![
                "a_distribution.png",
                "b_distribution.png",
                "c_distribution.png",
                "correlation_heatmap.png",
            ]
        );
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn single_numeric_column_skips_heatmap() {
        let table = table("a,region\n1,north\n2,south\n3,east\n");
        let dir = tempfile::tempdir().unwrap();
        Visualizer::new()
            .render_all(&table, dir.path(), "data.csv")
            .unwrap();

        let files: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(files, vec!["a_distribution.png"]);
    }
}
