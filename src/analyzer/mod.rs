// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod correlation;
pub mod summary;

use crate::model::{AnalysisResult, Table};

/// Trait defining the interface for a table analyzer.
pub trait Analyzer {
    fn analyze(&self, table: &Table) -> AnalysisResult;
}

/// Implementation of the table analyzer.
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for AnalyzerImpl {
    /// Derives summary statistics, per-column missing counts and the
    /// numeric correlation matrix. Tolerates empty tables and tables
    /// without numeric columns; never fails.
    fn analyze(&self, table: &Table) -> AnalysisResult {
        let summaries = summary::summarize(table);

        let missing_values = table
            .columns
            .iter()
            .map(|column| (column.name.clone(), column.missing_count()))
            .collect();

        let correlation = correlation::correlation_matrix(table);

        AnalysisResult {
            summaries,
            missing_values,
            correlation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CsvTableParser, Parser};

    fn analyze(text: &str) -> AnalysisResult {
        let table = CsvTableParser::new().parse(text).unwrap();
        AnalyzerImpl::new().analyze(&table)
    }

    #[test]
    fn missing_counts_cover_every_column() {
        let analysis = analyze("price,region\n10,\n20,south\n,north\n");
        assert_eq!(
            analysis.missing_values,
            vec![("price".to_string(), 1), ("region".to_string(), 1)]
        );
    }

    #[test]
    fn correlation_empty_below_two_numeric_columns() {
        let analysis = analyze("price,region\n10,north\n20,south\n");
        assert!(analysis.correlation.is_empty());
    }

    #[test]
    fn empty_table_analyzes_cleanly() {
        let analysis = analyze("a,b\n");
        assert_eq!(analysis.missing_values.len(), 2);
        assert!(analysis.correlation.is_empty());
    }
}
