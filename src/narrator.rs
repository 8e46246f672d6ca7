// Narrative generation: missingness, distribution and correlation lines.

use crate::config::CORRELATION_THRESHOLD;
use crate::model::AnalysisResult;

/// Builds the ordered narrative lines for one analysis. Deterministic:
/// the analysis' own column order drives every section.
pub fn generate_narrative(analysis: &AnalysisResult) -> Vec<String> {
    let mut narrative = Vec::new();

    let missing_total: usize = analysis.missing_values.iter().map(|(_, count)| count).sum();
    if missing_total > 0 {
        narrative.push(format!(
            "There are {missing_total} missing values across the dataset."
        ));
    } else {
        narrative.push("There are no missing values in the dataset.".to_string());
    }

    narrative.push("\n### Data Distribution Insights".to_string());
    for summary in &analysis.summaries {
        let mean = summary
            .get("mean")
            .map_or_else(|| "N/A".to_string(), ToString::to_string);
        let std = summary
            .get("std")
            .map_or_else(|| "N/A".to_string(), ToString::to_string);
        narrative.push(format!(
            "- Column '{}' has a mean of {mean} and a standard deviation of {std}.",
            summary.column
        ));
    }

    if !analysis.correlation.is_empty() {
        narrative.push("\n### Correlation Insights".to_string());
        for row in &analysis.correlation {
            for (other, value) in &row.entries {
                // Self-pairs clear the threshold at 1.0 and are
                // reported like any other pair, as are both orderings
                // of a symmetric pair.
                if value.abs() > CORRELATION_THRESHOLD {
                    narrative.push(format!(
                        "- Strong correlation between '{}' and '{other}': {value:.2}",
                        row.column
                    ));
                }
            }
        }
    }

    narrative
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analyzer, AnalyzerImpl};
    use crate::parser::{CsvTableParser, Parser};

    fn narrative_for(text: &str) -> Vec<String> {
        let table = CsvTableParser::new().parse(text).unwrap();
        generate_narrative(&AnalyzerImpl::new().analyze(&table))
    }

    #[test]
    fn reports_zero_missing_values() {
        let narrative = narrative_for("a,b\n1,2\n3,4\n");
        assert_eq!(narrative[0], "There are no missing values in the dataset.");
    }

    #[test]
    fn reports_exact_missing_count() {
        let narrative = narrative_for("a,b\n1,\n,4\n,\n");
        assert_eq!(
            narrative[0],
            "There are 4 missing values across the dataset."
        );
    }

    #[test]
    fn distribution_line_per_summarised_column() {
        let narrative = narrative_for("a,b\n1,2\n3,4\n");
        assert_eq!(narrative[1], "\n### Data Distribution Insights");
        assert!(narrative[2].starts_with("- Column 'a' has a mean of 2 and a standard deviation of"));
        assert!(narrative[3].starts_with("- Column 'b' has a mean of 3"));
    }

    #[test]
    fn text_only_tables_narrate_not_applicable_stats() {
        let narrative = narrative_for("region\nnorth\nsouth\n");
        assert!(
            narrative
                .iter()
                .any(|line| line
                    == "- Column 'region' has a mean of N/A and a standard deviation of N/A.")
        );
    }

    #[test]
    fn strong_correlations_include_self_and_both_orderings() {
        let narrative = narrative_for("a,b\n1,2\n2,4\n3,6\n");
        let strong: Vec<&String> = narrative
            .iter()
            .filter(|line| line.starts_with("- Strong correlation"))
            .collect();
        // (a,a), (a,b), (b,a), (b,b) all sit above the threshold.
        assert_eq!(strong.len(), 4);
        assert!(strong.contains(&&"- Strong correlation between 'a' and 'a': 1.00".to_string()));
        assert!(strong.contains(&&"- Strong correlation between 'a' and 'b': 1.00".to_string()));
        assert!(strong.contains(&&"- Strong correlation between 'b' and 'a': 1.00".to_string()));
    }

    #[test]
    fn weak_correlations_are_not_narrated() {
        // Near-zero relationship between a and b.
        let narrative = narrative_for("a,b\n1,5\n2,1\n3,8\n4,2\n5,6\n");
        let cross: Vec<&String> = narrative
            .iter()
            .filter(|line| line.contains("'a' and 'b'") || line.contains("'b' and 'a'"))
            .collect();
        assert!(cross.is_empty());
    }

    #[test]
    fn no_correlation_section_without_matrix() {
        let narrative = narrative_for("a,region\n1,north\n2,south\n");
        assert!(!narrative.iter().any(|line| line.contains("Correlation")));
    }
}
