// Markdown report assembly and writing.

use crate::config::{IMAGE_EXTENSIONS, REPORT_FILE_NAME};
use crate::model::AnalysisResult;
use std::path::Path;

/// Writes `analysis_report.md` into `output_dir`, overwriting any
/// previous report. Section order is fixed: narrative, descriptive
/// statistics, missing values, correlation matrix, visualizations.
pub fn write_report(
    analysis: &AnalysisResult,
    output_dir: &Path,
    display_name: &str,
    narrative: &[String],
) -> std::io::Result<()> {
    let report = render_report(analysis, output_dir, display_name, narrative);
    std::fs::write(output_dir.join(REPORT_FILE_NAME), report)
}

fn render_report(
    analysis: &AnalysisResult,
    output_dir: &Path,
    display_name: &str,
    narrative: &[String],
) -> String {
    let mut report = String::new();

    report.push_str(&format!("# Data Analysis Report for {display_name}\n\n"));

    report.push_str("## Narrative Analysis\n");
    report.push_str(&narrative.join("\n"));
    report.push('\n');

    report.push_str("\n## Descriptive Statistics\n");
    for summary in &analysis.summaries {
        report.push_str(&format!("### {}\n", summary.column));
        for (stat, value) in &summary.stats {
            report.push_str(&format!("- {stat}: {value}\n"));
        }
    }

    report.push_str("\n## Missing Values\n");
    for (column, count) in &analysis.missing_values {
        report.push_str(&format!("- {column}: {count}\n"));
    }

    report.push_str("\n## Correlation Matrix\n```\n");
    for row in &analysis.correlation {
        let entries: Vec<String> = row
            .entries
            .iter()
            .map(|(name, value)| format!("'{name}': {value}"))
            .collect();
        report.push_str(&format!("{}: {{{}}}\n", row.column, entries.join(", ")));
    }
    report.push_str("```\n");

    report.push_str("\n## Visualizations\n");
    for image in list_images(output_dir) {
        report.push_str(&format!("![{image}]({image})\n"));
    }

    report
}

/// Image files in the output directory, in directory-listing order.
/// The listing order is whatever the filesystem yields.
fn list_images(output_dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(output_dir) else {
        return Vec::new();
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| {
            Path::new(name)
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
        })
        .collect()
}
