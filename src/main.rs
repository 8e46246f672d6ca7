mod analyzer;
mod config;
mod discovery;
mod model;
mod narrator;
mod parser;
mod reader;
mod reporter;
mod visualizer;

use analyzer::{Analyzer, AnalyzerImpl};
use config::OUTPUT_DIR_SUFFIX;
use model::PipelineError;
use reader::{RobustCsvReader, TableReader};
use std::path::{Path, PathBuf};
use tracing::{error, info};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let files = discovery::find_data_files(Path::new("."));
    if files.is_empty() {
        info!("No CSV files found in the current directory.");
        return;
    }

    info!("Found {} CSV files:", files.len());
    for file in &files {
        info!("- {}", file.display());
    }

    let reader = RobustCsvReader::new();
    let analyzer = AnalyzerImpl::new();
    let visualizer = visualizer::Visualizer::new();

    // Per-file failure isolation: a failed file is logged and skipped,
    // the loop always finishes, and the process exits cleanly.
    for file in &files {
        info!("Processing {}...", file.display());
        match process_file(file, &reader, &analyzer, &visualizer) {
            Ok(output_dir) => info!(
                "Analysis complete for {}. Results saved in {}",
                file.display(),
                output_dir.display()
            ),
            Err(e) => error!("Error processing {}: {e}", file.display()),
        }
    }
}

/// Runs the whole pipeline for one input file and returns its output
/// directory: read, analyze, narrate, visualize, report.
fn process_file(
    path: &Path,
    reader: &RobustCsvReader,
    analyzer: &AnalyzerImpl,
    visualizer: &visualizer::Visualizer,
) -> Result<PathBuf, PipelineError> {
    let display_name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned();
    let output_dir = output_dir_for(path);

    let table = reader.read(path)?;
    let analysis = analyzer.analyze(&table);
    let narrative = narrator::generate_narrative(&analysis);
    visualizer.render_all(&table, &output_dir, &display_name)?;
    reporter::write_report(&analysis, &output_dir, &display_name, &narrative)?;

    Ok(output_dir)
}

/// `sales.csv` gets its output under `sales_analysis/`, next to the
/// input file.
fn output_dir_for(path: &Path) -> PathBuf {
    let mut dir = path.with_extension("").into_os_string();
    dir.push(OUTPUT_DIR_SUFFIX);
    PathBuf::from(dir)
}
