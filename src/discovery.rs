// Input discovery: data files in the working directory.

use crate::config::DATA_FILE_EXTENSION;
use std::path::{Path, PathBuf};

/// Lists files with the expected data extension directly under `dir`,
/// sorted by path for a deterministic processing order. An unreadable
/// directory yields an empty list rather than an error.
pub fn find_data_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == DATA_FILE_EXTENSION)
        })
        .collect();
    files.sort();
    files
}
