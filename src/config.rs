// Fixed pipeline constants. There is no runtime configuration; every
// threshold below is compiled in.

/// File extension picked up by discovery.
pub const DATA_FILE_EXTENSION: &str = "csv";

/// Suffix appended to an input file's stem to form its output directory.
pub const OUTPUT_DIR_SUFFIX: &str = "_analysis";

/// File name of the markdown report inside the output directory.
pub const REPORT_FILE_NAME: &str = "analysis_report.md";

/// At most this many distribution histograms are rendered per file.
pub const MAX_DISTRIBUTION_PLOTS: usize = 3;

/// Absolute correlation above this is called out in the narrative.
pub const CORRELATION_THRESHOLD: f64 = 0.5;

/// Image extensions recognised when listing visualizations in the report.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Chart palette applied when available, and the one used otherwise.
pub const PREFERRED_PLOT_STYLE: &str = "seaborn";
pub const FALLBACK_PLOT_STYLE: &str = "ggplot";
