// Core structs: Table, AnalysisResult + pipeline error types.

use thiserror::Error;

/// One loaded input file: named columns in file order.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<Column>,
    pub row_count: usize,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

/// A column holds values of a single inferred type. Missing cells are
/// `None` in either variant.
#[derive(Debug, Clone)]
pub enum ColumnValues {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl Column {
    pub fn is_numeric(&self) -> bool {
        matches!(self.values, ColumnValues::Numeric(_))
    }

    pub fn missing_count(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(values) => values.iter().filter(|v| v.is_none()).count(),
            ColumnValues::Text(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }
}

impl Table {
    /// Numeric columns in declaration order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.columns.iter().filter_map(|column| match &column.values {
            ColumnValues::Numeric(values) => Some((column.name.as_str(), values.as_slice())),
            ColumnValues::Text(_) => None,
        })
    }
}

/// Derived statistics for one table. Column order is preserved from
/// the table throughout; the structure is read-only once produced.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub summaries: Vec<ColumnSummary>,
    /// Missing-value count for every column, numeric or not.
    pub missing_values: Vec<(String, usize)>,
    /// Full symmetric correlation matrix over the numeric columns;
    /// empty when fewer than two exist.
    pub correlation: Vec<CorrelationRow>,
}

/// Describe-style statistics for a single column, in a fixed order.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub column: String,
    pub stats: Vec<(&'static str, StatValue)>,
}

impl ColumnSummary {
    pub fn get(&self, stat: &str) -> Option<&StatValue> {
        self.stats
            .iter()
            .find(|(name, _)| *name == stat)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Number(value) => write!(f, "{value}"),
            StatValue::Text(value) => write!(f, "{value}"),
        }
    }
}

/// One row of the correlation matrix: the column plus its correlation
/// with every numeric column, self included.
#[derive(Debug, Clone)]
pub struct CorrelationRow {
    pub column: String,
    pub entries: Vec<(String, f64)>,
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read file '{path}' with any standard encoding")]
    Encoding { path: String },
}

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("no columns found")]
    Empty,
}

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Per-file failure, caught only by the orchestrator loop.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
