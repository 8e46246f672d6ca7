// CSV text to in-memory Table: header handling and column typing.

use crate::model::{Column, ColumnValues, ParserError, Table};
use csv::{ReaderBuilder, StringRecord};

pub trait Parser {
    fn parse(&self, text: &str) -> Result<Table, ParserError>;
}

pub struct CsvTableParser;

impl CsvTableParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for CsvTableParser {
    fn parse(&self, text: &str) -> Result<Table, ParserError> {
        let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(String::is_empty) {
            return Err(ParserError::Empty);
        }

        // Rows must be rectangular; the csv reader rejects ragged
        // records in its default non-flexible mode.
        let mut rows: Vec<StringRecord> = Vec::new();
        for record in reader.records() {
            rows.push(record?);
        }

        let columns = headers
            .iter()
            .enumerate()
            .map(|(index, name)| build_column(name, index, &rows))
            .collect();

        Ok(Table {
            columns,
            row_count: rows.len(),
        })
    }
}

/// A column is numeric when every non-empty cell parses as a float,
/// which holds vacuously for all-empty columns. Empty cells become
/// missing values in both variants.
fn build_column(name: &str, index: usize, rows: &[StringRecord]) -> Column {
    let cells: Vec<&str> = rows
        .iter()
        .map(|row| row.get(index).unwrap_or("").trim())
        .collect();

    let numeric = cells
        .iter()
        .all(|cell| cell.is_empty() || cell.parse::<f64>().is_ok());

    let values = if numeric {
        ColumnValues::Numeric(
            cells
                .iter()
                .map(|cell| if cell.is_empty() { None } else { cell.parse().ok() })
                .collect(),
        )
    } else {
        ColumnValues::Text(
            cells
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some((*cell).to_string())
                    }
                })
                .collect(),
        )
    };

    Column {
        name: name.to_string(),
        values,
    }
}
