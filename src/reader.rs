// Robust file reading: encoding detection with ordered fallback.

use crate::model::{ReadError, Table};
use crate::parser::{CsvTableParser, Parser};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::path::Path;
use tracing::debug;

pub trait TableReader {
    fn read(&self, path: &Path) -> Result<Table, ReadError>;
}

/// Reads a whole file into memory and tries candidate encodings in
/// order until one of them decodes and parses cleanly.
pub struct RobustCsvReader {
    parser: CsvTableParser,
}

impl RobustCsvReader {
    pub fn new() -> Self {
        Self {
            parser: CsvTableParser::new(),
        }
    }

    fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
        // The detector has nothing to go on for empty input; default
        // to UTF-8.
        if bytes.is_empty() {
            return UTF_8;
        }
        let mut detector = EncodingDetector::new();
        detector.feed(bytes, true);
        detector.guess(None, true)
    }
}

impl TableReader for RobustCsvReader {
    fn read(&self, path: &Path) -> Result<Table, ReadError> {
        let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        // latin-1, iso-8859-1 and cp1252 all resolve to windows-1252
        // under WHATWG labels. Trying an encoding twice is harmless,
        // so the list is not deduplicated.
        let candidates = [Self::detect_encoding(&bytes), UTF_8, WINDOWS_1252];

        for encoding in candidates {
            let (text, _, had_errors) = encoding.decode(&bytes);
            if had_errors {
                debug!(
                    "decoding as {} produced malformed sequences, trying next candidate",
                    encoding.name()
                );
                continue;
            }
            match self.parser.parse(&text) {
                Ok(table) => return Ok(table),
                Err(e) => debug!("parsing as {} failed: {e}", encoding.name()),
            }
        }

        Err(ReadError::Encoding {
            path: path.display().to_string(),
        })
    }
}
