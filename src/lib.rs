//! redaccion-topografica - Spanish prose for land-survey traverses.
//!
//! Turns traverse records (station pair, quadrant bearing in degrees,
//! minutes and seconds, distance) into report-ready Spanish sentences, and
//! packages them as a document request for a document writer.
//!
//! # Example
//!
//! ```
//! use redaccion_topografica::redact_lines;
//!
//! let result = redact_lines("1, 2, S, 46, 35, 19, E, 20.50");
//! assert_eq!(
//!     result.sentences[0],
//!     "De la estación uno a la estación dos con una distancia de veinte punto cincuenta \
//!      metros y un rumbo sur cuarenta y seis grados, treinta y cinco minutos diecinueve \
//!      segundos este."
//! );
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod numerals;
pub mod parser;
pub mod validation;

use std::path::Path;

// Re-exports for convenience
pub use config::{DocumentStyle, InputFormat};
pub use error::{ErrorCode, NumeralError, RecordError, RedactionError, Result};
pub use generator::{quadrant_word, redact_segment, DocumentWriter, PlainTextWriter};
pub use model::{DocumentRequest, RedactionResult, RowError, StationLabel, TraverseSegment};
pub use numerals::{decimal_to_words, integer_to_words};
pub use parser::{parse_station, station_to_words};
pub use validation::process_records;

/// Redact a newline-delimited, comma-separated text block.
pub fn redact_lines(text: &str) -> RedactionResult {
    process_records(&parser::parse_lines(text))
}

/// Redact CSV bytes with a header row.
///
/// Fails as a whole when required columns are missing or the table cannot
/// be read; individual bad rows are reported in the result.
pub fn redact_csv(bytes: &[u8]) -> Result<RedactionResult> {
    let records = parser::parse_csv_bytes(bytes)?;
    Ok(process_records(&records))
}

/// Redact the records in a file, picking the format from its extension.
pub fn redact_file(input_path: &Path) -> Result<RedactionResult> {
    redact_file_as(input_path, InputFormat::from_path(input_path))
}

/// Redact the records in a file using the given input format.
pub fn redact_file_as(input_path: &Path, format: InputFormat) -> Result<RedactionResult> {
    let bytes = std::fs::read(input_path)?;
    tracing::debug!("Read {} byte(s) from {}", bytes.len(), input_path.display());

    match format {
        InputFormat::Csv => redact_csv(&bytes),
        InputFormat::Lines => Ok(redact_lines(&parser::decode_bytes(&bytes))),
    }
}
