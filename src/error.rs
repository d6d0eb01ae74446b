//! Error types for traverse redaction.

use serde::Serialize;
use thiserror::Error;

/// Error classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    /// Row does not have the expected field count (E100)
    StructuralError = 100,
    /// Numeric field is not a valid number (E101)
    FieldParseError = 101,
    /// Angle component outside its legal bounds (E102)
    RangeError = 102,
    /// Quadrant code not in the accepted set (E103)
    EnumError = 103,
    /// Tabular input lacks required columns (E200)
    BatchHeaderError = 200,
    /// Batch produced no sentences (E201)
    EmptyResultError = 201,
    /// Tabular input could not be read as CSV (E202)
    CsvError = 202,
    /// Input could not be read (E300)
    IoError = 300,
}

/// Failure to render a numeral in words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error("'{value}' is not a valid number")]
    InvalidNumber { value: String },

    #[error("{value} is too large to write out in words")]
    TooLarge { value: String },
}

/// Row-local validation failure. Recorded against its line, never aborts a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid format ({expected} fields expected)")]
    InvalidFormat { expected: usize, found: usize },

    #[error("{field} must be an integer, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid distance: {0}")]
    InvalidDistance(#[from] NumeralError),

    #[error("NS must be N or S")]
    InvalidNorthSouth { value: String },

    #[error("EW must be E, W, or O")]
    InvalidEastWest { value: String },

    #[error("degrees out of range (0–359)")]
    DegreesOutOfRange { value: i64 },

    #[error("minutes out of range (0–59)")]
    MinutesOutOfRange { value: i64 },

    #[error("seconds out of range (0–59)")]
    SecondsOutOfRange { value: i64 },
}

impl RecordError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RecordError::InvalidFormat { .. } => ErrorCode::StructuralError,
            RecordError::InvalidInteger { .. } => ErrorCode::FieldParseError,
            RecordError::InvalidDistance(_) => ErrorCode::FieldParseError,
            RecordError::InvalidNorthSouth { .. } => ErrorCode::EnumError,
            RecordError::InvalidEastWest { .. } => ErrorCode::EnumError,
            RecordError::DegreesOutOfRange { .. } => ErrorCode::RangeError,
            RecordError::MinutesOutOfRange { .. } => ErrorCode::RangeError,
            RecordError::SecondsOutOfRange { .. } => ErrorCode::RangeError,
        }
    }
}

/// Batch-level error: the whole call fails with a single error.
#[derive(Debug, Error)]
pub enum RedactionError {
    #[error("Invalid headers. Expected: {expected}")]
    InvalidHeaders { expected: String, found: Vec<String> },

    #[error("No sentences were generated; check the input records")]
    EmptyResult,

    #[error("Could not read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RedactionError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RedactionError::InvalidHeaders { .. } => ErrorCode::BatchHeaderError,
            RedactionError::EmptyResult => ErrorCode::EmptyResultError,
            RedactionError::Csv(_) => ErrorCode::CsvError,
            RedactionError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for batch operations.
pub type Result<T> = std::result::Result<T, RedactionError>;
