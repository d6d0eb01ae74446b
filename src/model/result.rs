//! Batch output: rendered sentences, row errors and the document request.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::config::DEFAULT_TITLE;
use crate::error::{RecordError, RedactionError, Result};

/// A row-local failure tagged with its 1-based line/row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line (line-based input) or data row (CSV input).
    pub line: usize,
    pub error: RecordError,
}

impl RowError {
    pub fn new(line: usize, error: RecordError) -> Self {
        Self { line, error }
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

impl Serialize for RowError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RowError", 3)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("code", &self.error.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Sentences and errors from one batch, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedactionResult {
    /// One sentence per valid record.
    pub sentences: Vec<String>,
    /// One entry per rejected record.
    pub errors: Vec<RowError>,
}

impl RedactionResult {
    /// Whether every record was rendered.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages as displayed to users.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Build the document request for this batch.
    ///
    /// Fails with [`RedactionError::EmptyResult`] when nothing was rendered.
    pub fn into_document(self, title: Option<&str>) -> Result<DocumentRequest> {
        DocumentRequest::new(title, self.sentences)
    }
}

/// Heading plus ordered paragraphs handed to a document writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    pub title: String,
    pub sentences: Vec<String>,
}

impl DocumentRequest {
    /// Create a document request. A missing or blank title falls back to
    /// [`DEFAULT_TITLE`].
    pub fn new(title: Option<&str>, sentences: Vec<String>) -> Result<Self> {
        if sentences.is_empty() {
            return Err(RedactionError::EmptyResult);
        }

        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string();

        Ok(Self { title, sentences })
    }
}
