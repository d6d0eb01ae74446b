//! Document assembly from rendered sentences.

use std::fmt::Write;

use crate::config::DocumentStyle;
use crate::error::Result;
use crate::model::DocumentRequest;

/// Serializes a document request into a downloadable file body.
///
/// Office-document containers live outside this crate; implementors only
/// receive the heading and the ready-to-insert paragraphs.
pub trait DocumentWriter {
    /// Produce the file contents.
    fn write_document(&self, request: &DocumentRequest, style: &DocumentStyle) -> Result<Vec<u8>>;

    /// File extension (without dot) for the produced file.
    fn file_extension(&self) -> &'static str;
}

/// Text buffer with heading and paragraph helpers.
struct TextBuilder {
    /// Output buffer.
    buffer: String,
    /// Number of paragraphs written.
    paragraphs: usize,
}

impl TextBuilder {
    /// Create an empty builder.
    fn new() -> Self {
        Self {
            buffer: String::new(),
            paragraphs: 0,
        }
    }

    /// Take the generated text.
    fn take_output(self) -> String {
        self.buffer
    }

    /// Number of paragraphs written.
    fn paragraph_count(&self) -> usize {
        self.paragraphs
    }

    /// Write a comment line.
    fn write_comment(&mut self, comment: &str) {
        writeln!(self.buffer, "# {}", comment).unwrap();
    }

    /// Write a level-1 heading, underlined to its width.
    fn write_heading(&mut self, title: &str) {
        writeln!(self.buffer, "{}", title).unwrap();
        writeln!(self.buffer, "{}", "=".repeat(title.chars().count())).unwrap();
        writeln!(self.buffer).unwrap();
    }

    /// Write a paragraph followed by a blank line.
    fn write_paragraph(&mut self, text: &str) {
        writeln!(self.buffer, "{}", text).unwrap();
        writeln!(self.buffer).unwrap();
        self.paragraphs += 1;
    }
}

/// Plain UTF-8 text: one heading, then one paragraph per sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextWriter;

impl DocumentWriter for PlainTextWriter {
    fn write_document(&self, request: &DocumentRequest, style: &DocumentStyle) -> Result<Vec<u8>> {
        let mut builder = TextBuilder::new();
        builder.write_comment(&format!("font: {} {}pt", style.font_name, style.font_size_pt));
        builder.write_heading(&request.title);
        for sentence in &request.sentences {
            builder.write_paragraph(sentence);
        }

        tracing::debug!(
            "Wrote document '{}' with {} paragraph(s)",
            request.title,
            builder.paragraph_count()
        );

        Ok(builder.take_output().into_bytes())
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}
