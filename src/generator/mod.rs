//! Sentence and document generation.

mod document;
mod quadrant;
mod sentence;

pub use document::{DocumentWriter, PlainTextWriter};
pub use quadrant::quadrant_word;
pub use sentence::redact_segment;
