//! Data model types for traverse redaction.

mod result;
mod segment;
mod station;

pub use result::{DocumentRequest, RedactionResult, RowError};
pub use segment::{EastWest, NorthSouth, TraverseSegment};
pub use station::StationLabel;
