//! Record validation module.

mod validate;

pub use validate::{process_records, validate_record};
