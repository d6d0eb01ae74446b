//! Input readers: station labels, line-based text and CSV tables.

mod records;
mod station;
mod tabular;

pub use records::{parse_lines, split_fields, RawRecord};
pub use station::{parse_station, station_to_words};
pub use tabular::{decode_bytes, parse_csv, parse_csv_bytes};
