//! Record validation pipeline.

use crate::config::{FIELD_COUNT, MAX_DEGREES, MAX_MINUTES, MAX_SECONDS};
use crate::error::RecordError;
use crate::generator::redact_segment;
use crate::model::{EastWest, NorthSouth, RedactionResult, RowError, TraverseSegment};
use crate::numerals::Distance;
use crate::parser::RawRecord;

/// Validate and redact every record, collecting sentences and row errors.
///
/// A failing record only adds an error; the rest of the batch still runs.
pub fn process_records(records: &[RawRecord]) -> RedactionResult {
    let mut result = RedactionResult::default();

    for record in records {
        match validate_record(record) {
            Ok(segment) => result.sentences.push(redact_segment(&segment)),
            Err(error) => {
                let row_error = RowError::new(record.line, error);
                tracing::debug!("{}", row_error);
                result.errors.push(row_error);
            }
        }
    }

    tracing::debug!(
        "Processed {} record(s): {} sentence(s), {} error(s)",
        records.len(),
        result.sentences.len(),
        result.errors.len()
    );

    result
}

/// Validate a raw record into a traverse segment.
///
/// Fields are `est_i, est_f, NS, grados, minutos, segundos, EW, distancia`.
/// Checks stop at the first failure.
pub fn validate_record(record: &RawRecord) -> Result<TraverseSegment, RecordError> {
    let fields = &record.fields;
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::InvalidFormat {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let degrees = parse_integer(&fields[3], "degrees")?;
    let minutes = parse_integer(&fields[4], "minutes")?;
    let seconds = parse_integer(&fields[5], "seconds")?;

    let north_south: NorthSouth = fields[2].parse()?;
    let east_west: EastWest = fields[6].parse()?;

    let degrees = check_range(degrees, MAX_DEGREES)
        .ok_or(RecordError::DegreesOutOfRange { value: degrees })?;
    let minutes = check_range(minutes, MAX_MINUTES)
        .ok_or(RecordError::MinutesOutOfRange { value: minutes })?;
    let seconds = check_range(seconds, MAX_SECONDS)
        .ok_or(RecordError::SecondsOutOfRange { value: seconds })?;

    let distance: Distance = fields[7].parse()?;

    Ok(TraverseSegment {
        from_station: fields[0].clone(),
        to_station: fields[1].clone(),
        north_south,
        degrees,
        minutes: minutes as u8,
        seconds: seconds as u8,
        east_west,
        distance,
    })
}

fn parse_integer(value: &str, field: &'static str) -> Result<i64, RecordError> {
    value
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidInteger {
            field,
            value: value.trim().to_string(),
        })
}

/// Value as u16 when it lies in `0..=max`.
fn check_range(value: i64, max: i64) -> Option<u16> {
    if (0..=max).contains(&value) {
        u16::try_from(value).ok()
    } else {
        None
    }
}
