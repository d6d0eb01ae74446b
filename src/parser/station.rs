//! Station label parser.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::StationLabel;

/// Optional digit run, then optional letter run, whitespace allowed around both.
static STATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([0-9]+)?\s*([A-ZÁÉÍÓÚÜÑ]+)?\s*$").unwrap()
});

/// Parse a free-form station identifier such as `1`, `A`, `1A` or `1 A`.
///
/// Inputs that do not fit the pattern come back unstructured, so their
/// trimmed text is echoed when rendered.
pub fn parse_station(raw: &str) -> StationLabel {
    let Some(caps) = STATION_RE.captures(raw) else {
        return StationLabel::unstructured(raw);
    };

    // Digit runs too long for u64 are left to the verbatim fallback.
    let number = match caps.get(1).map(|m| m.as_str().parse::<u64>()) {
        Some(Ok(n)) => Some(n),
        Some(Err(_)) => return StationLabel::unstructured(raw),
        None => None,
    };
    let letters = caps.get(2).map(|m| m.as_str().to_uppercase());

    StationLabel {
        number,
        letters,
        raw: raw.trim().to_string(),
    }
}

/// Parse and render a station identifier in one step.
pub fn station_to_words(raw: &str) -> String {
    parse_station(raw).to_words()
}
