//! Sentence redaction for a single traverse segment.

use crate::model::TraverseSegment;
use crate::numerals::small_to_words;
use crate::parser::station_to_words;

use super::quadrant::quadrant_word;

/// Render one segment as a Spanish sentence.
///
/// ```
/// use redaccion_topografica::generator::redact_segment;
/// use redaccion_topografica::model::{EastWest, NorthSouth, TraverseSegment};
///
/// let segment = TraverseSegment {
///     from_station: "1".to_string(),
///     to_station: "2".to_string(),
///     north_south: NorthSouth::South,
///     degrees: 46,
///     minutes: 35,
///     seconds: 19,
///     east_west: EastWest::East,
///     distance: "20.50".parse().unwrap(),
/// };
/// assert!(redact_segment(&segment).starts_with("De la estación uno a la estación dos"));
/// ```
pub fn redact_segment(segment: &TraverseSegment) -> String {
    format!(
        "De la estación {} a la estación {} con una distancia de {} metros y un rumbo {} {} {}, {} {} {} {} {}.",
        station_to_words(&segment.from_station),
        station_to_words(&segment.to_station),
        segment.distance.to_words(),
        quadrant_word(segment.north_south.code()),
        small_to_words(segment.degrees),
        unit_noun(u32::from(segment.degrees), "grado"),
        small_to_words(u16::from(segment.minutes)),
        unit_noun(u32::from(segment.minutes), "minuto"),
        small_to_words(u16::from(segment.seconds)),
        unit_noun(u32::from(segment.seconds), "segundo"),
        quadrant_word(segment.east_west.code()),
    )
}

/// Singular only for exactly one; zero is plural.
fn unit_noun(value: u32, singular: &str) -> String {
    if value == 1 {
        singular.to_string()
    } else {
        format!("{}s", singular)
    }
}
