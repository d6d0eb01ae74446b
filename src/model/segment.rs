//! Traverse segment - one validated leg of a survey route.

use std::str::FromStr;

use crate::error::RecordError;
use crate::numerals::Distance;

/// North/south half of a quadrant bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NorthSouth {
    North,
    South,
}

impl NorthSouth {
    /// Single-letter quadrant code.
    pub fn code(&self) -> &'static str {
        match self {
            NorthSouth::North => "N",
            NorthSouth::South => "S",
        }
    }
}

impl FromStr for NorthSouth {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N" => Ok(NorthSouth::North),
            "S" => Ok(NorthSouth::South),
            _ => Err(RecordError::InvalidNorthSouth {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// East/west half of a quadrant bearing. `O` (oeste) is accepted for west.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EastWest {
    East,
    West,
}

impl EastWest {
    /// Single-letter quadrant code.
    pub fn code(&self) -> &'static str {
        match self {
            EastWest::East => "E",
            EastWest::West => "W",
        }
    }
}

impl FromStr for EastWest {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E" => Ok(EastWest::East),
            "W" | "O" => Ok(EastWest::West),
            _ => Err(RecordError::InvalidEastWest {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// A fully validated traverse record, ready for redaction.
///
/// Only built by the record pipeline once every field has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraverseSegment {
    /// Raw label of the starting station.
    pub from_station: String,
    /// Raw label of the ending station.
    pub to_station: String,
    pub north_south: NorthSouth,
    /// Degrees (0-359).
    pub degrees: u16,
    /// Minutes (0-59).
    pub minutes: u8,
    /// Seconds (0-59).
    pub seconds: u8,
    pub east_west: EastWest,
    /// Distance in meters.
    pub distance: Distance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_north_south_parse() {
        assert_eq!("n".parse::<NorthSouth>().unwrap(), NorthSouth::North);
        assert_eq!(" S ".parse::<NorthSouth>().unwrap(), NorthSouth::South);
        assert!(matches!(
            "X".parse::<NorthSouth>(),
            Err(RecordError::InvalidNorthSouth { .. })
        ));
        assert!("E".parse::<NorthSouth>().is_err());
    }

    #[test]
    fn test_east_west_parse() {
        assert_eq!("e".parse::<EastWest>().unwrap(), EastWest::East);
        assert_eq!("W".parse::<EastWest>().unwrap(), EastWest::West);
        assert_eq!("o".parse::<EastWest>().unwrap(), EastWest::West);
        assert!(matches!(
            "N".parse::<EastWest>(),
            Err(RecordError::InvalidEastWest { .. })
        ));
    }

    #[test]
    fn test_codes() {
        assert_eq!(NorthSouth::South.code(), "S");
        assert_eq!(EastWest::West.code(), "W");
    }
}
