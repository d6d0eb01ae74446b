//! Decimal-aware numerals (distances).

use std::str::FromStr;

use super::integer::integer_to_words;
use crate::config::MAX_WORDABLE;
use crate::error::NumeralError;

/// A number rounded to two decimals, split into its spoken parts.
///
/// Accepts `.` or `,` as fractional separator. Rounding is half away from
/// zero on the value scaled to hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distance {
    /// Leading minus sign.
    pub negative: bool,
    /// Absolute integer part.
    pub integer: u64,
    /// Fractional part in hundredths (0-99).
    pub hundredths: u8,
}

impl Distance {
    /// Render as Spanish words: `<integer> punto <hundredths>`, with a bare
    /// `-` prefix for negatives.
    pub fn to_words(&self) -> String {
        // Bounds are checked in `from_str`.
        let integer = integer_to_words(self.integer).unwrap_or_else(|_| self.integer.to_string());
        let sign = if self.negative { "-" } else { "" };

        if self.hundredths == 0 {
            return format!("{}{}", sign, integer);
        }

        let fraction = super::integer::small_to_words(u16::from(self.hundredths));
        format!("{}{} punto {}", sign, integer, fraction)
    }

    fn from_float(value: f64, raw: &str) -> Result<Self, NumeralError> {
        if !value.is_finite() {
            return Err(invalid(raw));
        }

        let scaled = (value.abs() * 100.0).round();
        if scaled > (MAX_WORDABLE as f64) * 100.0 + 99.0 {
            return Err(NumeralError::TooLarge {
                value: raw.to_string(),
            });
        }

        let cents = scaled as u64;
        Ok(Self {
            negative: value < 0.0 && cents > 0,
            integer: cents / 100,
            hundredths: (cents % 100) as u8,
        })
    }

    fn from_integer(text: &str, raw: &str) -> Result<Self, NumeralError> {
        let value: i64 = text.parse().map_err(|_| invalid(raw))?;
        let integer = value.unsigned_abs();
        if integer > MAX_WORDABLE {
            return Err(NumeralError::TooLarge {
                value: raw.to_string(),
            });
        }
        Ok(Self {
            negative: value < 0,
            integer,
            hundredths: 0,
        })
    }
}

impl FromStr for Distance {
    type Err = NumeralError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace(',', ".");

        if normalized.contains('.') {
            let value: f64 = normalized.parse().map_err(|_| invalid(raw))?;
            Self::from_float(value, raw)
        } else {
            Self::from_integer(&normalized, raw)
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.integer, self.hundredths)
    }
}

fn invalid(raw: &str) -> NumeralError {
    NumeralError::InvalidNumber {
        value: raw.trim().to_string(),
    }
}

/// Convert a decimal string (comma or dot separator) to Spanish words.
pub fn decimal_to_words(raw: &str) -> Result<String, NumeralError> {
    Ok(raw.parse::<Distance>()?.to_words())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== decimal_to_words tests ====================

    #[test]
    fn test_decimal_with_dot() {
        assert_eq!(decimal_to_words("20.50").unwrap(), "veinte punto cincuenta");
    }

    #[test]
    fn test_decimal_separator_agnostic() {
        assert_eq!(
            decimal_to_words("20,50").unwrap(),
            decimal_to_words("20.50").unwrap()
        );
    }

    #[test]
    fn test_plain_integer() {
        assert_eq!(decimal_to_words("15").unwrap(), "quince");
        assert_eq!(decimal_to_words(" 1000 ").unwrap(), "mil");
    }

    #[test]
    fn test_zero_fraction_dropped() {
        assert_eq!(decimal_to_words("12.00").unwrap(), "doce");
        assert_eq!(decimal_to_words("12.").unwrap(), "doce");
    }

    #[test]
    fn test_single_fraction_digit() {
        assert_eq!(decimal_to_words("7.5").unwrap(), "siete punto cincuenta");
        assert_eq!(decimal_to_words("7.05").unwrap(), "siete punto cinco");
    }

    #[test]
    fn test_negative_sign_prefix() {
        let text = decimal_to_words("-3.25").unwrap();
        assert_eq!(text, "-tres punto veinticinco");
        assert!(text.starts_with("-tres"));
        assert_eq!(decimal_to_words("-15").unwrap(), "-quince");
    }

    #[test]
    fn test_rounding_to_hundredths() {
        assert_eq!(decimal_to_words("1.234").unwrap(), "uno punto veintitrés");
        assert_eq!(decimal_to_words("1.999").unwrap(), "dos");
        assert_eq!(decimal_to_words("0.001").unwrap(), "cero");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(decimal_to_words("-0.001").unwrap(), "cero");
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            decimal_to_words("abc"),
            Err(NumeralError::InvalidNumber { .. })
        ));
        assert!(decimal_to_words("1.2.3").is_err());
        assert!(decimal_to_words("").is_err());
        assert!(decimal_to_words("inf").is_err());
        assert!(decimal_to_words("NaN.0").is_err());
    }

    #[test]
    fn test_too_large() {
        assert!(matches!(
            decimal_to_words("1000000000"),
            Err(NumeralError::TooLarge { .. })
        ));
        assert!(matches!(
            decimal_to_words("1000000000.5"),
            Err(NumeralError::TooLarge { .. })
        ));
    }

    // ==================== Distance tests ====================

    #[test]
    fn test_distance_parts() {
        let distance: Distance = "125,75".parse().unwrap();
        assert_eq!(
            distance,
            Distance {
                negative: false,
                integer: 125,
                hundredths: 75,
            }
        );
        assert_eq!(distance.to_string(), "125.75");
    }
}
