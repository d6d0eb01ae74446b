//! Station label - parsed form of a free-form station identifier.

use crate::numerals::integer_to_words;

/// A station identifier split into its number and letter parts.
///
/// Labels that match neither part keep only `raw`, which is echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationLabel {
    /// Leading number, if any.
    pub number: Option<u64>,
    /// Trailing letters, uppercased.
    pub letters: Option<String>,
    /// The trimmed input.
    pub raw: String,
}

impl StationLabel {
    /// Label with no structured parts.
    pub fn unstructured(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            ..Default::default()
        }
    }

    /// Whether either part was recognized.
    pub fn is_structured(&self) -> bool {
        self.number.is_some() || self.letters.is_some()
    }

    /// Render as Spanish words: number spelled out, letters kept verbatim.
    pub fn to_words(&self) -> String {
        let number = match self.number.map(integer_to_words) {
            Some(Ok(words)) => Some(words),
            Some(Err(_)) => return self.raw.clone(),
            None => None,
        };

        match (number, self.letters.as_deref()) {
            (Some(number), Some(letters)) => format!("{} {}", number, letters),
            (Some(number), None) => number,
            (None, Some(letters)) => letters.to_string(),
            (None, None) => self.raw.clone(),
        }
    }
}
