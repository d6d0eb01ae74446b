//! Cardinal quadrant codes to Spanish direction words.

/// Translate a quadrant code (`N`, `S`, `E`, `W`, `O`) to its Spanish word.
///
/// Unknown codes come back lower-cased instead of failing: record
/// validation is the only place codes get rejected.
pub fn quadrant_word(code: &str) -> String {
    let word = match code.trim().to_uppercase().as_str() {
        "N" => "norte",
        "S" => "sur",
        "E" => "este",
        "W" | "O" => "oeste",
        _ => return code.to_lowercase(),
    };
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(quadrant_word("N"), "norte");
        assert_eq!(quadrant_word("S"), "sur");
        assert_eq!(quadrant_word("E"), "este");
        assert_eq!(quadrant_word("W"), "oeste");
        assert_eq!(quadrant_word("O"), "oeste");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(quadrant_word("n"), "norte");
        assert_eq!(quadrant_word(" o "), "oeste");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        // Only reachable if record validation is bypassed.
        assert_eq!(quadrant_word("X"), "x");
        assert_eq!(quadrant_word("NE"), "ne");
    }
}
