//! Integer to Spanish words.

use crate::config::MAX_WORDABLE;
use crate::error::NumeralError;

const UNITS: [&str; 10] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];

/// Spanish fuses ten+units below 30 without a connective.
const TEN_TO_TWENTY_NINE: [&str; 20] = [
    "diez",
    "once",
    "doce",
    "trece",
    "catorce",
    "quince",
    "dieciséis",
    "diecisiete",
    "dieciocho",
    "diecinueve",
    "veinte",
    "veintiuno",
    "veintidós",
    "veintitrés",
    "veinticuatro",
    "veinticinco",
    "veintiséis",
    "veintisiete",
    "veintiocho",
    "veintinueve",
];

const TENS: [&str; 10] = [
    "", "diez", "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cien",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Convert a non-negative integer to Spanish words.
///
/// Covers 0 through [`MAX_WORDABLE`]; larger values are rejected.
pub fn integer_to_words(n: u64) -> Result<String, NumeralError> {
    if n > MAX_WORDABLE {
        return Err(NumeralError::TooLarge {
            value: n.to_string(),
        });
    }
    Ok(words_below_billion(n))
}

/// Words for a value already known to fit the millions band.
pub(crate) fn small_to_words(n: u16) -> String {
    words_below_billion(u64::from(n))
}

fn words_0_99(n: u64) -> String {
    match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=29 => TEN_TO_TWENTY_NINE[(n - 10) as usize].to_string(),
        _ => {
            let (tens, units) = (n / 10, n % 10);
            if units == 0 {
                TENS[tens as usize].to_string()
            } else {
                format!("{} y {}", TENS[tens as usize], UNITS[units as usize])
            }
        }
    }
}

fn words_0_999(n: u64) -> String {
    if n < 100 {
        return words_0_99(n);
    }
    if n == 100 {
        return "cien".to_string();
    }

    let (hundreds, rest) = (n / 100, n % 100);
    let head = if hundreds == 1 {
        "ciento"
    } else {
        HUNDREDS[hundreds as usize]
    };

    if rest == 0 {
        head.to_string()
    } else {
        format!("{} {}", head, words_0_99(rest))
    }
}

fn words_below_billion(n: u64) -> String {
    if n < 1000 {
        return words_0_999(n);
    }

    let millions = n / 1_000_000;
    let thousands = (n % 1_000_000) / 1000;
    let units = n % 1000;

    // Zero groups are omitted rather than spoken as "cero".
    let mut parts = Vec::with_capacity(3);
    if millions > 0 {
        parts.push(if millions == 1 {
            "un millón".to_string()
        } else {
            format!("{} millones", words_0_999(millions))
        });
    }
    if thousands > 0 {
        parts.push(if thousands == 1 {
            "mil".to_string()
        } else {
            format!("{} mil", words_0_999(thousands))
        });
    }
    if units > 0 {
        parts.push(words_0_999(units));
    }

    if parts.is_empty() {
        "cero".to_string()
    } else {
        parts.join(" ")
    }
}
