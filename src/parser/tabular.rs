//! CSV record reader with header check and encoding fallback.

use std::borrow::Cow;

use crate::config::REQUIRED_HEADERS;
use crate::error::{RedactionError, Result};

use super::records::RawRecord;

/// Decode CSV bytes as UTF-8, falling back to Latin-1 for legacy exports.
pub fn decode_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
        Err(_) => {
            tracing::warn!("Input is not valid UTF-8, decoding as Latin-1");
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}

/// Read CSV text into raw records ordered as [`REQUIRED_HEADERS`].
///
/// A missing required column fails the whole table. Data rows are numbered
/// from 1; whitespace-only lines are dropped but keep their number. Rows of
/// empty cells are kept so validation reports them.
pub fn parse_csv(text: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let columns = resolve_columns(&headers)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() == 1 && row.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let fields: Vec<String> = columns
            .iter()
            .map_while(|&col| row.get(col).map(str::to_string))
            .collect();
        records.push(RawRecord::new(idx + 1, fields));
    }

    Ok(records)
}

/// Decode and read CSV bytes in one step.
pub fn parse_csv_bytes(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    parse_csv(&decode_bytes(bytes))
}

/// Map each required header to its column index.
fn resolve_columns(headers: &[String]) -> Result<Vec<usize>> {
    REQUIRED_HEADERS
        .iter()
        .map(|name| headers.iter().position(|h| h == name))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| RedactionError::InvalidHeaders {
            expected: REQUIRED_HEADERS.join(", "),
            found: headers.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "est_i,est_f,NS,grados,minutos,segundos,EW,distancia";

    #[test]
    fn test_parse_csv_basic() {
        let text = format!("{}\n1,2,S,46,35,19,E,20.50\n", HEADER);
        let records = parse_csv(&text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 1);
        assert_eq!(
            records[0].fields,
            vec!["1", "2", "S", "46", "35", "19", "E", "20.50"]
        );
    }

    #[test]
    fn test_parse_csv_reordered_columns() {
        let text = "distancia,EW,segundos,minutos,grados,NS,est_f,est_i,nota\n\
                    \"20,50\",E,19,35,46,S,2,1,x\n";
        let records = parse_csv(text).unwrap();
        assert_eq!(
            records[0].fields,
            vec!["1", "2", "S", "46", "35", "19", "E", "20,50"]
        );
    }

    #[test]
    fn test_parse_csv_missing_header() {
        let text = "est_i,est_f,NS,grados,minutos,segundos,EW\n1,2,S,46,35,19,E\n";
        match parse_csv(text) {
            Err(RedactionError::InvalidHeaders { expected, found }) => {
                assert!(expected.contains("distancia"));
                assert_eq!(found.len(), 7);
            }
            other => panic!("Expected InvalidHeaders, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_empty_input() {
        assert!(matches!(
            parse_csv(""),
            Err(RedactionError::InvalidHeaders { .. })
        ));
    }

    #[test]
    fn test_parse_csv_short_row() {
        let text = format!("{}\n1,2,S\n", HEADER);
        let records = parse_csv(&text).unwrap();
        assert_eq!(records[0].fields.len(), 3);
    }

    #[test]
    fn test_parse_csv_blank_row_keeps_numbering() {
        let text = format!("{}\n   \n1,2,S,46,35,19,E,20\n", HEADER);
        let records = parse_csv(&text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].line, 2);
    }

    #[test]
    fn test_parse_csv_keeps_empty_cell_rows() {
        let text = format!("{}\n,,\n ,,,,,,,\n", HEADER);
        let records = parse_csv(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[0].fields, vec!["", "", ""]);
        assert_eq!(records[1].fields.len(), 8);
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let bytes = "\u{feff}est_i".as_bytes();
        assert_eq!(decode_bytes(bytes), "est_i");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "estación" in Latin-1
        let bytes = b"estaci\xf3n";
        assert_eq!(decode_bytes(bytes), "estación");
    }

    #[test]
    fn test_parse_csv_bytes_latin1() {
        let mut bytes = format!("{}\n", HEADER).into_bytes();
        bytes.extend_from_slice(b"1\xd1,2,N,10,0,0,O,5\n");
        let records = parse_csv_bytes(&bytes).unwrap();
        assert_eq!(records[0].fields[0], "1Ñ");
    }
}
