//! Line-based record reader.

/// One raw input row with its 1-based line/row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based position used in error messages.
    pub line: usize,
    /// Trimmed fields in input order.
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }
}

/// Split a comma-separated text block into raw records.
///
/// Blank lines are skipped and do not advance the line number.
pub fn parse_lines(text: &str) -> Vec<RawRecord> {
    text.trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(idx, line)| RawRecord::new(idx + 1, split_fields(line)))
        .collect()
}

/// Split a single line on commas, trimming each field.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields() {
        assert_eq!(
            split_fields(" 1, 2 ,S,46,35,19,E, 20.50 "),
            vec!["1", "2", "S", "46", "35", "19", "E", "20.50"]
        );
    }

    #[test]
    fn test_parse_lines_numbering() {
        let records = parse_lines("1,2,S\n\n   \n3,4,N\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 1);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[1].fields, vec!["3", "4", "N"]);
    }

    #[test]
    fn test_parse_lines_crlf() {
        let records = parse_lines("1,2\r\n3,4\r\n");
        assert_eq!(records[0].fields, vec!["1", "2"]);
        assert_eq!(records[1].fields, vec!["3", "4"]);
    }

    #[test]
    fn test_parse_lines_empty() {
        assert!(parse_lines("").is_empty());
        assert!(parse_lines("\n \n").is_empty());
    }

    #[test]
    fn test_parse_lines_keeps_comma_only_rows() {
        let records = parse_lines("1,2\n,,,\n  \n,,,,,,,\n");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].line, 2);
        assert_eq!(records[1].fields, vec!["", "", "", ""]);
        assert_eq!(records[2].line, 3);
        assert_eq!(records[2].fields.len(), 8);
    }
}
