//! Configuration constants and settings for redaction.

/// Number of fields in a traverse record.
pub const FIELD_COUNT: usize = 8;

/// Largest accepted degrees value.
pub const MAX_DEGREES: i64 = 359;

/// Largest accepted minutes value.
pub const MAX_MINUTES: i64 = 59;

/// Largest accepted seconds value.
pub const MAX_SECONDS: i64 = 59;

/// Largest integer the numeral translator writes out (millions band).
pub const MAX_WORDABLE: u64 = 999_999_999;

/// Column names required in tabular input, in record field order.
pub const REQUIRED_HEADERS: [&str; FIELD_COUNT] = [
    "est_i",
    "est_f",
    "NS",
    "grados",
    "minutos",
    "segundos",
    "EW",
    "distancia",
];

/// Heading used when a document request carries no title.
pub const DEFAULT_TITLE: &str = "Redacción de Levantamiento Topográfico";

/// Body font for generated documents.
pub const DEFAULT_FONT_NAME: &str = "Arial";

/// Body font size in points.
pub const DEFAULT_FONT_SIZE_PT: u8 = 11;

/// Download name for documents built from line-based input.
pub const DEFAULT_OUTPUT_FILENAME: &str = "redaccion_topografica";

/// Download name for documents built from CSV input.
pub const CSV_OUTPUT_FILENAME: &str = "redaccion_topografica_desde_csv";

/// Shape of the raw input records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Newline-delimited, comma-separated text.
    #[default]
    Lines,
    /// Table with a header row.
    Csv,
}

impl InputFormat {
    /// Pick the input format from a file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim().to_lowercase().as_str() {
            "csv" => InputFormat::Csv,
            _ => InputFormat::Lines,
        }
    }

    /// Pick the input format for a path.
    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|s| s.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// Base name for the document produced from this input.
    pub fn output_stem(&self) -> &'static str {
        match self {
            InputFormat::Lines => DEFAULT_OUTPUT_FILENAME,
            InputFormat::Csv => CSV_OUTPUT_FILENAME,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Lines => write!(f, "lines"),
            InputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Body text style handed to document writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStyle {
    /// Body font family.
    pub font_name: String,
    /// Body font size in points.
    pub font_size_pt: u8,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size_pt: DEFAULT_FONT_SIZE_PT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_input_format_from_extension() {
        assert_eq!(InputFormat::from_extension("csv"), InputFormat::Csv);
        assert_eq!(InputFormat::from_extension("CSV"), InputFormat::Csv);
        assert_eq!(InputFormat::from_extension("txt"), InputFormat::Lines);
    }

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(
            InputFormat::from_path(Path::new("levantamiento.csv")),
            InputFormat::Csv
        );
        assert_eq!(
            InputFormat::from_path(Path::new("levantamiento")),
            InputFormat::Lines
        );
        assert_eq!(InputFormat::Csv.output_stem(), CSV_OUTPUT_FILENAME);
    }

    #[test]
    fn test_default_style() {
        let style = DocumentStyle::default();
        assert_eq!(style.font_name, "Arial");
        assert_eq!(style.font_size_pt, 11);
    }
}
