use crate::domain::model::KeywordRow;
use crate::utils::error::{KeywordError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

pub const CSV_HEADERS: [&str; 5] = ["Campaign", "Ad Group", "Keyword", "Criterion Type", "Labels"];

pub const INDEX_HEADER: &str = "#";

/// Characters left unescaped in the data URI: ASCII alphanumerics and `_.-~/`.
const URI_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Serializes keyword tables to CSV and to downloadable data URIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    include_index: bool,
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends the `#` sequence column to every line.
    pub fn with_index(mut self, include_index: bool) -> Self {
        self.include_index = include_index;
        self
    }

    pub fn export(&self, rows: &[KeywordRow]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        if self.include_index {
            writer.write_field(INDEX_HEADER)?;
        }
        writer.write_record(CSV_HEADERS)?;

        for row in rows {
            if self.include_index {
                writer.write_field(row.index.to_string())?;
            }
            writer.write_record([
                row.campaign.as_str(),
                row.ad_group.as_str(),
                row.keyword.as_str(),
                row.criterion_type.name(),
                row.labels.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| KeywordError::IoError(e.into_error()))?;

        tracing::debug!(rows = rows.len(), bytes = bytes.len(), "Exported keyword CSV");

        String::from_utf8(bytes).map_err(|e| KeywordError::DecodeError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }

    /// CSV text percent-encoded behind the `data:text/csv` prefix.
    pub fn export_data_uri(&self, rows: &[KeywordRow]) -> Result<String> {
        Ok(to_data_uri(&self.export(rows)?))
    }
}

pub fn to_data_uri(csv_text: &str) -> String {
    format!(
        "{}{}",
        DATA_URI_PREFIX,
        utf8_percent_encode(csv_text, URI_ESCAPE)
    )
}

/// Reverses [`to_data_uri`], returning the CSV text.
pub fn decode_data_uri(uri: &str) -> Result<String> {
    let encoded = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| KeywordError::DecodeError {
            message: format!("payload does not start with '{}'", DATA_URI_PREFIX),
        })?;

    percent_decode_str(encoded)
        .decode_utf8()
        .map(|text| text.into_owned())
        .map_err(|e| KeywordError::DecodeError {
            message: format!("percent-decoded payload is not valid UTF-8: {}", e),
        })
}

/// Reads rows back from exported CSV text, with or without the `#` column.
///
/// Rows without an index column are numbered in file order.
pub fn parse_csv(csv_text: &str) -> Result<Vec<KeywordRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let has_index = reader.headers()?.iter().any(|header| header == INDEX_HEADER);

    let mut rows = Vec::new();
    for (position, record) in reader.deserialize::<KeywordRow>().enumerate() {
        let mut row = record?;
        if !has_index {
            row.index = position + 1;
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MatchType;

    fn row(index: usize, keyword: &str, match_type: MatchType) -> KeywordRow {
        KeywordRow {
            index,
            campaign: "SEM_Campaign".to_string(),
            ad_group: "honda".to_string(),
            keyword: keyword.to_string(),
            criterion_type: match_type,
            labels: "buy".to_string(),
        }
    }

    #[test]
    fn test_export_header_and_rows() {
        let rows = vec![row(1, "[honda buy]", MatchType::Exact)];
        let csv_text = CsvExporter::new().export(&rows).unwrap();

        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Campaign,Ad Group,Keyword,Criterion Type,Labels");
        assert_eq!(lines[1], "SEM_Campaign,honda,[honda buy],Exact,buy");
    }

    #[test]
    fn test_export_with_index_column() {
        let rows = vec![
            row(1, "honda buy", MatchType::Broad),
            row(2, "+honda +buy", MatchType::Modified),
        ];
        let csv_text = CsvExporter::new().with_index(true).export(&rows).unwrap();

        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines[0], "#,Campaign,Ad Group,Keyword,Criterion Type,Labels");
        assert_eq!(lines[2], "2,SEM_Campaign,honda,+honda +buy,Modified,buy");
    }

    #[test]
    fn test_export_quotes_phrase_keywords() {
        let rows = vec![row(1, "\"honda buy\"", MatchType::Phrase)];
        let csv_text = CsvExporter::new().export(&rows).unwrap();

        assert!(csv_text.contains("\"\"\"honda buy\"\"\""));
    }

    #[test]
    fn test_export_empty_table_is_header_only() {
        let csv_text = CsvExporter::new().export(&[]).unwrap();
        assert_eq!(csv_text.trim_end(), "Campaign,Ad Group,Keyword,Criterion Type,Labels");
    }

    #[test]
    fn test_data_uri_escapes_reserved_characters() {
        let uri = to_data_uri("a,b\n\"c d\"");
        assert_eq!(uri, "data:text/csv;charset=utf-8,a%2Cb%0A%22c%20d%22");
    }

    #[test]
    fn test_data_uri_round_trip() {
        let mut tricky = row(1, "[honda, buy]", MatchType::Exact);
        tricky.campaign = "Q3 \"spring\"\nlaunch".to_string();
        tricky.labels = "achète".to_string();
        let rows = vec![tricky, row(2, "\"honda buy\"", MatchType::Phrase)];

        let uri = CsvExporter::new().export_data_uri(&rows).unwrap();
        let decoded = decode_data_uri(&uri).unwrap();
        let parsed = parse_csv(&decoded).unwrap();

        assert_eq!(parsed, rows);
    }

    #[test]
    fn test_parse_csv_with_index_column_keeps_indexes() {
        let rows = vec![row(7, "honda buy", MatchType::Broad)];
        let csv_text = CsvExporter::new().with_index(true).export(&rows).unwrap();

        let parsed = parse_csv(&csv_text).unwrap();
        assert_eq!(parsed[0].index, 7);
    }

    #[test]
    fn test_decode_rejects_foreign_prefix() {
        let result = decode_data_uri("data:text/plain,abc");
        assert!(matches!(result, Err(KeywordError::DecodeError { .. })));
    }

    #[test]
    fn test_parse_csv_rejects_unknown_criterion_type() {
        let csv_text = "Campaign,Ad Group,Keyword,Criterion Type,Labels\nC,honda,honda buy,Fuzzy,buy\n";
        assert!(matches!(parse_csv(csv_text), Err(KeywordError::CsvError(_))));
    }
}
