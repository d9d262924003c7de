//! HTTP feed source.
//!
//! Fetches a feed endpoint with a bounded-duration blocking GET, decodes
//! the body as UTF-8 (the TDCC endpoints prepend a byte-order mark), and
//! parses it as header-rowed CSV. All failures map into `FeedError`; the
//! pipeline decides how to degrade.

use super::provider::{FeedError, NavSource, RawRow};
use std::time::Duration;

/// Live HTTP feed source.
pub struct HttpNavSource {
    client: reqwest::blocking::Client,
}

impl HttpNavSource {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }
}

impl NavSource for HttpNavSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch(&self, url: &str) -> Result<Vec<RawRow>, FeedError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Network(format!("HTTP {status} for {url}")));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| FeedError::Network(e.to_string()))?;
        let text = decode_utf8_sig(&bytes)?;
        parse_rows(&text)
    }
}

/// Decode UTF-8, stripping a leading byte-order mark when present.
fn decode_utf8_sig(bytes: &[u8]) -> Result<String, FeedError> {
    let text = std::str::from_utf8(bytes).map_err(|e| FeedError::Decode(e.to_string()))?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

/// Parse header-rowed CSV text into RawRows.
///
/// Records are read flexibly: fields beyond the header width are ignored
/// and short records leave the trailing columns absent, matching how the
/// feeds actually publish.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FeedError::Parse(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FeedError::Parse(e.to_string()))?;
        let row: RawRow = headers.iter().zip(record.iter()).collect();
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_rowed_csv() {
        let text = "基金代號,基金名稱,基金淨值\nT001,元大台灣50,95.31\nT002,富邦科技,41.20\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("基金代號"), "T001");
        assert_eq!(rows[1].field("基金名稱"), "富邦科技");
    }

    #[test]
    fn strips_byte_order_mark() {
        let bytes = "\u{feff}a,b\n1,2\n".as_bytes();
        let text = decode_utf8_sig(bytes).unwrap();
        let rows = parse_rows(&text).unwrap();
        assert_eq!(rows[0].field("a"), "1");
    }

    #[test]
    fn short_records_leave_columns_absent() {
        let text = "a,b,c\n1,2\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows[0].field("b"), "2");
        assert_eq!(rows[0].field("c"), "");
    }

    #[test]
    fn invalid_utf8_is_a_decode_failure() {
        let err = decode_utf8_sig(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[test]
    fn headerless_empty_input_yields_no_rows() {
        let rows = parse_rows("").unwrap();
        assert!(rows.is_empty());
    }
}
