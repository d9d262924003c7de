//! Pipeline configuration — endpoints, output location, limits.
//!
//! One immutable struct built at startup. There is no config file and no
//! CLI surface for these values; the defaults are the deployment.

use crate::source::SourceKind;
use chrono::FixedOffset;
use std::path::PathBuf;
use std::time::Duration;

/// Immutable run configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub domestic_url: String,
    pub offshore_url: String,
    pub futures_url: String,
    /// Directory the four snapshot files are written to.
    pub output_dir: PathBuf,
    /// Target size of the popular subset.
    pub popular_limit: usize,
    /// Per-request timeout for feed fetches.
    pub http_timeout: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            domestic_url: "https://www.sitca.org.tw/MemberK0000/F/03/nav.csv".into(),
            offshore_url: "https://opendata.tdcc.com.tw/getOD.ashx?id=3-4".into(),
            futures_url: "https://opendata.tdcc.com.tw/getOD.ashx?id=5-4".into(),
            output_dir: PathBuf::from("data"),
            popular_limit: 100,
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl PipelineConfig {
    /// Endpoint URL for one feed.
    pub fn endpoint(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Domestic => &self.domestic_url,
            SourceKind::Offshore => &self.offshore_url,
            SourceKind::Futures => &self.futures_url,
        }
    }
}

/// Fixed UTC+8 offset used for every timestamp, regardless of host locale.
pub fn taipei_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("static UTC+8 offset")
}
