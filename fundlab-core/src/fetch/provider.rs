//! Feed provider trait and structured error types.
//!
//! The NavSource trait abstracts over how feed rows are obtained (live
//! HTTP, stubs in tests) so the pipeline can be exercised without the
//! network.

use std::collections::HashMap;
use thiserror::Error;

/// One CSV record: source column name → raw string value.
///
/// Field access trims surrounding whitespace; absent columns read as
/// empty. The feeds pad values freely, so callers always see the trimmed
/// form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow(HashMap<String, String>);

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.0.insert(column.into(), value.into());
    }

    /// Trimmed value of a column; empty when the column is absent.
    pub fn field(&self, column: &str) -> &str {
        self.0.get(column).map(|v| v.trim()).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Structured error types for the pipeline.
///
/// Fetch-side failures (`Network`, `Decode`, `Parse`) are reported per
/// source and downgraded to an empty row set by the pipeline; `Write` is
/// per snapshot file and non-fatal; `NoData` is the one fatal condition.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("decode failure: {0}")]
    Decode(String),

    #[error("parse failure: {0}")]
    Parse(String),

    #[error("snapshot write failed: {0}")]
    Write(String),

    #[error("all sources returned no rows — nothing to snapshot")]
    NoData,
}

/// Trait for feed row sources (live HTTP, test stubs).
///
/// Returning `Err` here is distinct from returning zero rows: the caller
/// decides how to degrade, and keeps the reason for diagnostics.
pub trait NavSource {
    /// Human-readable name of this source implementation.
    fn name(&self) -> &str;

    /// Fetch all rows from one feed endpoint.
    fn fetch(&self, url: &str) -> Result<Vec<RawRow>, FeedError>;
}

/// Progress callbacks for a pipeline run.
pub trait PipelineProgress {
    /// Called before a feed fetch begins.
    fn on_fetch_start(&self, source: &str, url: &str);

    /// Called when a feed fetch finishes, with the row count or the error.
    fn on_fetch_complete(&self, source: &str, outcome: Result<usize, &FeedError>);

    /// Called at stage transitions (processing, selection, writing).
    fn on_stage(&self, message: &str);

    /// Called after each snapshot write attempt.
    fn on_snapshot_written(&self, filename: &str, outcome: Result<(), &FeedError>);
}

/// Simple progress reporter that prints to stdout.
pub struct StdoutProgress;

impl PipelineProgress for StdoutProgress {
    fn on_fetch_start(&self, source: &str, url: &str) {
        println!("Fetching {source} feed: {url}");
    }

    fn on_fetch_complete(&self, source: &str, outcome: Result<usize, &FeedError>) {
        match outcome {
            Ok(rows) => println!("  OK: {source}: {rows} rows"),
            Err(e) => println!("  FAIL: {source}: {e}"),
        }
    }

    fn on_stage(&self, message: &str) {
        println!("{message}");
    }

    fn on_snapshot_written(&self, filename: &str, outcome: Result<(), &FeedError>) {
        match outcome {
            Ok(()) => println!("  Saved: {filename}"),
            Err(e) => println!("  FAIL: {filename}: {e}"),
        }
    }
}
