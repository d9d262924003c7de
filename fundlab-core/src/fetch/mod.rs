//! Feed fetching — provider trait, HTTP implementation, progress reporting.

pub mod http;
pub mod provider;

pub use http::{parse_rows, HttpNavSource};
pub use provider::{FeedError, NavSource, PipelineProgress, RawRow, StdoutProgress};
