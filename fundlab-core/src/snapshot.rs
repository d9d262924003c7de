//! Snapshot artifacts — the four JSON files and their writer.
//!
//! All snapshots are pretty-printed JSON with non-ASCII left unescaped.
//! Writes are atomic: serialize to a `.tmp` sibling, then rename into
//! place.

use crate::fetch::FeedError;
use crate::normalize::{FundRecord, NavCache};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MASTER_FILE: &str = "funds-master.json";
pub const POPULAR_FILE: &str = "funds-popular.json";
pub const NAV_FILE: &str = "funds-nav-latest.json";
pub const LAST_UPDATE_FILE: &str = "last-update.json";

/// Body of `funds-master.json` and `funds-popular.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundList {
    pub last_update: String,
    pub count: usize,
    pub funds: Vec<FundRecord>,
}

/// Body of `funds-nav-latest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSnapshot {
    pub last_update: String,
    pub nav_data: NavCache,
}

/// Body of `last-update.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStamp {
    pub last_update: String,
    /// Epoch seconds of the run.
    pub timestamp: i64,
    pub total_funds: usize,
    pub popular_funds: usize,
    pub nav_cache_size: usize,
}

/// Writes snapshot JSON under a fixed output directory.
pub struct SnapshotWriter {
    output_dir: PathBuf,
}

impl SnapshotWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Final path of a snapshot file.
    pub fn path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// Serialize `value` and atomically write it to `filename`.
    pub fn write<T: Serialize>(&self, filename: &str, value: &T) -> Result<(), FeedError> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| FeedError::Write(format!("create output dir: {e}")))?;

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| FeedError::Write(format!("serialize {filename}: {e}")))?;

        let path = self.path(filename);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| FeedError::Write(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            FeedError::Write(format!("atomic rename of {filename}: {e}"))
        })?;

        Ok(())
    }
}
