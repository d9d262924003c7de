//! Pipeline orchestrator — fetch, reconcile, normalize, select, write.
//!
//! A run is one linear pass: the three feeds are fetched in program
//! order, each collapsed to its latest rows and normalized, the popular
//! subset is selected, and the four snapshots are written. No retries,
//! no resumption.

use crate::config::{taipei_offset, PipelineConfig};
use crate::fetch::{FeedError, NavSource, PipelineProgress, RawRow};
use crate::normalize::{normalize_source, FundRecord, NavCache};
use crate::reconcile::latest_by_key;
use crate::select::select_popular;
use crate::snapshot::{
    FundList, NavSnapshot, SnapshotWriter, UpdateStamp, LAST_UPDATE_FILE, MASTER_FILE, NAV_FILE,
    POPULAR_FILE,
};
use crate::source::SourceSpec;
use chrono::Utc;

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct RunSummary {
    pub total_funds: usize,
    pub popular_funds: usize,
    pub nav_cache_size: usize,
    /// Snapshot files that failed to write. The remaining files were
    /// still attempted.
    pub write_failures: Vec<(String, FeedError)>,
}

impl RunSummary {
    pub fn all_written(&self) -> bool {
        self.write_failures.is_empty()
    }
}

/// Run the whole pipeline once.
///
/// A fetch failure is reported through `progress` and downgraded to an
/// empty row set for that source; the run aborts with
/// [`FeedError::NoData`] only when all three sources come back empty,
/// before any file is written. A failed snapshot write is recorded in
/// the summary and does not stop the remaining writes.
pub fn run(
    config: &PipelineConfig,
    source: &dyn NavSource,
    progress: &dyn PipelineProgress,
) -> Result<RunSummary, FeedError> {
    // Fetch, in program order.
    let mut fetched: Vec<(&'static SourceSpec, Vec<RawRow>)> = Vec::new();
    for spec in SourceSpec::all() {
        let url = config.endpoint(spec.kind);
        progress.on_fetch_start(spec.name, url);
        let rows = match source.fetch(url) {
            Ok(rows) => {
                progress.on_fetch_complete(spec.name, Ok(rows.len()));
                rows
            }
            Err(e) => {
                progress.on_fetch_complete(spec.name, Err(&e));
                Vec::new()
            }
        };
        fetched.push((spec, rows));
    }

    if fetched.iter().all(|(_, rows)| rows.is_empty()) {
        return Err(FeedError::NoData);
    }

    // Reconcile and normalize, in source-processing order.
    progress.on_stage("Processing fund data");
    let mut funds: Vec<FundRecord> = Vec::new();
    let mut cache = NavCache::new();
    for (spec, rows) in fetched {
        let latest = latest_by_key(rows, spec.key_column, spec.date_column);
        funds.extend(normalize_source(&latest, spec, &mut cache));
    }

    progress.on_stage("Selecting popular funds");
    let popular = select_popular(&funds, config.popular_limit);

    let total_funds = funds.len();
    let popular_funds = popular.len();
    let nav_cache_size = cache.len();

    // Write the four snapshots; one failure does not stop the rest.
    progress.on_stage("Writing snapshots");
    let now = Utc::now().with_timezone(&taipei_offset());
    let last_update = now.to_rfc3339();

    let writer = SnapshotWriter::new(&config.output_dir);
    let mut write_failures: Vec<(String, FeedError)> = Vec::new();
    let mut record = |filename: &str, result: Result<(), FeedError>| match result {
        Ok(()) => progress.on_snapshot_written(filename, Ok(())),
        Err(e) => {
            progress.on_snapshot_written(filename, Err(&e));
            write_failures.push((filename.to_string(), e));
        }
    };

    let master = FundList {
        last_update: last_update.clone(),
        count: total_funds,
        funds,
    };
    record(MASTER_FILE, writer.write(MASTER_FILE, &master));

    let popular_list = FundList {
        last_update: last_update.clone(),
        count: popular_funds,
        funds: popular,
    };
    record(POPULAR_FILE, writer.write(POPULAR_FILE, &popular_list));

    let nav = NavSnapshot {
        last_update: last_update.clone(),
        nav_data: cache,
    };
    record(NAV_FILE, writer.write(NAV_FILE, &nav));

    let stamp = UpdateStamp {
        last_update,
        timestamp: now.timestamp(),
        total_funds,
        popular_funds,
        nav_cache_size,
    };
    record(LAST_UPDATE_FILE, writer.write(LAST_UPDATE_FILE, &stamp));

    Ok(RunSummary {
        total_funds,
        popular_funds,
        nav_cache_size,
        write_failures,
    })
}
