//! Fundlab Core — NAV feed retrieval, reconciliation, and snapshot output.
//!
//! One linear pass per run:
//! - Fetch the three CSV feeds (SITCA domestic, TDCC offshore, TDCC futures trust)
//! - Reconcile each feed down to the latest row per primary identifier
//! - Normalize into unified `FundRecord`s plus the alias → NAV lookup cache
//! - Select the prioritized "popular" subset
//! - Write the four JSON snapshots

pub mod config;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod select;
pub mod snapshot;
pub mod source;
