//! Normalization — map each feed's reconciled rows into the unified
//! `FundRecord` shape and populate the alias → NAV lookup cache.

use crate::fetch::RawRow;
use crate::source::SourceSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unified fund record, serialized with the snapshot field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    pub fund_code: String,
    pub fund_name: String,
    pub isin_code: String,
    pub company: String,
    #[serde(rename = "type")]
    pub fund_type: String,
    pub region: String,
    pub currency: String,
    pub latest_nav: String,
    pub nav_date: String,
}

/// Latest NAV for one identifier alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub nav: String,
    pub date: String,
    pub fund_name: String,
}

/// Alias → latest NAV. A later source silently overwrites a colliding
/// alias from an earlier one; no merge rule is applied.
pub type NavCache = BTreeMap<String, NavEntry>;

/// Map one feed's reconciled rows into FundRecords and register every
/// non-empty identifier alias (raw code, raw ISIN, primary identifier)
/// in `cache`.
///
/// A record is emitted only when the primary identifier and the fund
/// name are both non-empty. A blank code falls back to the primary
/// identifier; a blank ISIN does so only where the feed says it should;
/// a blank currency falls back to the feed default.
pub fn normalize_source(
    rows: &[RawRow],
    spec: &SourceSpec,
    cache: &mut NavCache,
) -> Vec<FundRecord> {
    let mut records = Vec::new();

    for row in rows {
        let key = row.field(spec.key_column);
        let name = row.field(spec.name_column);
        if key.is_empty() || name.is_empty() {
            continue;
        }

        let code = row.field(spec.code_column);
        let isin = row.field(spec.isin_column);
        let nav = row.field(spec.nav_column);
        let date = row.field(spec.date_column);
        let currency = row.field(spec.currency_column);

        let fund_code = if code.is_empty() { key } else { code };
        let isin_code = if isin.is_empty() && spec.isin_falls_back_to_key {
            key
        } else {
            isin
        };
        let currency = if currency.is_empty() {
            spec.default_currency
        } else {
            currency
        };

        records.push(FundRecord {
            fund_code: fund_code.to_string(),
            fund_name: name.to_string(),
            isin_code: isin_code.to_string(),
            company: row.field(spec.company_column).to_string(),
            fund_type: spec.type_label.to_string(),
            region: spec.region.to_string(),
            currency: currency.to_string(),
            latest_nav: nav.to_string(),
            nav_date: date.to_string(),
        });

        let entry = NavEntry {
            nav: nav.to_string(),
            date: date.to_string(),
            fund_name: name.to_string(),
        };
        for alias in [code, isin, key] {
            if !alias.is_empty() {
                cache.insert(alias.to_string(), entry.clone());
            }
        }
    }

    records
}
