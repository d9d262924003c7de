//! Popular-fund selection — priority issuers first, then backfill.

use crate::normalize::FundRecord;
use std::collections::HashSet;

/// Funds taken per priority issuer before moving to the next one.
const PER_ISSUER: usize = 5;

/// Issuer-name substrings scanned in order: fifteen domestic managers,
/// then fifteen offshore managers.
pub const PRIORITY_ISSUERS: [&str; 30] = [
    "元大", "富邦", "國泰", "群益", "統一",
    "復華", "日盛", "野村", "兆豐", "台新",
    "中國信託", "凱基", "永豐", "第一金", "合庫",
    "富蘭克林", "聯博", "貝萊德", "施羅德", "摩根",
    "安聯", "柏瑞", "安本標準", "PIMCO", "駿利亨德森",
    "景順", "霸菱", "法巴", "駿利", "瀚亞",
];

/// Pick up to `limit` funds using the built-in priority issuer list.
pub fn select_popular(funds: &[FundRecord], limit: usize) -> Vec<FundRecord> {
    select_popular_with(funds, &PRIORITY_ISSUERS, limit)
}

/// Pick up to `limit` funds: for each priority issuer in order, up to
/// five not-yet-selected funds (in input order) whose company or fund
/// name contains the issuer substring; stop scanning issuers once
/// `limit` are collected. Backfill with the remaining funds in input
/// order, then truncate to `limit`.
///
/// Each fund is selected at most once, even when it matches several
/// issuer substrings. Identity is positional rather than by fund code:
/// the unified list can legitimately carry the same fund code twice
/// (codes are only unique within one feed), and positional identity
/// keeps the output length at min(`limit`, total) regardless. Two
/// equal-valued records at different positions therefore count
/// separately.
pub fn select_popular_with(
    funds: &[FundRecord],
    priorities: &[&str],
    limit: usize,
) -> Vec<FundRecord> {
    let mut picked: Vec<usize> = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    for issuer in priorities {
        let mut taken = 0;
        for (i, fund) in funds.iter().enumerate() {
            if taken == PER_ISSUER {
                break;
            }
            if seen.contains(&i) {
                continue;
            }
            if fund.company.contains(issuer) || fund.fund_name.contains(issuer) {
                seen.insert(i);
                picked.push(i);
                taken += 1;
            }
        }
        if picked.len() >= limit {
            break;
        }
    }

    if picked.len() < limit {
        for i in 0..funds.len() {
            if picked.len() >= limit {
                break;
            }
            if seen.insert(i) {
                picked.push(i);
            }
        }
    }

    picked.truncate(limit);
    picked.into_iter().map(|i| funds[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund(name: &str, company: &str) -> FundRecord {
        FundRecord {
            fund_code: format!("C-{name}"),
            fund_name: name.to_string(),
            isin_code: String::new(),
            company: company.to_string(),
            fund_type: "境內基金".to_string(),
            region: "境內".to_string(),
            currency: "TWD".to_string(),
            latest_nav: "10.00".to_string(),
            nav_date: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn priority_matches_come_first_then_backfill() {
        let funds = vec![
            fund("科技趨勢", "某某投信"),
            fund("元大台灣50", "元大投信"),
            fund("全球債券", "另一投信"),
            fund("高股息", "元大投信"),
        ];
        let picked = select_popular_with(&funds, &["元大"], 3);

        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].fund_name, "元大台灣50");
        assert_eq!(picked[1].fund_name, "高股息");
        // Backfill resumes from the top of the unified list.
        assert_eq!(picked[2].fund_name, "科技趨勢");
    }

    #[test]
    fn matches_on_fund_name_as_well_as_company() {
        let funds = vec![fund("元大卓越", "掛名別家投信")];
        let picked = select_popular_with(&funds, &["元大"], 5);
        assert_eq!(picked.len(), 1);
    }

    #[test]
    fn at_most_five_per_issuer_before_moving_on() {
        let mut funds: Vec<FundRecord> = (0..7)
            .map(|i| fund(&format!("元大基金{i}"), "元大投信"))
            .collect();
        funds.push(fund("富邦精選", "富邦投信"));

        let picked = select_popular_with(&funds, &["元大", "富邦"], 8);
        assert_eq!(picked[5].fund_name, "富邦精選");
        // The two overflow 元大 funds return during backfill.
        assert_eq!(picked.len(), 8);
    }

    #[test]
    fn fund_matching_two_issuers_is_selected_once() {
        let funds = vec![
            fund("元大富邦聯名", "元大投信"),
            fund("其他基金", "其他投信"),
        ];
        let picked = select_popular_with(&funds, &["元大", "富邦"], 10);
        assert_eq!(picked.len(), 2);
        let joint = picked
            .iter()
            .filter(|f| f.fund_name == "元大富邦聯名")
            .count();
        assert_eq!(joint, 1);
    }

    #[test]
    fn equal_valued_records_at_different_positions_both_count() {
        let dup = fund("全球債券", "某某投信");
        let funds = vec![dup.clone(), dup.clone(), fund("元大台灣50", "元大投信")];

        let picked = select_popular_with(&funds, &["元大"], 3);

        assert_eq!(picked.len(), 3);
        let dup_count = picked
            .iter()
            .filter(|f| f.fund_name == "全球債券")
            .count();
        assert_eq!(dup_count, 2);
    }

    #[test]
    fn output_length_is_min_of_limit_and_total() {
        let funds = vec![fund("甲", "甲投信"), fund("乙", "乙投信")];
        assert_eq!(select_popular(&funds, 100).len(), 2);
        assert_eq!(select_popular(&funds, 1).len(), 1);
        assert_eq!(select_popular(&funds, 0).len(), 0);
    }

    #[test]
    fn stops_scanning_issuers_once_limit_reached() {
        let funds = vec![
            fund("元大一", "元大投信"),
            fund("元大二", "元大投信"),
            fund("富邦一", "富邦投信"),
        ];
        let picked = select_popular_with(&funds, &["元大", "富邦"], 2);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|f| f.company == "元大投信"));
    }
}
