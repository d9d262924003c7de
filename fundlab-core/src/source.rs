//! Source feed schemas — the three NAV feeds and their column layouts.
//!
//! Each feed publishes header-rowed CSV in its own schema, and each has
//! its own notion of a primary fund identifier:
//! - SITCA domestic funds key on the registration number (基金統編)
//! - TDCC offshore funds key on the ISIN (ISINCODE)
//! - TDCC futures-trust funds key on the fund code (基金代碼)

/// Which of the three feeds a spec describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Domestic,
    Offshore,
    Futures,
}

/// Static schema description for one feed.
///
/// Reconciliation and normalization are entirely driven by this: which
/// column is the primary identifier, where the display fields live, and
/// which defaults apply when a field is blank.
#[derive(Debug)]
pub struct SourceSpec {
    pub kind: SourceKind,
    /// Short name used in progress messages.
    pub name: &'static str,
    /// Column holding the feed's primary (unique) fund identifier.
    pub key_column: &'static str,
    /// Column holding the NAV date. The feeds publish zero-padded ISO
    /// dates, so lexical order is chronological order.
    pub date_column: &'static str,
    pub code_column: &'static str,
    pub name_column: &'static str,
    pub isin_column: &'static str,
    pub nav_column: &'static str,
    pub currency_column: &'static str,
    pub company_column: &'static str,
    /// Category label stamped on every record from this feed.
    pub type_label: &'static str,
    pub region: &'static str,
    /// Used when the currency column is blank.
    pub default_currency: &'static str,
    /// Whether a blank ISIN falls back to the primary identifier.
    pub isin_falls_back_to_key: bool,
}

/// SITCA domestic fund NAVs.
pub static DOMESTIC: SourceSpec = SourceSpec {
    kind: SourceKind::Domestic,
    name: "domestic",
    key_column: "基金統編",
    date_column: "日期",
    code_column: "基金代號",
    name_column: "基金名稱",
    isin_column: "受益憑證代號",
    nav_column: "基金淨值",
    currency_column: "幣別",
    company_column: "公司名稱",
    type_label: "境內基金",
    region: "境內",
    default_currency: "TWD",
    isin_falls_back_to_key: true,
};

/// TDCC offshore fund NAVs. The primary identifier is the ISIN itself.
pub static OFFSHORE: SourceSpec = SourceSpec {
    kind: SourceKind::Offshore,
    name: "offshore",
    key_column: "ISINCODE",
    date_column: "日期",
    code_column: "基金代碼",
    name_column: "基金名稱",
    isin_column: "ISINCODE",
    nav_column: "基金淨值(金額)",
    currency_column: "計價幣別",
    company_column: "境外基金機構",
    type_label: "境外基金",
    region: "境外",
    default_currency: "USD",
    isin_falls_back_to_key: false,
};

/// TDCC futures-trust fund NAVs. The primary identifier is the fund code;
/// a blank ISIN stays blank.
pub static FUTURES: SourceSpec = SourceSpec {
    kind: SourceKind::Futures,
    name: "futures",
    key_column: "基金代碼",
    date_column: "淨值日期",
    code_column: "基金代碼",
    name_column: "基金名稱",
    isin_column: "ISIN",
    nav_column: "淨值",
    currency_column: "計價幣別",
    company_column: "期信機構",
    type_label: "期信基金",
    region: "境外",
    default_currency: "USD",
    isin_falls_back_to_key: false,
};

impl SourceSpec {
    /// The three feeds in fetch/processing order.
    pub fn all() -> [&'static SourceSpec; 3] {
        [&DOMESTIC, &OFFSHORE, &FUTURES]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_order_is_domestic_offshore_futures() {
        let kinds: Vec<SourceKind> = SourceSpec::all().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SourceKind::Domestic, SourceKind::Offshore, SourceKind::Futures]
        );
    }

    #[test]
    fn offshore_keys_on_isin() {
        assert_eq!(OFFSHORE.key_column, OFFSHORE.isin_column);
    }

    #[test]
    fn only_domestic_falls_back_isin_to_key() {
        assert!(DOMESTIC.isin_falls_back_to_key);
        assert!(!OFFSHORE.isin_falls_back_to_key);
        assert!(!FUTURES.isin_falls_back_to_key);
    }
}
