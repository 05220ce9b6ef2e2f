use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::parse_amount;

/// One weekly sales observation, as it appears in the source document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    #[serde(rename = "yil")]
    pub year: i32,
    #[serde(rename = "ay")]
    pub month: u32,
    #[serde(rename = "ay_adi")]
    pub month_name: String,
    #[serde(rename = "hafta")]
    pub week: u32,
    // Kept as the raw string; grouping separators vary between exports.
    #[serde(rename = "toplam_tutar")]
    pub total_amount: String,
}

impl SalesRecord {
    pub fn new(year: i32, month: u32, month_name: &str, week: u32, total_amount: &str) -> Self {
        Self {
            year,
            month,
            month_name: month_name.to_string(),
            week,
            total_amount: total_amount.to_string(),
        }
    }

    /// Parsed amount, `None` when the string is not numeric.
    pub fn amount(&self) -> Option<Decimal> {
        parse_amount(&self.total_amount)
    }

    /// Parsed amount with unparseable values counted as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount().unwrap_or(Decimal::ZERO)
    }
}

/// Raw records plus the sorted set of years they cover.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<SalesRecord>,
    pub years: Vec<i32>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        let years = crate::service::aggregator::distinct_years(&records);
        Self { records, years }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }
}
