use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::record::SalesRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct YearlyTotal {
    pub year: i32,
    pub total: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub total: Decimal,
}

/// Growth against the previous year in the series.
///
/// `growth_percent` is `None` when the previous year's total is zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct YearlyGrowth {
    pub year: i32,
    pub growth_percent: Option<Decimal>,
}

impl YearlyGrowth {
    pub fn is_positive(&self) -> bool {
        self.growth_percent.map(|p| p >= Decimal::ZERO).unwrap_or(false)
    }

    /// `+33.33%`, `-12.50%` or `n/a`.
    pub fn label(&self) -> String {
        match self.growth_percent {
            Some(p) if p >= Decimal::ZERO => format!("+{}%", p),
            Some(p) => format!("{}%", p),
            None => "n/a".to_string(),
        }
    }
}

/// The weeks of one month within a year, in (month, week) order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthWeeks {
    pub month: u32,
    pub month_name: String,
    pub weeks: Vec<SalesRecord>,
    pub total: Decimal,
}
