use rust_decimal::Decimal;

use crate::amount::round_money;
use crate::model::record::SalesRecord;
use crate::model::summary::{MonthWeeks, MonthlyTotal, YearlyGrowth, YearlyTotal};

const HEADROOM_PERCENT: i64 = 110;

/// Sorted, deduplicated years present in the records.
pub fn distinct_years(records: &[SalesRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Sum of the amounts. A sum past the `Decimal` range is capped at
/// `Decimal::MAX` (or `Decimal::MIN` for a negative overflow).
pub fn sum_totals(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    let mut total = Decimal::ZERO;
    for amount in amounts {
        match total.checked_add(amount) {
            Some(sum) => total = sum,
            None => {
                let capped = if amount.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                };
                tracing::warn!(%total, %amount, %capped, "Sales total out of range, capping");
                return capped;
            }
        }
    }
    total
}

fn sum_records<'a>(records: impl Iterator<Item = &'a SalesRecord>) -> Decimal {
    sum_totals(records.map(SalesRecord::amount_or_zero))
}

pub fn yearly_totals(records: &[SalesRecord]) -> Vec<YearlyTotal> {
    distinct_years(records)
        .into_iter()
        .map(|year| YearlyTotal {
            year,
            total: round_money(sum_records(records.iter().filter(|r| r.year == year))),
        })
        .collect()
}

/// Totals per (year, month), years ascending then months 1..=12.
///
/// Months without records are skipped. The month name comes from the first
/// matching record.
pub fn monthly_totals(records: &[SalesRecord]) -> Vec<MonthlyTotal> {
    let mut summary = Vec::new();
    for year in distinct_years(records) {
        for month in 1..=12 {
            let mut matching = records.iter().filter(|r| r.year == year && r.month == month).peekable();
            let Some(first) = matching.peek() else {
                continue;
            };
            let month_name = first.month_name.clone();
            summary.push(MonthlyTotal {
                year,
                month,
                month_name,
                total: round_money(sum_records(matching)),
            });
        }
    }
    summary
}

/// Year-over-year growth for every year after the first.
pub fn yearly_growth(totals: &[YearlyTotal]) -> Vec<YearlyGrowth> {
    totals
        .windows(2)
        .map(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            let growth_percent = current
                .total
                .checked_sub(previous.total)
                .and_then(|delta| delta.checked_div(previous.total))
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .map(round_money);
            YearlyGrowth {
                year: current.year,
                growth_percent,
            }
        })
        .collect()
}

/// Records of one year ordered by (month, week).
pub fn weekly_for_year(records: &[SalesRecord], year: i32) -> Vec<SalesRecord> {
    let mut weekly: Vec<SalesRecord> = records.iter().filter(|r| r.year == year).cloned().collect();
    weekly.sort_by_key(|r| (r.month, r.week));
    weekly
}

pub fn monthly_for_year(monthly: &[MonthlyTotal], year: i32) -> Vec<MonthlyTotal> {
    let mut filtered: Vec<MonthlyTotal> = monthly.iter().filter(|m| m.year == year).cloned().collect();
    filtered.sort_by_key(|m| m.month);
    filtered
}

/// Groups an already ordered weekly series by month, keeping first-seen order.
pub fn weeks_by_month(weekly: &[SalesRecord]) -> Vec<MonthWeeks> {
    let mut groups: Vec<MonthWeeks> = Vec::new();
    for record in weekly {
        match groups.iter_mut().find(|g| g.month == record.month) {
            Some(group) => group.weeks.push(record.clone()),
            None => groups.push(MonthWeeks {
                month: record.month,
                month_name: record.month_name.clone(),
                weeks: vec![record.clone()],
                total: Decimal::ZERO,
            }),
        }
    }
    for group in &mut groups {
        group.total = round_money(sum_records(group.weeks.iter()));
    }
    groups
}

/// Upper bound for a chart axis: the largest value plus 10%, rounded up.
pub fn axis_ceiling(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .max()
        .map(|max| {
            max.checked_mul(Decimal::new(HEADROOM_PERCENT, 2))
                .unwrap_or(max)
                .ceil()
        })
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}
