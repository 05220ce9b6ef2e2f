use rust_decimal::Decimal;

use crate::model::record::{Dataset, SalesRecord};
use crate::model::summary::{MonthWeeks, MonthlyTotal, YearlyGrowth, YearlyTotal};
use crate::service::aggregator::{
    axis_ceiling, monthly_for_year, monthly_totals, sum_totals, weekly_for_year, weeks_by_month,
    yearly_growth, yearly_totals,
};
use crate::state::{DashboardState, View};

/// Everything one frame of the dashboard shows, derived from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub view: View,
    pub selected_year: Option<i32>,
    pub yearly: Vec<YearlyTotal>,
    pub growth: Vec<YearlyGrowth>,
    pub yearly_ceiling: Decimal,
    pub monthly: Vec<MonthlyTotal>,
    pub monthly_total: Decimal,
    pub monthly_ceiling: Decimal,
    pub weekly: Vec<SalesRecord>,
    pub weekly_groups: Vec<MonthWeeks>,
    pub weekly_ceiling: Decimal,
}

impl DashboardSnapshot {
    pub fn build(dataset: &Dataset, state: &DashboardState) -> Self {
        let yearly = yearly_totals(&dataset.records);
        let growth = yearly_growth(&yearly);
        let yearly_ceiling = axis_ceiling(yearly.iter().map(|y| y.total));

        let (monthly, weekly) = match state.selected_year {
            Some(year) => (
                monthly_for_year(&monthly_totals(&dataset.records), year),
                weekly_for_year(&dataset.records, year),
            ),
            None => (Vec::new(), Vec::new()),
        };
        let monthly_total = sum_totals(monthly.iter().map(|m| m.total));
        let monthly_ceiling = axis_ceiling(monthly.iter().map(|m| m.total));
        let weekly_groups = weeks_by_month(&weekly);
        let weekly_ceiling = axis_ceiling(weekly.iter().map(SalesRecord::amount_or_zero));

        Self {
            view: state.view,
            selected_year: state.selected_year,
            yearly,
            growth,
            yearly_ceiling,
            monthly,
            monthly_total,
            monthly_ceiling,
            weekly,
            weekly_groups,
            weekly_ceiling,
        }
    }

    /// Growth row for a year; `None` for the first year of the series.
    pub fn growth_for(&self, year: i32) -> Option<&YearlyGrowth> {
        self.growth.iter().find(|g| g.year == year)
    }

    pub fn has_weekly_data(&self) -> bool {
        !self.weekly.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            SalesRecord::new(2023, 1, "Ocak", 1, "100,00"),
            SalesRecord::new(2023, 1, "Ocak", 2, "50,00"),
            SalesRecord::new(2024, 2, "Şubat", 6, "300.00"),
            SalesRecord::new(2024, 1, "Ocak", 1, "200,00"),
        ])
    }

    #[test]
    fn test_snapshot_for_latest_year() {
        let data = dataset();
        let state = DashboardState::loaded(data.years.clone());
        let snapshot = DashboardSnapshot::build(&data, &state);

        assert_eq!(snapshot.view, View::Yearly);
        assert_eq!(snapshot.selected_year, Some(2024));
        assert_eq!(snapshot.yearly.len(), 2);
        assert_eq!(snapshot.growth.len(), 1);
        assert!(snapshot.growth_for(2023).is_none());
        assert_eq!(snapshot.growth_for(2024).unwrap().label(), "+233.33%");

        assert_eq!(snapshot.monthly.iter().map(|m| m.month).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(snapshot.monthly_total.to_string(), "500.00");
        assert_eq!(snapshot.monthly_ceiling, Decimal::from(330));
        assert_eq!(snapshot.weekly.iter().map(|w| w.week).collect::<Vec<_>>(), vec![1, 6]);
        assert_eq!(snapshot.weekly_groups.len(), 2);
    }

    #[test]
    fn test_year_without_records_has_no_weekly_data() {
        let data = dataset();
        let state = DashboardState::loaded(data.years.clone())
            .reduce(Action::SetView(View::Weekly))
            .reduce(Action::SelectYear(2019));
        let snapshot = DashboardSnapshot::build(&data, &state);

        assert!(!snapshot.has_weekly_data());
        assert!(snapshot.weekly_groups.is_empty());
        assert!(snapshot.monthly.is_empty());
        assert_eq!(snapshot.weekly_ceiling, Decimal::ZERO);
        assert_eq!(snapshot.yearly.len(), 2);
    }

    #[test]
    fn test_empty_dataset_gives_empty_snapshot() {
        let data = Dataset::default();
        let snapshot = DashboardSnapshot::build(&data, &DashboardState::loaded(Vec::new()));
        assert!(snapshot.yearly.is_empty());
        assert!(snapshot.growth.is_empty());
        assert!(snapshot.monthly.is_empty());
        assert_eq!(snapshot.yearly_ceiling, Decimal::ZERO);
    }

    #[test]
    fn test_snapshot_with_amounts_past_decimal_range() {
        let data = Dataset::new(vec![
            SalesRecord::new(2023, 1, "Ocak", 1, "1.00"),
            SalesRecord::new(2024, 1, "Ocak", 1, "50,000,000,000,000,000,000,000,000,000.00"),
            SalesRecord::new(2024, 1, "Ocak", 2, "50,000,000,000,000,000,000,000,000,000.00"),
        ]);
        let snapshot = DashboardSnapshot::build(&data, &DashboardState::loaded(data.years.clone()));

        assert_eq!(snapshot.yearly[1].total, Decimal::MAX);
        assert_eq!(snapshot.growth_for(2024).unwrap().label(), "n/a");
        assert_eq!(snapshot.yearly_ceiling, Decimal::MAX);
        assert_eq!(snapshot.monthly_total, Decimal::MAX);
    }
}
