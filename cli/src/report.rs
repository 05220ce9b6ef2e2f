use sales_core::{format_currency, DashboardSnapshot, View};
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::tui::ui::NO_DATA_FOR_YEAR;

#[derive(Tabled)]
struct YearlyRow {
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Total Sales")]
    total: String,
    #[tabled(rename = "Growth")]
    growth: String,
}

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Total Sales")]
    total: String,
}

#[derive(Tabled)]
struct WeeklyRow {
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Sales Amount")]
    amount: String,
}

pub fn render(snapshot: &DashboardSnapshot) -> String {
    match snapshot.view {
        View::Yearly => yearly_report(snapshot),
        View::Monthly => monthly_report(snapshot),
        View::Weekly => weekly_report(snapshot),
    }
}

fn styled(table: &mut Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table.to_string()
}

fn year_heading(snapshot: &DashboardSnapshot) -> String {
    snapshot
        .selected_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn yearly_report(snapshot: &DashboardSnapshot) -> String {
    if snapshot.yearly.is_empty() {
        return "No sales data loaded.".to_string();
    }

    let rows: Vec<YearlyRow> = snapshot
        .yearly
        .iter()
        .enumerate()
        .map(|(i, item)| YearlyRow {
            year: item.year.to_string(),
            total: format_currency(item.total),
            growth: match snapshot.growth_for(item.year) {
                Some(growth) if i > 0 => growth.label(),
                _ => "-".to_string(),
            },
        })
        .collect();

    format!("Yearly Sales Statistics\n{}", styled(&mut Table::new(rows)))
}

fn monthly_report(snapshot: &DashboardSnapshot) -> String {
    let mut rows: Vec<MonthlyRow> = snapshot
        .monthly
        .iter()
        .map(|m| MonthlyRow {
            month: m.month_name.clone(),
            total: format_currency(m.total),
        })
        .collect();
    rows.push(MonthlyRow {
        month: "Total".to_string(),
        total: format_currency(snapshot.monthly_total),
    });

    format!(
        "{} Monthly Sales Statistics\n{}",
        year_heading(snapshot),
        styled(&mut Table::new(rows))
    )
}

fn weekly_report(snapshot: &DashboardSnapshot) -> String {
    let heading = format!("{} Weekly Sales by Month", year_heading(snapshot));
    if !snapshot.has_weekly_data() {
        return format!("{}\n{}", heading, NO_DATA_FOR_YEAR);
    }

    let mut out = heading;
    for group in &snapshot.weekly_groups {
        let mut rows: Vec<WeeklyRow> = group
            .weeks
            .iter()
            .map(|w| WeeklyRow {
                week: format!("Week {}", w.week),
                amount: format_currency(w.total_amount.as_str()),
            })
            .collect();
        rows.push(WeeklyRow {
            week: "Total".to_string(),
            amount: format_currency(group.total),
        });

        out.push_str(&format!(
            "\n\n{} ({}. month)\n{}",
            group.month_name,
            group.month,
            styled(&mut Table::new(rows))
        ));
    }
    out
}
