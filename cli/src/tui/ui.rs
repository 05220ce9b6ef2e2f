use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, BorderType, Borders, Padding, Paragraph, Row, Table,
        TableState, Tabs,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sales_core::{format_currency, DashboardSnapshot, View};
use unicode_width::UnicodeWidthChar;

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    yearly: Color,
    monthly: Color,
    growth_up: Color,
    growth_down: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    yearly: Color::Indexed(104),
    monthly: Color::Indexed(115),
    growth_up: Color::Green,
    growth_down: Color::Red,
};

// One hue per month, walking the colour wheel.
const MONTH_COLORS: [Color; 12] = [
    Color::Indexed(203),
    Color::Indexed(209),
    Color::Indexed(221),
    Color::Indexed(191),
    Color::Indexed(114),
    Color::Indexed(85),
    Color::Indexed(80),
    Color::Indexed(75),
    Color::Indexed(105),
    Color::Indexed(141),
    Color::Indexed(177),
    Color::Indexed(211),
];

pub const NO_DATA_FOR_YEAR: &str = "No data found for the selected year.";

pub fn month_color(month: u32) -> Color {
    MONTH_COLORS[(month.saturating_sub(1) as usize) % MONTH_COLORS.len()]
}

pub fn draw(f: &mut Frame, app: &App, snapshot: &DashboardSnapshot) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / Tabs
            Constraint::Length(1), // Year selector
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, snapshot.view, main_chunks[0]);
    if snapshot.view != View::Yearly {
        draw_year_selector(f, app, main_chunks[1]);
    }

    match snapshot.view {
        View::Yearly => draw_yearly(f, snapshot, main_chunks[2]),
        View::Monthly => draw_monthly(f, app, snapshot, main_chunks[2]),
        View::Weekly => draw_weekly(f, app, snapshot, main_chunks[2]),
    }

    let help = Line::from(vec![
        Span::styled("VIEW: ", Style::default().fg(THEME.muted)),
        Span::styled("1/2/3 Tab ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("YEAR: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("SCROLL: ", Style::default().fg(THEME.muted)),
        Span::styled("j/k ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_chunks[3]);
}

fn draw_header(f: &mut Frame, view: View, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(1)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "SALES ANALYSIS DASHBOARD",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    f.render_widget(title, header_layout[0]);

    let tabs = Tabs::new(View::ALL.iter().map(|v| format!(" {} ", v.title())))
        .select(view.index())
        .style(Style::default().fg(THEME.muted))
        .highlight_style(Style::default().fg(THEME.text).bg(Color::Blue).add_modifier(Modifier::BOLD))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    f.render_widget(tabs, header_layout[1]);

    let rule = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    f.render_widget(rule, area);
}

fn draw_year_selector(f: &mut Frame, app: &App, area: Rect) {
    let enabled = |on: bool| Style::default().fg(if on { THEME.text } else { THEME.muted });
    let year = app
        .state
        .selected_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "----".to_string());

    let nav = Line::from(vec![
        Span::styled(" < ", enabled(app.state.has_previous_year())),
        Span::styled(format!(" {} ", year), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", enabled(app.state.has_next_year())),
    ]);
    f.render_widget(Paragraph::new(nav).alignment(Alignment::Center), area);
}

// --- Yearly ---

fn draw_yearly(f: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    let bars: Vec<Bar> = snapshot
        .yearly
        .iter()
        .map(|y| amount_bar(y.year.to_string(), y.total, THEME.yearly))
        .collect();
    draw_bar_chart(f, " Yearly Total Sales ", &bars, snapshot.yearly_ceiling, chunks[0]);

    let rows: Vec<Row> = snapshot
        .yearly
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let growth_cell = match snapshot.growth_for(item.year) {
                Some(growth) if i > 0 => Span::styled(growth.label(), growth_style(growth.is_positive())),
                _ => Span::raw("-"),
            };
            Row::new(vec![
                Line::from(item.year.to_string()),
                Line::from(format_currency(item.total)).alignment(Alignment::Right),
                Line::from(growth_cell).alignment(Alignment::Right),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [Constraint::Length(6), Constraint::Min(16), Constraint::Length(10)],
    )
    .header(Row::new(vec!["Year", "Total Sales", "Growth"]).style(Style::default().fg(Color::Yellow)))
    .block(panel(" Yearly Sales Statistics "));
    f.render_widget(table, side[0]);

    let growth_bars: Vec<Bar> = snapshot
        .growth
        .iter()
        .map(|g| {
            let percent = g.growth_percent.unwrap_or(Decimal::ZERO).abs();
            Bar::default()
                .label(Line::from(g.year.to_string()))
                .value(to_bar_value(percent))
                .style(growth_style(g.is_positive()))
                .text_value(g.label())
        })
        .collect();
    let growth_chart = BarChart::default()
        .block(panel(" Yearly Growth Rates (%) "))
        .bar_width(8)
        .bar_gap(2)
        .data(BarGroup::default().bars(&growth_bars));
    f.render_widget(growth_chart, side[1]);
}

// --- Monthly ---

fn draw_monthly(f: &mut Frame, app: &App, snapshot: &DashboardSnapshot, area: Rect) {
    let year = year_label(snapshot);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Length(1),
            Constraint::Percentage(35),
        ])
        .split(area);

    let bars: Vec<Bar> = snapshot
        .monthly
        .iter()
        .map(|m| amount_bar(m.month_name.clone(), m.total, THEME.monthly))
        .collect();
    let title = format!(" {} Monthly Sales ", year);
    draw_bar_chart(f, &title, &bars, snapshot.monthly_ceiling, chunks[0]);

    let mut rows: Vec<Row> = snapshot
        .monthly
        .iter()
        .map(|m| {
            Row::new(vec![
                Line::from(m.month_name.clone()),
                Line::from(format_currency(m.total)).alignment(Alignment::Right),
            ])
        })
        .collect();
    rows.push(total_row(snapshot.monthly_total));

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Min(16)])
        .header(Row::new(vec!["Month", "Total Sales"]).style(Style::default().fg(Color::Yellow)))
        .block(panel(format!(" {} Monthly Sales Statistics ", year)));
    let mut state = TableState::default().with_offset(app.scroll);
    f.render_stateful_widget(table, chunks[2], &mut state);
}

// --- Weekly ---

fn draw_weekly(f: &mut Frame, app: &App, snapshot: &DashboardSnapshot, area: Rect) {
    let year = year_label(snapshot);
    if !snapshot.has_weekly_data() {
        let empty = Paragraph::new(NO_DATA_FOR_YEAR)
            .alignment(Alignment::Center)
            .style(Style::default().fg(THEME.muted))
            .block(panel(format!(" {} Weekly Sales ", year)));
        f.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bars: Vec<Bar> = snapshot
        .weekly
        .iter()
        .map(|w| {
            Bar::default()
                .label(Line::from(w.week.to_string()))
                .value(to_bar_value(w.amount_or_zero()))
                .style(Style::default().fg(month_color(w.month)))
                .text_value(String::new())
        })
        .collect();
    let inner_width = chunks[0].width.saturating_sub(2) as usize;
    let bar_width = (inner_width / bars.len().max(1)).saturating_sub(1).clamp(1, 6) as u16;
    let chart = BarChart::default()
        .block(panel(format!(" {} Weekly Sales ", year)))
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
        .max(to_bar_value(snapshot.weekly_ceiling).max(1));
    f.render_widget(chart, chunks[0]);

    let mut rows: Vec<Row> = Vec::new();
    for group in &snapshot.weekly_groups {
        for (i, week) in group.weeks.iter().enumerate() {
            let month_col = if i == 0 {
                Span::styled(
                    format!("{} ({}. month)", group.month_name, group.month),
                    Style::default().fg(month_color(group.month)),
                )
            } else {
                Span::raw("")
            };
            rows.push(Row::new(vec![
                Line::from(month_col),
                Line::from(format!("Week {}", week.week)).alignment(Alignment::Center),
                Line::from(format_currency(week.total_amount.as_str())).alignment(Alignment::Right),
            ]));
        }
        rows.push(Row::new(vec![
            Line::from(""),
            Line::from("Total"),
            Line::from(format_currency(group.total)).alignment(Alignment::Right),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)));
    }

    let table = Table::new(
        rows,
        [Constraint::Length(20), Constraint::Length(10), Constraint::Min(16)],
    )
    .header(Row::new(vec!["Month", "Week", "Sales Amount"]).style(Style::default().fg(Color::Yellow)))
    .block(panel(format!(" {} Weekly Sales by Month ", year)));
    let mut state = TableState::default().with_offset(app.scroll);
    f.render_stateful_widget(table, chunks[1], &mut state);
}

/// Rows in the scrollable table of the current view.
pub fn table_row_count(snapshot: &DashboardSnapshot) -> usize {
    match snapshot.view {
        View::Yearly => snapshot.yearly.len(),
        View::Monthly => snapshot.monthly.len() + 1,
        View::Weekly => snapshot
            .weekly_groups
            .iter()
            .map(|g| g.weeks.len() + 1)
            .sum(),
    }
}

// --- helpers ---

fn panel<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}

fn total_row<'a>(total: Decimal) -> Row<'a> {
    Row::new(vec![
        Line::from("Total"),
        Line::from(format_currency(total)).alignment(Alignment::Right),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
}

fn growth_style(positive: bool) -> Style {
    Style::default().fg(if positive { THEME.growth_up } else { THEME.growth_down })
}

fn year_label(snapshot: &DashboardSnapshot) -> String {
    snapshot
        .selected_year
        .map(|y| y.to_string())
        .unwrap_or_default()
}

fn amount_bar<'a>(label: String, amount: Decimal, color: Color) -> Bar<'a> {
    Bar::default()
        .label(Line::from(truncate_to_width(&label, 9)))
        .value(to_bar_value(amount))
        .style(Style::default().fg(color))
        .text_value(compact_amount(amount))
}

fn draw_bar_chart(f: &mut Frame, title: &str, bars: &[Bar], ceiling: Decimal, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = (inner_width / bars.len().max(1)).saturating_sub(2).clamp(3, 12) as u16;
    let chart = BarChart::default()
        .block(panel(title))
        .bar_width(bar_width)
        .bar_gap(2)
        .data(BarGroup::default().bars(bars))
        .max(to_bar_value(ceiling).max(1));
    f.render_widget(chart, area);
}

pub fn to_bar_value(amount: Decimal) -> u64 {
    amount.max(Decimal::ZERO).round().to_u64().unwrap_or(u64::MAX)
}

/// Short bar caption: `950`, `12.5K`, `3.4M`.
pub fn compact_amount(amount: Decimal) -> String {
    let value = amount.to_f64().unwrap_or(0.0);
    let magnitude = value.abs();
    if magnitude >= 1_000_000_000.0 {
        format!("{:.1}B", value / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}
