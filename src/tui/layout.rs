//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table};

use super::style;
use super::{App, View};
use crate::model::palette::ChartSlice;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // breakdown
            Constraint::Length(6), // costs + advice
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_breakdown(frame, app, chunks[1]);
    render_summary(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let view = match app.view {
        View::Usage => "appliances",
        View::Tenants => "tenants",
    };
    let header = Line::from(vec![
        Span::styled(
            " ENERGY ADVISOR ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {:.2} kWh/month │ cheapest: {} │ view: {view} ",
            app.report.total_kwh, app.report.cheapest
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Legend table on the left, bar chart on the right; both share row colours.
fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let (title, slices, rows) = match app.view {
        View::Usage => {
            let slices = app.report.usage_distribution();
            let rows: Vec<Row> = app
                .report
                .usage
                .iter()
                .zip(&slices)
                .map(|(u, s)| {
                    Row::new(vec![
                        Cell::from(u.appliance_name.clone())
                            .style(Style::default().fg(style::rgb(s.color))),
                        Cell::from(u.quantity.to_string()),
                        Cell::from(format!("{:.2}", u.hours_per_day)),
                        Cell::from(format!("{:.0}", u.rated_power_watts)),
                        Cell::from(format!("{:.2}", u.monthly_kwh)),
                        Cell::from(format!("{:.1}%", s.share_pct)),
                    ])
                })
                .collect();
            (" Appliances ", slices, rows)
        }
        View::Tenants => {
            let slices = app.report.tenant_distribution();
            let rows: Vec<Row> = app
                .report
                .tenants
                .iter()
                .zip(&slices)
                .map(|(t, s)| {
                    Row::new(vec![
                        Cell::from(t.tenant_label.clone())
                            .style(Style::default().fg(style::rgb(s.color))),
                        Cell::from(t.selected_appliance_names.len().to_string()),
                        Cell::from(""),
                        Cell::from(""),
                        Cell::from(format!("{:.2}", t.monthly_kwh)),
                        Cell::from(format!("{:.2}", t.estimated_solar_cost)),
                    ])
                })
                .collect();
            (" Smart plan tenants ", slices, rows)
        }
    };

    let header = match app.view {
        View::Usage => Row::new(vec!["Appliance", "Qty", "Hrs", "W", "kWh", "Share"]),
        View::Tenants => Row::new(vec!["Tenant", "Items", "", "", "kWh", "Solar cost"]),
    }
    .style(Style::default().add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Min(16),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(11),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, chunks[0]);

    render_distribution(frame, &slices, chunks[1]);
}

fn render_distribution(frame: &mut Frame, slices: &[ChartSlice], area: Rect) {
    let block = Block::default().title(" Distribution ").borders(Borders::ALL);
    if slices.is_empty() {
        frame.render_widget(Paragraph::new("  nothing to chart").block(block), area);
        return;
    }

    let bars: Vec<Bar> = slices
        .iter()
        .map(|s| {
            Bar::default()
                .value(s.share_pct.round() as u64)
                .text_value(format!("{:.0}%", s.share_pct))
                .label(Line::from(s.label.chars().take(8).collect::<String>()))
                .style(Style::default().fg(style::rgb(s.color)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(8)
        .bar_gap(1)
        .max(100)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Cost per source on the left, advice on the right.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(20)])
        .split(area);

    let cost_lines: Vec<Line> = app
        .report
        .estimates
        .iter()
        .map(|e| {
            let mut label_style = Style::default().fg(style::source_color(e.source));
            if e.source == app.report.cheapest {
                label_style = label_style
                    .fg(style::CHEAPEST_FG)
                    .add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!("  {:<10}", e.source.label()), label_style),
                Span::raw(format!("@{:>6.2}  {:>12.2}", e.rate, e.estimated_cost)),
            ])
        })
        .collect();
    let costs = Paragraph::new(cost_lines)
        .block(Block::default().title(" Monthly cost ").borders(Borders::ALL));
    frame.render_widget(costs, chunks[0]);

    let tip_lines: Vec<Line> = if app.report.advice.is_empty() {
        vec![Line::from(format!(
            "  {} is already your cheapest option.",
            app.report.cheapest
        ))]
    } else {
        app.report
            .advice
            .iter()
            .map(|tip| {
                Line::from(vec![
                    Span::styled("  • ", Style::default().fg(style::TIP_FG)),
                    Span::raw(tip.as_str()),
                ])
            })
            .collect()
    };
    let advice = Paragraph::new(tip_lines)
        .block(Block::default().title(" Recommendations ").borders(Borders::ALL));
    frame.render_widget(advice, chunks[1]);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Tab:Appliances/Tenants",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
