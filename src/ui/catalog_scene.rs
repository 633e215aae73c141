//! Catalog browsing scene: search, filter, sort, product list, trending.

use crate::app::Kiosk;
use crate::catalog::Product;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

/// Render the catalog scene: list on the left, trending panel on the right.
pub fn render_catalog(frame: &mut Frame, area: Rect, kiosk: &Kiosk, search_mode: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    render_product_list(frame, chunks[0], kiosk, search_mode);
    render_trending_panel(frame, chunks[1], kiosk);
}

fn render_product_list(frame: &mut Frame, area: Rect, kiosk: &Kiosk, search_mode: bool) {
    let accent = kiosk.prefs.accent.color();
    let filter_name = match kiosk.view.filter {
        Some(category) => category.name(),
        None => "All",
    };

    let block = Block::default()
        .title(format!(
            " Products · {} · sort: {} ",
            filter_name,
            kiosk.view.sort.name()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    // Search line; a trailing block cursor marks typing mode
    let query_text = if search_mode {
        format!("{}█", kiosk.view.query)
    } else if kiosk.view.query.is_empty() {
        "(press / to search)".to_string()
    } else {
        kiosk.view.query.clone()
    };
    let search = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            query_text,
            Style::default().fg(if kiosk.view.query.is_empty() && !search_mode {
                Color::DarkGray
            } else {
                kiosk.prefs.theme.text()
            }),
        ),
    ]);
    frame.render_widget(Paragraph::new(search), rows[0]);

    let visible = kiosk.view.visible();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No products match.",
                Style::default().fg(Color::DarkGray),
            )),
            rows[1],
        );
        return;
    }

    let rows_per_entry = kiosk.prefs.density.rows_per_entry();
    let mut lines: Vec<Line> = Vec::new();
    for (i, product) in visible.iter().enumerate() {
        let selected = i == kiosk.view.selected.min(visible.len() - 1);
        lines.extend(product_lines(kiosk, product, selected, rows_per_entry));
    }
    frame.render_widget(Paragraph::new(lines), rows[1]);
}

/// Lines for one catalog entry, sized by the density preference.
fn product_lines(
    kiosk: &Kiosk,
    product: &Product,
    selected: bool,
    rows_per_entry: u16,
) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let fav = if kiosk.favorites.contains(product.name) {
        "♥"
    } else {
        " "
    };
    let cmp = if kiosk.compare.contains(product.name) {
        "⚖"
    } else {
        " "
    };

    let name_style = if selected {
        Style::default()
            .fg(kiosk.prefs.accent.color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(kiosk.prefs.theme.text())
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(kiosk.prefs.theme.text())),
        Span::styled(format!("{fav}{cmp} "), Style::default().fg(Color::Red)),
        Span::styled(product.name.to_string(), name_style),
        Span::styled(
            format!("  ${}", product.price_usd),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    if rows_per_entry >= 2 {
        lines.push(Line::from(Span::styled(
            format!("      {} · {}", product.category.name(), product.blurb),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if rows_per_entry >= 3 {
        lines.push(Line::from(""));
    }
    lines
}

/// Right panel: top-3 leaderboard plus per-category click chart.
fn render_trending_panel(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    render_leaderboard(frame, chunks[0], kiosk);
    render_category_chart(frame, chunks[1], kiosk);
}

fn render_leaderboard(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let block = Block::default()
        .title(" Trending ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = kiosk.trending.leaderboard();
    let mut lines: Vec<Line> = Vec::new();
    if board.is_empty() {
        lines.push(Line::from(Span::styled(
            "No clicks yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, (name, count)) in board.iter().enumerate() {
        let medal = match i {
            0 => "🥇",
            1 => "🥈",
            _ => "🥉",
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{medal} "), Style::default()),
            Span::styled(truncated(name, 22), Style::default().fg(kiosk.prefs.theme.text())),
            Span::styled(format!(" ×{count}"), Style::default().fg(Color::Yellow)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Category aggregate handed to the chart widget.
fn render_category_chart(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let block = Block::default()
        .title(" Clicks by category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let totals = kiosk.trending.category_totals();
    let data: Vec<(&str, u64)> = totals
        .iter()
        .map(|&(label, value)| (short_label(label), value))
        .collect();

    let chart = BarChart::default()
        .data(&data)
        .bar_width(4)
        .bar_gap(1)
        .bar_style(Style::default().fg(kiosk.prefs.accent.color()))
        .value_style(Style::default().fg(kiosk.prefs.theme.text()));
    frame.render_widget(chart, inner);
}

fn truncated(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Four-character chart labels so six bars fit in the side panel.
fn short_label(label: &str) -> &'static str {
    match label {
        "Head Straps" => "Strp",
        "Controllers" => "Ctrl",
        "Tracking" => "Trck",
        "Chairs & Mounts" => "Chr",
        "Audio" => "Aud",
        _ => "Hyg",
    }
}
