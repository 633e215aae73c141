//! Side-by-side comparison scene.
//!
//! Renders up to three read-only product summary panels — the cloned cards
//! of the original page, with interactive controls stripped.

use crate::app::Kiosk;
use crate::catalog::product_by_name;
use crate::constants::COMPARE_MAX;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_compare(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let block = Block::default()
        .title(format!(
            " Compare ({}/{}) ",
            kiosk.compare.len(),
            COMPARE_MAX
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(kiosk.prefs.accent.color()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if kiosk.compare.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nothing to compare yet. Press [c] on a catalog product.",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let constraints: Vec<Constraint> = kiosk
        .compare
        .names()
        .iter()
        .map(|_| Constraint::Ratio(1, kiosk.compare.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (column, name) in columns.iter().zip(kiosk.compare.names()) {
        render_product_panel(frame, *column, kiosk, name);
    }
}

fn render_product_panel(frame: &mut Frame, area: Rect, kiosk: &Kiosk, name: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // A stale name with no catalog entry renders as an empty panel
    let Some(product) = product_by_name(name) else {
        return;
    };

    let fav = if kiosk.favorites.contains(product.name) {
        "♥ favorited"
    } else {
        ""
    };

    let lines = vec![
        Line::from(Span::styled(
            product.name,
            Style::default()
                .fg(kiosk.prefs.theme.text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            product.category.name(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("${}", product.price_usd),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            product.blurb,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} clicks", kiosk.trending.count(product.name)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(fav, Style::default().fg(Color::Red))),
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}
