//! Achievement board and interaction stats.

use crate::achievements::ALL_ACHIEVEMENTS;
use crate::app::Kiosk;
use crate::stats::Metric;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_achievements(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(area);

    render_board(frame, chunks[0], kiosk);
    render_stats_panel(frame, chunks[1], kiosk);
}

fn render_board(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let block = Block::default()
        .title(format!(
            " Achievements ({}/{}) ",
            kiosk.achievements.unlocked_count(),
            ALL_ACHIEVEMENTS.len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(kiosk.prefs.accent.color()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for def in ALL_ACHIEVEMENTS {
        let unlocked = kiosk.achievements.is_unlocked(def.id);
        let progress = kiosk.stats.get(def.metric).min(def.threshold);

        let (icon, name_style) = if unlocked {
            (
                def.icon,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("🔒", Style::default().fg(Color::DarkGray))
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{icon} "), Style::default()),
            Span::styled(def.name, name_style),
            Span::styled(
                format!("  {}/{}", progress, def.threshold),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", def.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stats_panel(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let block = Block::default()
        .title(" Your stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Points: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", kiosk.points.total()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
    ];

    for metric in Metric::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", metric.label()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{}", kiosk.stats.get(metric)),
                Style::default().fg(kiosk.prefs.theme.text()),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Favorites: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", kiosk.favorites.len()),
            Style::default().fg(Color::Red),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
