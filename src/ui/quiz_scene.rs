//! Gear finder quiz scene.

use crate::app::Kiosk;
use crate::catalog::product_by_name;
use crate::quiz::QuizStep;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_quiz(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let quiz = &kiosk.quiz;
    let accent = kiosk.prefs.accent.color();

    let title = match quiz.step {
        QuizStep::Result => " Gear Finder · Results ".to_string(),
        _ => format!(" Gear Finder · Question {}/3 ", quiz.step.number()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if quiz.step == QuizStep::Result {
        render_results(frame, inner, kiosk);
        return;
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.step.prompt(),
            Style::default()
                .fg(kiosk.prefs.theme.text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, label) in quiz.option_labels().iter().enumerate() {
        let selected = i == quiz.cursor;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{label}"),
            style,
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_results(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Picked for you:",
            Style::default()
                .fg(kiosk.prefs.theme.text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for name in kiosk.quiz.recommendations() {
        let price = product_by_name(name)
            .map(|p| format!("  ${}", p.price_usd))
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled("★ ", Style::default().fg(Color::Yellow)),
            Span::styled(name, Style::default().fg(kiosk.prefs.theme.text())),
            Span::styled(price, Style::default().fg(Color::Yellow)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "+10 points earned · [r] to retake",
        Style::default().fg(Color::Green),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
