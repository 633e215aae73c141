//! Memory match scene: 4x4 card grid with an info panel.

use crate::app::Kiosk;
use crate::constants::MEMORY_PAIRS;
use crate::memory::{MemoryGame, GRID_SIDE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_memory(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(26)])
        .split(area);

    match &kiosk.memory {
        Some(game) => {
            render_grid(frame, chunks[0], kiosk, game);
            render_info_panel(frame, chunks[1], kiosk, game);
            if game.board.is_complete() {
                render_win_overlay(frame, chunks[0], kiosk, game);
            }
        }
        None => {
            let block = Block::default()
                .title(" Memory Match ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(kiosk.prefs.accent.color()));
            let inner = block.inner(chunks[0]);
            frame.render_widget(block, chunks[0]);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Press [r] to deal the cards.",
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(Alignment::Center),
                inner,
            );
        }
    }
}

fn render_grid(frame: &mut Frame, area: Rect, kiosk: &Kiosk, game: &MemoryGame) {
    let block = Block::default()
        .title(" Memory Match ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(kiosk.prefs.accent.color()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Each card is 4 chars wide, 2 rows tall
    let grid_width = (GRID_SIDE * 4) as u16;
    let grid_height = (GRID_SIDE * 2) as u16;
    let x_offset = inner.x + inner.width.saturating_sub(grid_width) / 2;
    let y_offset = inner.y + inner.height.saturating_sub(grid_height) / 2;

    for row in 0..GRID_SIDE {
        let mut spans = Vec::new();
        for col in 0..GRID_SIDE {
            let card = &game.board.cards[row * GRID_SIDE + col];
            let is_cursor = game.board.cursor == (row, col);

            let (text, color) = if card.matched {
                (format!(" {} ", card.symbol), Color::Green)
            } else if card.face_up {
                (format!(" {} ", card.symbol), kiosk.prefs.theme.text())
            } else {
                (" ▒▒ ".to_string(), Color::DarkGray)
            };

            let mut style = Style::default().fg(color);
            if is_cursor && !game.board.is_complete() {
                style = style.bg(Color::DarkGray);
            }
            spans.push(Span::styled(text, style));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y_offset + (row * 2) as u16, grid_width, 1),
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, kiosk: &Kiosk, game: &MemoryGame) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = if game.board.is_complete() {
        Span::styled("All pairs found!", Style::default().fg(Color::Green))
    } else if game.is_locked() {
        Span::styled("No match...", Style::default().fg(Color::Red))
    } else {
        Span::styled("Find the pairs", Style::default().fg(Color::Yellow))
    };

    let lines = vec![
        Line::from(Span::styled(
            "Memory Match",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Pairs: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.board.matched_pairs, MEMORY_PAIRS),
                Style::default().fg(kiosk.prefs.theme.text()),
            ),
        ]),
        Line::from(vec![
            Span::styled("Moves: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.board.moves),
                Style::default().fg(kiosk.prefs.theme.text()),
            ),
        ]),
        Line::from(""),
        Line::from(status),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_win_overlay(frame: &mut Frame, area: Rect, kiosk: &Kiosk, game: &MemoryGame) {
    let overlay = super::centered_rect(area, 30, 6);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(Span::styled(
            "You win!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} moves", game.board.moves),
            Style::default().fg(kiosk.prefs.theme.text()),
        )),
        Line::from(Span::styled(
            "[r] Play again",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
