//! Terminal UI: header, footer, and scene dispatch.

pub mod achievements_scene;
pub mod catalog_scene;
pub mod compare_scene;
pub mod effects;
pub mod memory_scene;
pub mod quiz_scene;

use crate::app::Kiosk;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Top-level screens reachable from the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Compare,
    Quiz,
    Memory,
    Achievements,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Catalog => "Catalog",
            Screen::Compare => "Compare",
            Screen::Quiz => "Gear Finder",
            Screen::Memory => "Memory Match",
            Screen::Achievements => "Achievements",
        }
    }
}

/// Main UI drawing function.
pub fn draw_ui(
    frame: &mut Frame,
    kiosk: &Kiosk,
    screen: Screen,
    search_mode: bool,
    celebration: &mut effects::CelebrationEffect,
) {
    let size = frame.size();

    // Theme background behind everything
    frame.render_widget(
        Block::default().style(
            Style::default()
                .bg(kiosk.prefs.theme.background())
                .fg(kiosk.prefs.theme.text()),
        ),
        size,
    );

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Scene content
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_header(frame, v_chunks[0], kiosk, screen);

    match screen {
        Screen::Catalog => catalog_scene::render_catalog(frame, v_chunks[1], kiosk, search_mode),
        Screen::Compare => compare_scene::render_compare(frame, v_chunks[1], kiosk),
        Screen::Quiz => quiz_scene::render_quiz(frame, v_chunks[1], kiosk),
        Screen::Memory => memory_scene::render_memory(frame, v_chunks[1], kiosk),
        Screen::Achievements => {
            achievements_scene::render_achievements(frame, v_chunks[1], kiosk)
        }
    }

    draw_footer(frame, v_chunks[2], kiosk, screen);

    // Celebration overlay sits on top of whatever scene is active
    celebration.render(frame, size);
}

/// Header: app title, active screen, points and tier badge.
fn draw_header(frame: &mut Frame, area: Rect, kiosk: &Kiosk, screen: Screen) {
    let accent = kiosk.prefs.accent.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tier_text = match kiosk.points.tier() {
        Some(tier) => format!("{} {}", tier.icon(), tier.name()),
        None => "—".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            " VR GEAR SHOP ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} ", screen.title()),
            Style::default().fg(kiosk.prefs.theme.text()),
        ),
        Span::styled(
            format!("· {} pts ", kiosk.points.total()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!("· {} ", tier_text), Style::default().fg(Color::Gray)),
        Span::styled(
            format!(
                "· {} / {} / {}",
                kiosk.prefs.theme.name(),
                kiosk.prefs.density.name(),
                kiosk.prefs.accent.name()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
}

/// Footer: key hints for the active screen plus the last-saved stamp.
fn draw_footer(frame: &mut Frame, area: Rect, kiosk: &Kiosk, screen: Screen) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hints = match screen {
        Screen::Catalog => {
            "[/] Search  [↑↓] Select  [Enter] Shop  [f] Fav  [c] Compare  [s] Sort  [Tab] Category  [t/d/a] Prefs  [F1-F5] Screens  [q] Quit"
        }
        Screen::Compare => "[c] on a catalog product adds it here  [F1-F5] Screens  [q] Quit",
        Screen::Quiz => "[↑↓] Choose  [Enter] Answer  [r] Restart  [F1-F5] Screens  [q] Quit",
        Screen::Memory => "[Arrows] Move  [Enter] Flip  [r] New game  [F1-F5] Screens  [q] Quit",
        Screen::Achievements => "[F1-F5] Screens  [q] Quit",
    };

    let saved = match kiosk.last_saved {
        Some(at) => format!("saved {}", at.format("%H:%M:%S")),
        None => "not saved yet".to_string(),
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(saved, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

/// Center a fixed-size overlay inside an area.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
