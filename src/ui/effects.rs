//! Celebration overlay for achievement unlocks.
//!
//! A short frame-timed confetti banner. The effect is one-shot: triggered
//! when an unlock batch arrives, drawn for a fixed duration, then cleared.

use crate::achievements::{achievement_def, AchievementId};
use crate::constants::ACHIEVEMENT_BONUS_POINTS;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const EFFECT_DURATION_MS: u64 = 2200;
const SPARKS: [char; 4] = ['✦', '✳', '❋', '✷'];

pub struct CelebrationEffect {
    unlocked: Vec<AchievementId>,
    started: Option<Instant>,
}

impl Default for CelebrationEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl CelebrationEffect {
    pub fn new() -> Self {
        Self {
            unlocked: Vec::new(),
            started: None,
        }
    }

    /// Start (or restart) the overlay for a batch of unlocks.
    pub fn trigger(&mut self, unlocked: Vec<AchievementId>) {
        self.unlocked = unlocked;
        self.started = Some(Instant::now());
    }

    pub fn is_active(&self) -> bool {
        match self.started {
            Some(at) => at.elapsed() < Duration::from_millis(EFFECT_DURATION_MS),
            None => false,
        }
    }

    /// Draw the overlay if active; clears itself once expired.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(started) = self.started else {
            return;
        };
        if started.elapsed() >= Duration::from_millis(EFFECT_DURATION_MS) {
            self.started = None;
            self.unlocked.clear();
            return;
        }

        let height = (4 + self.unlocked.len() as u16).min(area.height);
        let overlay = super::centered_rect(area, 44, height);
        frame.render_widget(Clear, overlay);

        // Spark characters cycle with elapsed time for a shimmer
        let phase = (started.elapsed().as_millis() / 150) as usize;
        let spark = SPARKS[phase % SPARKS.len()];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {spark} Achievement unlocked {spark} "));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let mut lines = vec![Line::from("")];
        for id in &self.unlocked {
            if let Some(def) = achievement_def(*id) {
                lines.push(Line::from(Span::styled(
                    format!("{} {}", def.icon, def.name),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }
        lines.push(Line::from(Span::styled(
            format!("+{} bonus points", ACHIEVEMENT_BONUS_POINTS),
            Style::default().fg(Color::Green),
        )));

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_starts_inactive() {
        let effect = CelebrationEffect::new();
        assert!(!effect.is_active());
    }

    #[test]
    fn test_trigger_activates() {
        let mut effect = CelebrationEffect::new();
        effect.trigger(vec![AchievementId::WindowShopper]);
        assert!(effect.is_active());
    }

    #[test]
    fn test_overlay_shows_the_bonus_amount() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut effect = CelebrationEffect::new();
        effect.trigger(vec![AchievementId::WindowShopper]);

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                effect.render(frame, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(
            text.contains(&format!("+{} bonus points", ACHIEVEMENT_BONUS_POINTS)),
            "Overlay displays the actual bonus grant"
        );
    }
}
