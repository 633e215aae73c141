mod achievements;
mod app;
mod catalog;
mod constants;
mod lists;
mod memory;
mod points;
mod prefs;
mod quiz;
mod stats;
mod storage;
mod trending;
mod ui;

use app::{Kiosk, KioskEvent};
use constants::POLL_INTERVAL_MS;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use storage::DiskStore;
use ui::effects::CelebrationEffect;
use ui::Screen;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("vrshop {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("vrshop - Terminal VR Accessory Storefront\n");
                println!("Usage: vrshop\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'vrshop --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = DiskStore::new()?;
    let mut kiosk = Kiosk::new(Box::new(store));
    let mut screen = Screen::Catalog;
    let mut search_mode = false;
    let mut celebration = CelebrationEffect::new();
    let mut rng = rand::thread_rng();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    'outer: loop {
        // Resolve any due memory-game flip-back before drawing
        kiosk.memory_tick(Instant::now());

        // Queued notifications: unlock batches start the celebration overlay
        for kiosk_event in kiosk.drain_events() {
            if let KioskEvent::AchievementsUnlocked(ids) = kiosk_event {
                celebration.trigger(ids);
            }
        }

        terminal.draw(|frame| {
            ui::draw_ui(frame, &kiosk, screen, search_mode, &mut celebration);
        })?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };

        // Screen switching works everywhere except while typing a search
        if !search_mode {
            match key_event.code {
                KeyCode::F(1) => {
                    screen = Screen::Catalog;
                    continue;
                }
                KeyCode::F(2) => {
                    screen = Screen::Compare;
                    continue;
                }
                KeyCode::F(3) => {
                    screen = Screen::Quiz;
                    continue;
                }
                KeyCode::F(4) => {
                    screen = Screen::Memory;
                    continue;
                }
                KeyCode::F(5) => {
                    screen = Screen::Achievements;
                    continue;
                }
                _ => {}
            }
        }

        match screen {
            Screen::Catalog if search_mode => match key_event.code {
                KeyCode::Char(c) => {
                    kiosk.view.query.push(c);
                    kiosk.view.selected = 0;
                }
                KeyCode::Backspace => {
                    kiosk.view.query.pop();
                    kiosk.view.selected = 0;
                }
                KeyCode::Enter | KeyCode::Esc => {
                    search_mode = false;
                }
                _ => {}
            },

            Screen::Catalog => match key_event.code {
                KeyCode::Up => {
                    kiosk.view.selected = kiosk.view.selected.saturating_sub(1);
                }
                KeyCode::Down => {
                    let visible = kiosk.view.visible().len();
                    if kiosk.view.selected + 1 < visible {
                        kiosk.view.selected += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(product) = kiosk.view.selected_product() {
                        kiosk.record_shop_click(product.name);
                        // Popularity order may have changed
                        kiosk.refresh_sort();
                    }
                }
                KeyCode::Char('f') => {
                    if let Some(product) = kiosk.view.selected_product() {
                        kiosk.toggle_favorite(product.name);
                    }
                }
                KeyCode::Char('c') => {
                    if let Some(product) = kiosk.view.selected_product() {
                        kiosk.toggle_compare(product.name);
                    }
                }
                KeyCode::Char('s') => {
                    kiosk.cycle_sort();
                    kiosk.view.selected = 0;
                }
                KeyCode::Tab => {
                    kiosk.view.cycle_filter();
                }
                KeyCode::Char('/') => {
                    search_mode = true;
                }
                KeyCode::Char('t') => kiosk.cycle_theme(),
                KeyCode::Char('d') => kiosk.cycle_density(),
                KeyCode::Char('a') => kiosk.cycle_accent(),
                KeyCode::Char('q') | KeyCode::Esc => break 'outer,
                _ => {}
            },

            Screen::Compare => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => break 'outer,
                _ => {}
            },

            Screen::Quiz => match key_event.code {
                KeyCode::Up => {
                    kiosk.quiz.cursor = kiosk.quiz.cursor.saturating_sub(1);
                }
                KeyCode::Down => {
                    if kiosk.quiz.cursor + 1 < kiosk.quiz.option_count() {
                        kiosk.quiz.cursor += 1;
                    }
                }
                KeyCode::Enter => {
                    let choice = kiosk.quiz.cursor;
                    kiosk.quiz_answer(choice);
                }
                KeyCode::Char('r') => kiosk.quiz_restart(),
                KeyCode::Char('q') | KeyCode::Esc => break 'outer,
                _ => {}
            },

            Screen::Memory => match key_event.code {
                KeyCode::Up => move_memory_cursor(&mut kiosk, -1, 0),
                KeyCode::Down => move_memory_cursor(&mut kiosk, 1, 0),
                KeyCode::Left => move_memory_cursor(&mut kiosk, 0, -1),
                KeyCode::Right => move_memory_cursor(&mut kiosk, 0, 1),
                KeyCode::Enter => kiosk.memory_flip(Instant::now()),
                KeyCode::Char('r') => kiosk.memory_start(&mut rng),
                KeyCode::Char('q') | KeyCode::Esc => break 'outer,
                _ => {}
            },

            Screen::Achievements => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => break 'outer,
                _ => {}
            },
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn move_memory_cursor(kiosk: &mut Kiosk, d_row: i32, d_col: i32) {
    if let Some(game) = &mut kiosk.memory {
        game.board.move_cursor(d_row, d_col);
    }
}
