//! calc_tui - Interactive TUI for the damage calculator

mod app;
mod format;
mod ui;

use app::App;
use calc_core::{CalcConfig, Calculator};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    // Optional TOML config path: default profile + formula constants
    let config = match std::env::args().nth(1) {
        Some(path) => match CalcConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => CalcConfig::default(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(Calculator::with_config(config));

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.editing {
                    match key.code {
                        KeyCode::Enter => app.commit(),
                        KeyCode::Esc => app.cancel(),
                        KeyCode::Backspace => app.on_backspace(),
                        KeyCode::Up => app.on_up(),
                        KeyCode::Down => app.on_down(),
                        KeyCode::Char(c) => app.on_char(c),
                        _ => {}
                    }
                } else {
                    match (key.code, key.modifiers) {
                        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                            break
                        }
                        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                        (KeyCode::Enter, _) => app.on_enter(),
                        (KeyCode::Char(' '), _) => app.on_space(),
                        (KeyCode::Char('r'), _) => app.reset(),
                        // Typing a number starts a fresh edit on the spot
                        (KeyCode::Char(c), _) if c.is_ascii_digit() || c == '-' || c == '.' => {
                            app.begin_edit_blank();
                            app.on_char(c);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
