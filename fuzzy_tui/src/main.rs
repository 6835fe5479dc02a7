//! fuzzy_tui - Interactive TUI for exploring fuzzy weapon desirability

mod app;
mod simulation;
mod ui;

use app::{App, AppError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "fuzzy_tui.log";

fn main() -> Result<(), AppError> {
    // Log to a file only when asked; stdout belongs to the terminal UI
    if std::env::var_os("RUST_LOG").is_some() {
        let file = File::create(LOG_FILE)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let mut app = App::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up()?,
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down()?,
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left()?,
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right()?,
                    (KeyCode::Char('f'), _) | (KeyCode::Char(' '), _) => app.fire()?,
                    (KeyCode::Char('t'), _) => app.tick_time(1.0),
                    (KeyCode::Char('s'), _) => app.simulate()?,
                    (KeyCode::Char('m'), _) => app.toggle_method()?,
                    (KeyCode::Char('w'), _) => app.next_weapon(),
                    (KeyCode::Char('r'), _) => app.reset()?,
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }

        app.tick_time(0.1);
    }

    Ok(())
}
