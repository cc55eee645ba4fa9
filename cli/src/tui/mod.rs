mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modelman_core::HttpGateway;
use ratatui::prelude::*;
use std::io;

use app::{App, AppMode};

pub async fn run(gateway: HttpGateway) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(gateway);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

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

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    // Initial load
    app.refresh().await;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.mode {
                    AppMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('j') | KeyCode::Down => app.next(),
                        KeyCode::Char('k') | KeyCode::Up => app.previous(),
                        KeyCode::Char('r') => app.refresh().await,
                        KeyCode::Char('i') => app.mode = AppMode::Input,
                        KeyCode::Char('t') => app.toggle_theme(),
                        KeyCode::Enter => app.pull_selected().await,
                        KeyCode::Tab | KeyCode::BackTab => app.next_tab(),
                        _ => {}
                    },
                    AppMode::Input => match key.code {
                        KeyCode::Esc => {
                            app.state.pending_name.clear();
                            app.mode = AppMode::Normal;
                        }
                        KeyCode::Enter => {
                            app.submit_pending().await;
                            app.mode = AppMode::Normal;
                        }
                        KeyCode::Backspace => {
                            app.state.pending_name.pop();
                        }
                        KeyCode::Char(c) => {
                            app.state.pending_name.push(c);
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}
