//! TUI application state and event loop

use crate::game::{Game, GameConfig, GameState, Key};
use crate::output::GameSummary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub last_round: Option<GameSummary>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            last_round: None,
            should_quit: false,
        }
    }

    /// Forward a game key, capturing a summary the moment a round ends
    pub fn handle_key(&mut self, key: Key) {
        let was_playing = self.game.state() == GameState::Playing;
        self.game.handle_key(key);
        if was_playing && self.game.state() != GameState::Playing {
            self.last_round = Some(GameSummary::from_game(&self.game));
        }
    }

    /// Translate a terminal key into a game key
    ///
    /// Only alphabet symbols, Backspace, and Enter reach the game; every
    /// other key is dropped here.
    #[must_use]
    pub fn map_key(&self, code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Char(c) if self.game.config().alphabet().contains(c) => Some(Key::Symbol(c)),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        }
    }
}

/// Run the TUI application
///
/// Returns the summary of the last finished round, if any, so the caller can
/// print share text after the terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<Option<GameSummary>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(app.last_round)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                code => {
                    if let Some(game_key) = app.map_key(code) {
                        app.handle_key(game_key);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
