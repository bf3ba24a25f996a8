//! TUI rendering with ratatui
//!
//! Draws the guess grid, hint line, and the aggregated keyboard for the
//! guessing game. All game data comes from the core's derived views.

use super::app::App;
use crate::core::Clue;
use crate::game::{GameState, Row};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Guess grid
            Constraint::Length(3), // Hint line
            Constraint::Length(4), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_hint(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn clue_style(clue: Clue) -> Style {
    match clue {
        Clue::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Clue::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Clue::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("NUMBLE - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let word_length = app.game.config().word_length();
    let mut lines = Vec::new();

    // Column labels: A B C ... over the cells
    let labels: Vec<Span> = (0..word_length)
        .flat_map(|i| {
            let label = char::from(b'A' + (i % 26) as u8);
            [
                Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
            ]
        })
        .collect();
    lines.push(Line::from(labels));
    lines.push(Line::default());

    for row in app.game.rows() {
        let mut spans = Vec::new();
        match row {
            Row::LockedIn(clues) => {
                for scored in clues {
                    spans.push(Span::styled(
                        format!(" {} ", scored.symbol),
                        clue_style(scored.clue),
                    ));
                    spans.push(Span::raw(" "));
                }
            }
            Row::Editing(text) => {
                for symbol in text.chars() {
                    spans.push(Span::styled(
                        format!(" {symbol} "),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::raw(" "));
                }
                for _ in text.chars().count()..word_length {
                    spans.push(Span::styled(" _ ", Style::default().fg(Color::Gray)));
                    spans.push(Span::raw(" "));
                }
            }
            Row::Pending => {
                for _ in 0..word_length {
                    spans.push(Span::styled(" . ", Style::default().fg(Color::DarkGray)));
                    spans.push(Span::raw(" "));
                }
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let style = match app.game.state() {
        GameState::Won => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        GameState::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        GameState::Playing => Style::default().fg(Color::Yellow),
    };

    let hint = Paragraph::new(app.game.hint())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(hint, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let info = app.game.letter_info();
    let mut lines = Vec::new();

    // Up to ten symbol keys per row, then the editing keys
    for chunk in app.game.config().alphabet().symbols().chunks(10) {
        let mut spans = Vec::new();
        for &symbol in chunk {
            let style = info.get(&symbol).map_or_else(
                || Style::default().add_modifier(Modifier::BOLD),
                |&clue| clue_style(clue),
            );
            spans.push(Span::styled(format!(" {symbol} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(vec![
        Span::styled(" Enter ", Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(" Bksp ", Style::default().fg(Color::Cyan)),
    ]));

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let progress = match game.state() {
        GameState::Playing => format!(
            "Guess {}/{}",
            game.guesses().len() + 1,
            game.config().max_guesses()
        ),
        GameState::Won => format!(
            "Won in {}/{}",
            game.guesses().len(),
            game.config().max_guesses()
        ),
        GameState::Lost => "Out of guesses".to_string(),
    };

    let status = Paragraph::new(format!("{progress}  |  Enter submit  |  Esc quit"))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
