//! Post-game summary display

use crate::core::{Clue, score};
use crate::game::{Game, GameState};
use colored::Colorize;

/// Outcome of a finished round, detached from the live game so it survives a
/// reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    pub guesses_used: usize,
    pub max_guesses: usize,
    pub clue_rows: Vec<Vec<Clue>>,
}

impl GameSummary {
    /// Capture the current round's outcome
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let clue_rows = game
            .guesses()
            .iter()
            .map(|guess| {
                score(guess, game.config().target())
                    .into_iter()
                    .map(|scored| scored.clue)
                    .collect()
            })
            .collect();

        Self {
            won: game.state() == GameState::Won,
            guesses_used: game.guesses().len(),
            max_guesses: game.config().max_guesses(),
            clue_rows,
        }
    }

    /// "3/6" when won, "X/6" when not
    #[must_use]
    pub fn score_line(&self) -> String {
        if self.won {
            format!("{}/{}", self.guesses_used, self.max_guesses)
        } else {
            format!("X/{}", self.max_guesses)
        }
    }

    /// Share-style emoji grid, one line per locked-in guess
    #[must_use]
    pub fn emoji_grid(&self) -> String {
        let mut grid = String::new();
        for row in &self.clue_rows {
            for &clue in row {
                grid.push(clue.to_emoji());
            }
            grid.push('\n');
        }
        grid
    }
}

/// Print the finished round to stdout
pub fn print_summary(summary: &GameSummary) {
    println!("\n{}", "─".repeat(24).cyan());
    if summary.won {
        println!(
            "{}",
            format!("Numble {}", summary.score_line()).green().bold()
        );
    } else {
        println!("{}", format!("Numble {}", summary.score_line()).red().bold());
    }
    print!("{}", summary.emoji_grid());
    println!("{}", "─".repeat(24).cyan());
}
