//! The game controller
//!
//! Owns the guess history, the in-progress guess, and the win/lose state.
//! [`Game::handle_key`] is the only mutation entry point; the render-facing
//! views ([`Game::rows`], [`Game::letter_info`]) are derived fresh from the
//! history each call.

use super::GameConfig;
use crate::core::{Clue, CluedSymbol, score};
use rustc_hash::FxHashMap;

const HINT_GREETING: &str = "Make your first guess!";
const HINT_TOO_SHORT: &str = "Too short";
const HINT_WON: &str = "You got it! Press Enter to play again.";
const HINT_LOST: &str = "Out of guesses! Press Enter to try again...";

/// Where the game stands
///
/// Transitions happen only when a full guess is submitted, and only away
/// from `Playing`. Once terminal, `Enter` starts a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// A key event from the input boundary
///
/// Anything the front end cannot map to one of these is ignored before it
/// reaches the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Symbol(char),
    Backspace,
    Enter,
}

/// Render classification of one guess slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A submitted guess with its per-position clues
    LockedIn(Vec<CluedSymbol>),
    /// The in-progress guess, possibly shorter than the code length
    Editing(String),
    /// A slot not yet reached
    Pending,
}

/// The guessing game state machine
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    guesses: Vec<String>,
    current: String,
    hint: String,
}

impl Game {
    /// Start a game from a validated configuration
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::Playing,
            guesses: Vec::new(),
            current: String::new(),
            hint: HINT_GREETING.to_string(),
        }
    }

    /// Clear all progress and return to `Playing`
    pub fn reset(&mut self) {
        self.guesses.clear();
        self.current.clear();
        self.hint.clear();
        self.state = GameState::Playing;
    }

    /// Feed one key event through the state machine
    ///
    /// Policy:
    /// - When the game is over, only `Enter` does anything (a reset).
    /// - Alphabet symbols append to the current guess; input past the code
    ///   length is dropped silently rather than rejected.
    /// - `Enter` on a short guess sets the hint and submits nothing.
    /// - A full guess is locked in; the win check runs before the
    ///   out-of-guesses check, so a correct final guess wins.
    pub fn handle_key(&mut self, key: Key) {
        if self.state != GameState::Playing {
            if key == Key::Enter {
                self.reset();
            }
            return;
        }
        // Unreachable while the transition rules hold, since the game leaves
        // `Playing` on the guess that fills the history.
        if self.guesses.len() == self.config.max_guesses() {
            return;
        }

        match key {
            Key::Symbol(symbol) => {
                if !self.config.alphabet().contains(symbol) {
                    return;
                }
                if self.current.chars().count() < self.config.word_length() {
                    self.current.push(symbol);
                }
                self.hint.clear();
            }
            Key::Backspace => {
                self.current.pop();
                self.hint.clear();
            }
            Key::Enter => self.submit(),
        }
    }

    fn submit(&mut self) {
        if self.current.chars().count() != self.config.word_length() {
            self.hint = HINT_TOO_SHORT.to_string();
            return;
        }

        let submitted = std::mem::take(&mut self.current);
        let won = submitted == self.config.target();
        self.guesses.push(submitted);

        if won {
            self.hint = HINT_WON.to_string();
            self.state = GameState::Won;
        } else if self.guesses.len() == self.config.max_guesses() {
            self.hint = HINT_LOST.to_string();
            self.state = GameState::Lost;
        } else {
            self.hint.clear();
        }
    }

    /// Classify every guess slot for rendering
    ///
    /// Returns exactly `max_guesses` rows: locked-in guesses with their
    /// clues, then the editing slot, then pending slots.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        (0..self.config.max_guesses())
            .map(|i| {
                if i < self.guesses.len() {
                    Row::LockedIn(score(&self.guesses[i], self.config.target()))
                } else if i == self.guesses.len() {
                    Row::Editing(self.current.clone())
                } else {
                    Row::Pending
                }
            })
            .collect()
    }

    /// Best clue seen per symbol across all locked-in guesses
    ///
    /// The in-progress guess contributes nothing. A symbol's clue never
    /// downgrades: once `Correct` is seen it stays `Correct`.
    #[must_use]
    pub fn letter_info(&self) -> FxHashMap<char, Clue> {
        let mut info: FxHashMap<char, Clue> = FxHashMap::default();
        for guess in &self.guesses {
            for scored in score(guess, self.config.target()) {
                info.entry(scored.symbol)
                    .and_modify(|best| *best = (*best).max(scored.clue))
                    .or_insert(scored.clue);
            }
        }
        info
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The transient hint line; empty when no message is active
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Locked-in guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// The in-progress guess text
    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(GameConfig::digits("438241", 6).unwrap())
    }

    fn type_guess(game: &mut Game, guess: &str) {
        for c in guess.chars() {
            game.handle_key(Key::Symbol(c));
        }
        game.handle_key(Key::Enter);
    }

    #[test]
    fn game_starts_playing_with_greeting() {
        let game = game();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.hint(), "Make your first guess!");
        assert!(game.guesses().is_empty());
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn symbol_keys_build_current_guess() {
        let mut game = game();
        game.handle_key(Key::Symbol('1'));
        game.handle_key(Key::Symbol('2'));
        assert_eq!(game.current_guess(), "12");
        assert_eq!(game.hint(), "", "typing clears the greeting");
    }

    #[test]
    fn symbols_outside_alphabet_ignored() {
        let mut game = game();
        game.handle_key(Key::Symbol('a'));
        game.handle_key(Key::Symbol(' '));
        assert_eq!(game.current_guess(), "");
        // An ignored key leaves the hint alone too
        assert_eq!(game.hint(), "Make your first guess!");
    }

    #[test]
    fn input_past_code_length_dropped() {
        let mut game = game();
        for c in "12345678".chars() {
            game.handle_key(Key::Symbol(c));
        }
        assert_eq!(game.current_guess(), "123456");
    }

    #[test]
    fn backspace_removes_last_symbol() {
        let mut game = game();
        game.handle_key(Key::Symbol('1'));
        game.handle_key(Key::Symbol('2'));
        game.handle_key(Key::Backspace);
        assert_eq!(game.current_guess(), "1");
        // No-op on an empty guess
        game.handle_key(Key::Backspace);
        game.handle_key(Key::Backspace);
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn short_submission_hints_and_keeps_history_empty() {
        let mut game = game();
        game.handle_key(Key::Symbol('1'));
        game.handle_key(Key::Enter);
        assert_eq!(game.hint(), "Too short");
        assert!(game.guesses().is_empty());
        assert_eq!(game.current_guess(), "1", "short guess is not cleared");
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn full_submission_locks_in_and_clears_current() {
        let mut game = game();
        type_guess(&mut game, "111111");
        assert_eq!(game.guesses(), ["111111"]);
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.hint(), "");
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn correct_guess_wins() {
        let mut game = game();
        type_guess(&mut game, "438241");
        assert_eq!(game.state(), GameState::Won);
        assert!(!game.hint().is_empty());
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn six_misses_lose() {
        let mut game = game();
        for _ in 0..6 {
            type_guess(&mut game, "000000");
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.guesses().len(), 6);
        assert!(!game.hint().is_empty());
    }

    #[test]
    fn win_on_final_guess_beats_loss() {
        let mut game = game();
        for _ in 0..5 {
            type_guess(&mut game, "000000");
        }
        assert_eq!(game.state(), GameState::Playing);
        type_guess(&mut game, "438241");
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn terminal_state_ignores_everything_but_enter() {
        let mut game = game();
        type_guess(&mut game, "438241");
        assert_eq!(game.state(), GameState::Won);

        game.handle_key(Key::Symbol('1'));
        game.handle_key(Key::Backspace);
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.state(), GameState::Won);

        game.handle_key(Key::Enter);
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.guesses().is_empty());
        assert_eq!(game.hint(), "");
    }

    #[test]
    fn reset_restores_fresh_playing_state() {
        let mut game = game();
        type_guess(&mut game, "123456");
        game.handle_key(Key::Symbol('9'));
        game.reset();
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.guesses().is_empty());
        assert_eq!(game.current_guess(), "");
        assert_eq!(game.hint(), "");
    }

    #[test]
    fn rows_classify_slots_in_order() {
        let mut game = game();
        type_guess(&mut game, "111111");
        game.handle_key(Key::Symbol('2'));

        let rows = game.rows();
        assert_eq!(rows.len(), 6);
        match &rows[0] {
            Row::LockedIn(clues) => {
                assert_eq!(clues.len(), 6);
                let text: String = clues.iter().map(|c| c.symbol).collect();
                assert_eq!(text, "111111");
            }
            other => panic!("expected locked-in row, got {other:?}"),
        }
        assert_eq!(rows[1], Row::Editing("2".to_string()));
        assert!(rows[2..].iter().all(|r| *r == Row::Pending));
    }

    #[test]
    fn rows_after_loss_have_no_editing_slot() {
        let mut game = game();
        for _ in 0..6 {
            type_guess(&mut game, "000000");
        }
        let rows = game.rows();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| matches!(r, Row::LockedIn(_))));
    }

    #[test]
    fn letter_info_keeps_best_clue() {
        let mut game = game();
        // '4' scores Present from position 1, then Correct from position 0
        type_guess(&mut game, "140000");
        let info = game.letter_info();
        assert_eq!(info.get(&'4'), Some(&Clue::Present));

        type_guess(&mut game, "400000");
        let info = game.letter_info();
        assert_eq!(info.get(&'4'), Some(&Clue::Correct));

        // Later guesses where '4' mostly scores Absent must not downgrade it
        type_guess(&mut game, "444444");
        let info = game.letter_info();
        assert_eq!(info.get(&'4'), Some(&Clue::Correct));
    }

    #[test]
    fn letter_info_ignores_editing_guess() {
        let mut game = game();
        game.handle_key(Key::Symbol('4'));
        game.handle_key(Key::Symbol('3'));
        assert!(game.letter_info().is_empty());
    }

    #[test]
    fn letter_info_reports_absent_symbols() {
        let mut game = game();
        type_guess(&mut game, "999999");
        let info = game.letter_info();
        assert_eq!(info.get(&'9'), Some(&Clue::Absent));
        assert_eq!(info.get(&'4'), None);
    }
}
