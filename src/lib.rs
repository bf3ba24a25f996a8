//! Numble
//!
//! A Wordle-style guessing game over a fixed finite alphabet (digits by
//! default): the player types fixed-length codes and gets per-position
//! feedback with correct duplicate-symbol handling.
//!
//! # Quick Start
//!
//! ```rust
//! use numble::core::{Clue, score};
//! use numble::game::{Game, GameConfig, GameState, Key};
//!
//! let config = GameConfig::digits("438241", 6).unwrap();
//! let mut game = Game::new(config);
//!
//! for c in "438241".chars() {
//!     game.handle_key(Key::Symbol(c));
//! }
//! game.handle_key(Key::Enter);
//! assert_eq!(game.state(), GameState::Won);
//!
//! // The scoring engine is also usable on its own
//! let clues = score("112233", "438241");
//! assert_eq!(clues[3].clue, Clue::Correct); // '2' lands in position 3
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Interactive TUI interface
pub mod interactive;

// Terminal output formatting
pub mod output;
