//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod alphabet;
mod clue;

pub use alphabet::{Alphabet, AlphabetError};
pub use clue::{Clue, CluedSymbol, score};
