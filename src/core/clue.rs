//! Per-position feedback scoring
//!
//! A submitted guess is scored against the target symbol by symbol:
//! - `Correct`: right symbol in the right position
//! - `Present`: symbol occurs elsewhere in the target
//! - `Absent`: symbol does not occur (or all its occurrences are spoken for)
//!
//! Duplicate symbols are handled with the standard two-pass rule: each target
//! position can back at most one positive clue.

/// Feedback for one guessed symbol at one position
///
/// The variants are ordered (`Absent < Present < Correct`) so that the
/// best-clue-per-symbol aggregation is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Clue {
    Absent,
    Present,
    Correct,
}

impl Clue {
    /// Emoji square for share-style output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One position of a scored guess: the guessed symbol and its clue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CluedSymbol {
    pub symbol: char,
    pub clue: Clue,
}

/// Score `guess` against `target`, producing one clue per guess position
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and consume those target
///    positions so they cannot also satisfy a `Present`.
/// 2. Second pass: for each remaining guess position (left to right), consume
///    the leftmost unconsumed target occurrence of the symbol for `Present`,
///    otherwise `Absent`.
///
/// The consume-on-use rule guarantees that the number of `Correct` plus
/// `Present` clues for a symbol never exceeds its occurrence count in the
/// target.
///
/// # Panics
/// Panics if `guess` and `target` have different lengths. The game controller
/// only submits full-length guesses, so hitting this is a caller bug.
///
/// # Examples
/// ```
/// use numble::core::{Clue, score};
///
/// let clues = score("111111", "121212");
/// let positives = clues
///     .iter()
///     .filter(|c| c.clue != Clue::Absent)
///     .count();
/// // The target holds exactly three '1's, so exactly three positives
/// assert_eq!(positives, 3);
/// ```
#[must_use]
pub fn score(guess: &str, target: &str) -> Vec<CluedSymbol> {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();
    assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have equal length"
    );

    let mut clues = vec![Clue::Absent; guess.len()];
    let mut consumed = vec![false; target.len()];

    // First pass: exact matches
    for (i, &symbol) in guess.iter().enumerate() {
        if symbol == target[i] {
            clues[i] = Clue::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: presence among the unconsumed target positions
    for (i, &symbol) in guess.iter().enumerate() {
        if clues[i] == Clue::Correct {
            continue;
        }
        if let Some(j) = (0..target.len()).find(|&j| !consumed[j] && target[j] == symbol) {
            clues[i] = Clue::Present;
            consumed[j] = true;
        }
    }

    guess
        .into_iter()
        .zip(clues)
        .map(|(symbol, clue)| CluedSymbol { symbol, clue })
        .collect()
}
