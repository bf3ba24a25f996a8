//! The symbol alphabet guesses are drawn from
//!
//! An `Alphabet` is a fixed finite set of symbols, ordered for keyboard
//! layout purposes. The default game uses digits 0-9 but any set works.

use rustc_hash::FxHashSet;
use std::fmt;

/// A fixed finite set of symbols
///
/// Keeps first-seen order for display; membership checks go through a hash
/// set so key handling stays O(1) regardless of alphabet size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    members: FxHashSet<char>,
}

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    Empty,
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet must contain at least one symbol"),
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Create an alphabet from a sequence of symbols
    ///
    /// Duplicates are dropped, keeping the first occurrence's position.
    ///
    /// # Errors
    /// Returns `AlphabetError::Empty` if no symbols are given.
    ///
    /// # Examples
    /// ```
    /// use numble::core::Alphabet;
    ///
    /// let hex = Alphabet::new("0123456789abcdef".chars()).unwrap();
    /// assert!(hex.contains('f'));
    /// assert!(!hex.contains('g'));
    ///
    /// assert!(Alphabet::new("".chars()).is_err());
    /// ```
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let mut ordered = Vec::new();
        let mut members = FxHashSet::default();
        for symbol in symbols {
            if members.insert(symbol) {
                ordered.push(symbol);
            }
        }

        if ordered.is_empty() {
            return Err(AlphabetError::Empty);
        }

        Ok(Self {
            symbols: ordered,
            members,
        })
    }

    /// The digit alphabet 0-9 used by the default game
    ///
    /// # Panics
    /// Will not panic - the digit set is never empty.
    #[must_use]
    pub fn digits() -> Self {
        Self::new('0'..='9').expect("digit alphabet is non-empty")
    }

    /// Check whether a symbol belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.members.contains(&symbol)
    }

    /// All symbols in display order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of distinct symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
