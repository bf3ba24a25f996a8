//! Game configuration
//!
//! Fixed per-game parameters: the alphabet, target, code length, and guess
//! limit. Validation happens here, before a game can start; past this point
//! the controller can rely on the invariants.

use crate::core::Alphabet;
use std::fmt;

/// Fixed configuration for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_guesses: usize,
    alphabet: Alphabet,
    target: String,
}

/// Error type for invalid game configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroMaxGuesses,
    TargetLength { expected: usize, actual: usize },
    TargetSymbol(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroMaxGuesses => write!(f, "Guess limit must be at least 1"),
            Self::TargetLength { expected, actual } => {
                write!(f, "Target must be exactly {expected} symbols, got {actual}")
            }
            Self::TargetSymbol(symbol) => {
                write!(f, "Target symbol '{symbol}' is not in the alphabet")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `word_length` or `max_guesses` is zero
    /// - the target's length differs from `word_length`
    /// - the target contains a symbol outside the alphabet
    ///
    /// # Examples
    /// ```
    /// use numble::core::Alphabet;
    /// use numble::game::GameConfig;
    ///
    /// let config = GameConfig::new(Alphabet::digits(), "438241", 6, 6).unwrap();
    /// assert_eq!(config.word_length(), 6);
    ///
    /// assert!(GameConfig::new(Alphabet::digits(), "43x241", 6, 6).is_err());
    /// assert!(GameConfig::new(Alphabet::digits(), "4382", 6, 6).is_err());
    /// ```
    pub fn new(
        alphabet: Alphabet,
        target: impl Into<String>,
        word_length: usize,
        max_guesses: usize,
    ) -> Result<Self, ConfigError> {
        let target: String = target.into();

        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }

        let actual = target.chars().count();
        if actual != word_length {
            return Err(ConfigError::TargetLength {
                expected: word_length,
                actual,
            });
        }

        if let Some(symbol) = target.chars().find(|&c| !alphabet.contains(c)) {
            return Err(ConfigError::TargetSymbol(symbol));
        }

        Ok(Self {
            word_length,
            max_guesses,
            alphabet,
            target,
        })
    }

    /// Digit-alphabet configuration with the code length taken from the target
    ///
    /// # Errors
    /// Same as [`GameConfig::new`].
    pub fn digits(target: impl Into<String>, max_guesses: usize) -> Result<Self, ConfigError> {
        let target: String = target.into();
        let word_length = target.chars().count();
        Self::new(Alphabet::digits(), target, word_length, max_guesses)
    }

    /// Length of the target and of every submitted guess
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Maximum number of guesses before the game is lost
    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// The symbol alphabet
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The hidden target code
    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_valid() {
        let config = GameConfig::new(Alphabet::digits(), "438241", 6, 8).unwrap();
        assert_eq!(config.word_length(), 6);
        assert_eq!(config.max_guesses(), 8);
        assert_eq!(config.target(), "438241");
        assert!(config.alphabet().contains('4'));
    }

    #[test]
    fn config_digits_derives_length() {
        let config = GameConfig::digits("12345", 6).unwrap();
        assert_eq!(config.word_length(), 5);
    }

    #[test]
    fn config_zero_sizes_rejected() {
        assert_eq!(
            GameConfig::new(Alphabet::digits(), "", 0, 6),
            Err(ConfigError::ZeroWordLength)
        );
        assert_eq!(
            GameConfig::new(Alphabet::digits(), "123", 3, 0),
            Err(ConfigError::ZeroMaxGuesses)
        );
    }

    #[test]
    fn config_target_length_mismatch_rejected() {
        assert_eq!(
            GameConfig::new(Alphabet::digits(), "1234", 6, 6),
            Err(ConfigError::TargetLength {
                expected: 6,
                actual: 4
            })
        );
    }

    #[test]
    fn config_target_outside_alphabet_rejected() {
        assert_eq!(
            GameConfig::new(Alphabet::digits(), "12a456", 6, 6),
            Err(ConfigError::TargetSymbol('a'))
        );
    }

    #[test]
    fn config_custom_alphabet() {
        let binary = Alphabet::new("01".chars()).unwrap();
        assert!(GameConfig::new(binary.clone(), "0110", 4, 6).is_ok());
        assert_eq!(
            GameConfig::new(binary, "0120", 4, 6),
            Err(ConfigError::TargetSymbol('2'))
        );
    }

    #[test]
    fn config_error_messages() {
        let err = ConfigError::TargetLength {
            expected: 6,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Target must be exactly 6 symbols, got 4");
        assert_eq!(
            ConfigError::TargetSymbol('x').to_string(),
            "Target symbol 'x' is not in the alphabet"
        );
    }
}
