//! Terminal output formatting
//!
//! Share-style summary of a finished round, printed to stdout after the
//! TUI exits.

pub mod display;

pub use display::{GameSummary, print_summary};
