//! Numble - CLI
//!
//! Wordle-style code guessing in the terminal: type digits, Enter to submit,
//! Backspace to edit, Esc to quit.

use anyhow::Result;
use clap::Parser;
use numble::{
    core::Alphabet,
    game::GameConfig,
    interactive::{App, run_tui},
    output::print_summary,
};

#[derive(Parser)]
#[command(
    name = "numble",
    about = "Guess the hidden code with Wordle-style feedback",
    version,
    author
)]
struct Cli {
    /// The hidden code to guess; its length sets the code length
    #[arg(short, long, default_value = "438241")]
    target: String,

    /// Maximum number of guesses per round
    #[arg(short = 'g', long, default_value_t = 6)]
    max_guesses: usize,

    /// Symbols the code and guesses are drawn from
    #[arg(short, long, default_value = "0123456789")]
    alphabet: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let alphabet = Alphabet::new(cli.alphabet.chars())?;
    let word_length = cli.target.chars().count();
    let config = GameConfig::new(alphabet, &cli.target, word_length, cli.max_guesses)?;

    let app = App::new(config);
    if let Some(summary) = run_tui(app)? {
        print_summary(&summary);
    }

    Ok(())
}
