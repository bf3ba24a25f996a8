//! Game state machine
//!
//! Configuration and the controller that owns guess history, the in-progress
//! guess, and win/lose transitions. All mutation goes through
//! [`Game::handle_key`]; rendering state is derived on demand.

mod config;
mod controller;

pub use config::{ConfigError, GameConfig};
pub use controller::{Game, GameState, Key, Row};
