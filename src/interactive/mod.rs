//! Interactive terminal interface
//!
//! Thin presentation layer over the game core: maps terminal key events to
//! game keys and renders the derived views (grid, keyboard, hint, status).

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
