//! Single-player merge puzzle on a fixed grid
//!
//! Each keypress spawns an item into a random empty cell. Any cell with two
//! or more matching orthogonal neighbors upgrades one level and absorbs them,
//! with grow and pulse animations played as events happen.

#![forbid(unsafe_code)]

/// Item kinds, the board, merge resolution and the session loop
pub mod game;
/// Command line, configuration, errors, logging and file output
pub mod io;
/// Icons, frame composition, animation timing and the terminal front end
pub mod render;

pub use io::error::{GameError, Result};
