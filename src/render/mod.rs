//! Presentation of the board
//!
//! This module contains rendering-related functionality including:
//! - Icon loading and scaling
//! - Pixel frame composition
//! - Spawn and merge animation timing
//! - The interactive terminal front end

/// Spawn and merge scale sequences
pub mod animation;
/// Icon loading with placeholder fallback
pub mod assets;
/// Pixel frame composition for the grid and items
pub mod canvas;
/// Raw-mode terminal play
pub mod terminal;

pub use assets::IconSet;
pub use canvas::{Canvas, GridLayout};
