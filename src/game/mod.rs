//! Merge puzzle rules
//!
//! This module contains the simulation side of the game:
//! - Item kinds and leveling
//! - The fixed grid and neighbor lookup
//! - Merge resolution, single pass or cascading
//! - The keypress-driven session loop

/// Fixed grid of optional item slots
pub mod board;
/// Item kinds, levels and the spawn registry
pub mod item;
/// Merge detection and resolution strategies
pub mod merge;
/// Event hooks for rendering spawn and merge animations
pub mod observer;
/// Seeded random choices
pub mod selection;
/// Keypress loop state and counters
pub mod session;

pub use board::{Board, Position};
pub use item::Item;
pub use session::GameSession;
