//! Input/output and process plumbing
//!
//! This module contains:
//! - Command-line parsing and mode dispatch
//! - Game constants and the error type
//! - Log and progress output
//! - PNG snapshots and GIF session recording

/// Command-line interface and mode runners
pub mod cli;
/// Game constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of the board
pub mod image;
/// Log subscriber setup
pub mod logging;
/// Simulation progress bar
pub mod progress;
/// Animated GIF recording
pub mod recording;
