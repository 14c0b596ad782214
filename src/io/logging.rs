//! Log subscriber setup
//!
//! `RUST_LOG` takes precedence over the verbosity flags. Interactive play
//! owns the terminal, so its logs go to a file or nowhere.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::io::error::{GameError, Result, WithPath};

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless runs
    Stderr,
    /// Log file, truncated on start
    File(PathBuf),
    /// No subscriber is installed
    Disabled,
}

/// Filter directive for the given verbosity flags
pub const fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    match verbosity {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed
pub fn init_logging(verbosity: u8, quiet: bool, target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity, quiet)));

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(verbosity >= 2)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(create_log_file(path)?))
            .try_init(),
    };

    installed.map_err(|e| GameError::Logging {
        reason: e.to_string(),
    })
}

fn create_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    File::create(path).with_path(path, "create log file")
}
