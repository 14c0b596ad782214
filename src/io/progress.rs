//! Progress display for headless simulation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::game::session::SessionStats;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Presses: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar tracking simulated keypresses
pub struct SimulationProgress {
    bar: ProgressBar,
}

impl SimulationProgress {
    /// Create a bar for `presses` keypresses
    pub fn new(presses: usize) -> Self {
        let bar = ProgressBar::new(presses as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing, for quiet runs
    pub fn hidden(presses: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(presses as u64);
        Self { bar }
    }

    /// Advance one keypress and show the running counters
    pub fn advance(&self, stats: &SessionStats) {
        self.bar.inc(1);
        self.bar.set_message(format!(
            "merges {} | best level {}",
            stats.merges, stats.highest_level
        ));
    }

    /// Keypresses counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and summarize the run
    pub fn finish(&self, stats: &SessionStats) {
        self.bar.finish_with_message(format!(
            "{} merges, best level {}",
            stats.merges, stats.highest_level
        ));
    }
}
