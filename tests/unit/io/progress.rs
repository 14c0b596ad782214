//! Tests for the simulation progress bar

#[cfg(test)]
mod tests {
    use merge_grid::game::session::SessionStats;
    use merge_grid::io::progress::SimulationProgress;

    // Tests each advance counts one keypress
    // Verified by incrementing by the merge count
    #[test]
    fn test_progress_advances() {
        let progress = SimulationProgress::hidden(10);
        let stats = SessionStats::default();

        for _ in 0..4 {
            progress.advance(&stats);
        }
        assert_eq!(progress.position(), 4);

        progress.finish(&stats);
        assert_eq!(progress.position(), 4);
    }

    // Tests the visible bar tracks position the same way
    // Verified by creating the bar with zero length
    #[test]
    fn test_visible_progress() {
        let progress = SimulationProgress::new(2);
        let stats = SessionStats::default();
        progress.advance(&stats);
        progress.advance(&stats);
        progress.finish(&stats);
        assert_eq!(progress.position(), 2);
    }
}
