//! Tests for relationships between game constants

#[cfg(test)]
mod tests {
    use merge_grid::io::configuration::{
        CELL_SIZE, GRID_LINE_WIDTH, GRID_SIZE, MERGE_ANIMATION_FRAMES, MERGE_ANIMATION_MS,
        MERGE_START_SCALE, MIN_MERGE_NEIGHBORS, SCREEN_HEIGHT, SCREEN_WIDTH,
        SPAWN_ANIMATION_FRAMES, SPAWN_ANIMATION_MS, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the grid fits on screen
    // Verified by enlarging the cell size
    #[test]
    fn test_grid_fits_screen() {
        let extent = GRID_SIZE as u32 * CELL_SIZE;
        assert!(extent <= SCREEN_WIDTH);
        assert!(extent <= SCREEN_HEIGHT);
        assert!(GRID_LINE_WIDTH * 2 < CELL_SIZE);
    }

    // Tests animation durations split evenly into frames
    // Verified by changing the merge frame count
    #[test]
    fn test_animation_timing_divides() {
        assert_eq!(SPAWN_ANIMATION_MS as usize % SPAWN_ANIMATION_FRAMES, 0);
        assert_eq!(MERGE_ANIMATION_MS as usize % MERGE_ANIMATION_FRAMES, 0);
        assert!(VIEWER_MIN_FRAME_DELAY_MS > 0);
    }

    // Tests the merge rule needs more than one neighbor and scales shrink
    // Verified by setting the start scale above one
    #[test]
    fn test_merge_parameters() {
        assert!(MIN_MERGE_NEIGHBORS >= 2);
        assert!(MERGE_START_SCALE > 0.0 && MERGE_START_SCALE < 1.0);
    }
}
