//! Tests for seeded weighted and uniform selection

#[cfg(test)]
mod tests {
    use merge_grid::game::selection::RandomSelector;

    // Tests identical seeds give identical sequences
    // Verified by seeding from entropy
    #[test]
    fn test_seed_reproducibility() {
        let mut a = RandomSelector::new(42);
        let mut b = RandomSelector::new(42);

        let seq_a: Vec<Option<usize>> = (0..50).map(|_| a.choose_index(25)).collect();
        let seq_b: Vec<Option<usize>> = (0..50).map(|_| b.choose_index(25)).collect();

        assert_eq!(seq_a, seq_b);
    }

    // Tests uniform picks stay in range and empty input yields nothing
    // Verified by using an inclusive range
    #[test]
    fn test_choose_index_bounds() {
        let mut selector = RandomSelector::new(3);
        assert_eq!(selector.choose_index(0), None);

        for _ in 0..200 {
            let index = selector.choose_index(4);
            assert!(index.is_some_and(|i| i < 4));
        }
        assert_eq!(selector.choose_index(1), Some(0));
    }

    // Tests zero-weight entries are never chosen
    // Verified by ignoring weights
    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut selector = RandomSelector::new(11);
        for _ in 0..100 {
            assert_eq!(selector.weighted_choice(&[0.0, 1.0, 0.0]), 1);
        }
    }

    // Tests degenerate weights fall back to the first index
    // Verified by returning the last index
    #[test]
    fn test_weighted_choice_degenerate() {
        let mut selector = RandomSelector::new(5);
        assert_eq!(selector.weighted_choice(&[]), 0);
        assert_eq!(selector.weighted_choice(&[0.0, 0.0]), 0);
    }

    // Tests both entries of an even split get picked
    // Verified by always returning the first entry
    #[test]
    fn test_weighted_choice_covers_all() {
        let mut selector = RandomSelector::new(9);
        let mut seen = [false; 2];
        for _ in 0..200 {
            if let Some(flag) = seen.get_mut(selector.weighted_choice(&[1.0, 1.0])) {
                *flag = true;
            }
        }
        assert_eq!(seen, [true, true]);
    }
}
