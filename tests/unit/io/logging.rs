//! Tests for verbosity mapping and subscriber installation

#[cfg(test)]
mod tests {
    use merge_grid::io::error::GameError;
    use merge_grid::io::logging::{LogTarget, init_logging, level_for};

    // Tests each verbosity count maps to a filter level
    // Verified by ignoring the quiet flag
    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, true), "error");
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(1, false), "info");
        assert_eq!(level_for(2, false), "debug");
        assert_eq!(level_for(3, false), "trace");
        assert_eq!(level_for(9, true), "trace");
    }

    // Tests disabled logging installs nothing and never fails
    // Verified by installing a subscriber for disabled targets
    #[test]
    fn test_disabled_target() {
        assert!(init_logging(0, false, &LogTarget::Disabled).is_ok());
        assert!(init_logging(3, true, &LogTarget::Disabled).is_ok());
    }

    // Tests file logging creates the file and refuses a second subscriber
    // Verified by replacing the global subscriber
    #[test]
    fn test_file_target_installs_once() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("logs/game.log");
        let target = LogTarget::File(path.clone());

        assert!(init_logging(1, false, &target).is_ok());
        assert!(path.exists());

        let second = init_logging(1, false, &target);
        assert!(matches!(second, Err(GameError::Logging { .. })));
    }
}
