//! Keypress-driven game loop state
//!
//! Each keypress spawns one random item into a random empty cell and then
//! resolves merges across the whole board.

use crate::game::board::{Board, Position};
use crate::game::item::{Item, choose_kind};
use crate::game::merge::{MergeOutcome, MergeStrategy, resolve_all};
use crate::game::observer::BoardObserver;
use crate::game::selection::RandomSelector;
use crate::io::configuration::GRID_SIZE;
use crate::io::error::Result;

/// Running counters shown alongside the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Keypresses handled
    pub keypresses: usize,
    /// Items placed by spawning
    pub spawns: usize,
    /// Spawns skipped because the board was full
    pub skipped_spawns: usize,
    /// Completed merges
    pub merges: usize,
    /// Highest item level seen so far
    pub highest_level: u8,
}

/// What happened during a single keypress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    /// Cell that received a new item, if any was free
    pub spawned: Option<Position>,
    /// Merges performed after the spawn
    pub merges: Vec<MergeOutcome>,
}

/// Board, randomness and merge rules for one play session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    selector: RandomSelector,
    strategy: MergeStrategy,
    stats: SessionStats,
}

impl GameSession {
    /// Start a session on an empty default-size board
    pub fn new(seed: u64, strategy: MergeStrategy) -> Self {
        Self::with_board(Board::new(GRID_SIZE), seed, strategy)
    }

    /// Start a session from an existing board
    pub fn with_board(board: Board, seed: u64, strategy: MergeStrategy) -> Self {
        let stats = SessionStats {
            highest_level: board.highest_level().unwrap_or(0),
            ..SessionStats::default()
        };

        Self {
            board,
            selector: RandomSelector::new(seed),
            strategy,
            stats,
        }
    }

    /// Current board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Counters accumulated so far
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Merge strategy in use
    pub const fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Place a level 1 item of a weighted random kind into a random empty cell
    ///
    /// Returns the chosen cell, or `None` when the board is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to present the spawn
    pub fn spawn_item<O: BoardObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<Option<Position>> {
        let empty_cells = self.board.empty_cells();
        let Some(position) = self
            .selector
            .choose_index(empty_cells.len())
            .and_then(|index| empty_cells.get(index).copied())
        else {
            self.stats.skipped_spawns += 1;
            tracing::debug!("board full, nothing spawned");
            return Ok(None);
        };

        let item = Item::new(choose_kind(&mut self.selector));
        self.board.place(position, item)?;
        self.stats.spawns += 1;
        self.stats.highest_level = self.stats.highest_level.max(item.level());
        tracing::debug!(%position, item = %item, "spawned");

        observer.on_spawn(&self.board, position, &item)?;
        Ok(Some(position))
    }

    /// Handle one keypress: spawn, then resolve merges on every cell
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails during spawn or merge
    pub fn press_key<O: BoardObserver + ?Sized>(&mut self, observer: &mut O) -> Result<TurnReport> {
        self.stats.keypresses += 1;

        let spawned = self.spawn_item(observer)?;
        let merges = resolve_all(&mut self.board, self.strategy, observer)?;

        self.stats.merges += merges.len();
        if let Some(level) = merges.iter().map(|outcome| outcome.to_level).max() {
            self.stats.highest_level = self.stats.highest_level.max(level);
        }

        Ok(TurnReport { spawned, merges })
    }
}
