//! Merge resolution over the board
//!
//! A cell merges when at least `MIN_MERGE_NEIGHBORS` orthogonal neighbors
//! hold an item of the same kind and level. The cell's item upgrades one
//! level and every matching neighbor is cleared. The cascading strategy
//! keeps rechecking through a work queue until the cell settles.

use std::collections::VecDeque;

use crate::game::board::{Board, Position};
use crate::game::observer::BoardObserver;
use crate::io::configuration::MIN_MERGE_NEIGHBORS;
use crate::io::error::Result;

/// How far a merge check follows up on its own result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Check each cell once per pass
    Single,
    /// Requeue upgraded and cleared cells until nothing merges
    #[default]
    Cascade,
}

/// Record of one completed merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Cell holding the upgraded item
    pub position: Position,
    /// Neighbor cells that were cleared
    pub absorbed: Vec<Position>,
    /// Level before the upgrade
    pub from_level: u8,
    /// Level after the upgrade
    pub to_level: u8,
}

/// Merge the item at `position` with its neighbors if enough of them match
///
/// Emits the merge animation with the item at its old level, upgrades it,
/// emits a spawn animation for the upgraded item and then clears the
/// absorbed neighbors.
///
/// # Errors
///
/// Returns an error if the observer fails or the cell cannot be updated
pub fn merge_at<O: BoardObserver + ?Sized>(
    board: &mut Board,
    position: Position,
    observer: &mut O,
) -> Result<Option<MergeOutcome>> {
    let Some(&item) = board.get(position) else {
        return Ok(None);
    };

    let neighbors = board.mergeable_neighbors(position);
    tracing::trace!(%position, item = %item, neighbors = neighbors.len(), "checking for merge");

    if neighbors.len() < MIN_MERGE_NEIGHBORS {
        return Ok(None);
    }

    observer.on_merge(board, position, &item, &neighbors)?;

    let upgraded = item.merged();
    board.place(position, upgraded)?;
    tracing::info!(%position, from = %item, to = %upgraded, absorbed = neighbors.len(), "merged");

    observer.on_spawn(board, position, &upgraded)?;

    for &neighbor in &neighbors {
        board.take(neighbor);
    }

    Ok(Some(MergeOutcome {
        position,
        absorbed: neighbors,
        from_level: item.level(),
        to_level: upgraded.level(),
    }))
}

/// Check one cell using the given strategy
///
/// # Errors
///
/// Returns an error if the observer fails or a cell cannot be updated
pub fn check_and_merge<O: BoardObserver + ?Sized>(
    board: &mut Board,
    position: Position,
    strategy: MergeStrategy,
    observer: &mut O,
) -> Result<Vec<MergeOutcome>> {
    match strategy {
        MergeStrategy::Single => Ok(merge_at(board, position, observer)?.into_iter().collect()),
        MergeStrategy::Cascade => cascade_from(board, position, observer),
    }
}

// Terminates because the queue only grows on a merge and every merge removes
// at least two items from the board.
fn cascade_from<O: BoardObserver + ?Sized>(
    board: &mut Board,
    start: Position,
    observer: &mut O,
) -> Result<Vec<MergeOutcome>> {
    let mut outcomes = Vec::new();
    let mut merge_queue = VecDeque::from([start]);

    while let Some(current) = merge_queue.pop_front() {
        if board.get(current).is_none() {
            continue;
        }

        if let Some(outcome) = merge_at(board, current, observer)? {
            merge_queue.extend(outcome.absorbed.iter().copied());
            merge_queue.push_back(current);
            outcomes.push(outcome);
        }
    }

    Ok(outcomes)
}

/// Run a merge check on every cell in row-major order
///
/// # Errors
///
/// Returns an error if the observer fails or a cell cannot be updated
pub fn resolve_all<O: BoardObserver + ?Sized>(
    board: &mut Board,
    strategy: MergeStrategy,
    observer: &mut O,
) -> Result<Vec<MergeOutcome>> {
    let mut outcomes = Vec::new();
    for position in board.positions() {
        outcomes.extend(check_and_merge(board, position, strategy, observer)?);
    }
    Ok(outcomes)
}
