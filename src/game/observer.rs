//! Hooks for animating spawn and merge events as they happen

use crate::game::board::{Board, Position};
use crate::game::item::Item;
use crate::io::error::Result;

/// Receives board events at the moment they occur
///
/// The board is passed in its state at that moment. The animated item is
/// passed separately; renderers hide its cell while drawing the animation.
pub trait BoardObserver {
    /// An item appeared at `position`, either freshly spawned or upgraded
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to present the event
    fn on_spawn(&mut self, board: &Board, position: Position, item: &Item) -> Result<()>;

    /// The item at `position` is about to absorb `neighbors`
    ///
    /// `item` is still at its pre-merge level and the neighbors are still
    /// on the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the observer fails to present the event
    fn on_merge(
        &mut self,
        board: &Board,
        position: Position,
        item: &Item,
        neighbors: &[Position],
    ) -> Result<()>;
}

impl BoardObserver for () {
    fn on_spawn(&mut self, _board: &Board, _position: Position, _item: &Item) -> Result<()> {
        Ok(())
    }

    fn on_merge(
        &mut self,
        _board: &Board,
        _position: Position,
        _item: &Item,
        _neighbors: &[Position],
    ) -> Result<()> {
        Ok(())
    }
}

impl<O: BoardObserver + ?Sized> BoardObserver for &mut O {
    fn on_spawn(&mut self, board: &Board, position: Position, item: &Item) -> Result<()> {
        (**self).on_spawn(board, position, item)
    }

    fn on_merge(
        &mut self,
        board: &Board,
        position: Position,
        item: &Item,
        neighbors: &[Position],
    ) -> Result<()> {
        (**self).on_merge(board, position, item, neighbors)
    }
}

impl<O: BoardObserver> BoardObserver for Option<O> {
    fn on_spawn(&mut self, board: &Board, position: Position, item: &Item) -> Result<()> {
        self.as_mut()
            .map_or(Ok(()), |observer| observer.on_spawn(board, position, item))
    }

    fn on_merge(
        &mut self,
        board: &Board,
        position: Position,
        item: &Item,
        neighbors: &[Position],
    ) -> Result<()> {
        self.as_mut().map_or(Ok(()), |observer| {
            observer.on_merge(board, position, item, neighbors)
        })
    }
}

impl<A: BoardObserver, B: BoardObserver> BoardObserver for (A, B) {
    fn on_spawn(&mut self, board: &Board, position: Position, item: &Item) -> Result<()> {
        self.0.on_spawn(board, position, item)?;
        self.1.on_spawn(board, position, item)
    }

    fn on_merge(
        &mut self,
        board: &Board,
        position: Position,
        item: &Item,
        neighbors: &[Position],
    ) -> Result<()> {
        self.0.on_merge(board, position, item, neighbors)?;
        self.1.on_merge(board, position, item, neighbors)
    }
}
