//! Fixed square grid of optional item slots
//!
//! Cells are addressed by `Position` in row-major order. The grid never
//! grows; all lookups outside it resolve to empty.

use ndarray::Array2;
use std::fmt;

use crate::game::item::Item;
use crate::io::error::{GameError, Result};

/// Orthogonal neighbor offsets in check order: up, down, left, right
pub const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Row and column of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based row, top to bottom
    pub row: usize,
    /// Zero-based column, left to right
    pub col: usize,
}

impl Position {
    /// Create a position from row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position shifted by a signed offset, if it stays non-negative
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        match (
            self.row.checked_add_signed(d_row),
            self.col.checked_add_signed(d_col),
        ) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of optional items
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Array2<Option<Item>>,
    size: usize,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
            size,
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Check if a position lies inside the grid
    pub const fn contains(&self, position: Position) -> bool {
        position.row < self.size && position.col < self.size
    }

    /// Item at a position, or `None` for empty and out-of-bounds cells
    pub fn get(&self, position: Position) -> Option<&Item> {
        self.cells
            .get([position.row, position.col])
            .and_then(Option::as_ref)
    }

    /// Mutable access to the item at a position
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Item> {
        self.cells
            .get_mut([position.row, position.col])
            .and_then(Option::as_mut)
    }

    /// Put an item into a cell, returning whatever was there
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` if the position is outside the grid
    pub fn place(&mut self, position: Position, item: Item) -> Result<Option<Item>> {
        if !self.contains(position) {
            return Err(GameError::OutOfBounds {
                row: position.row,
                col: position.col,
                size: self.size,
            });
        }
        Ok(self
            .cells
            .get_mut([position.row, position.col])
            .and_then(|cell| cell.replace(item)))
    }

    /// Remove and return the item in a cell
    pub fn take(&mut self, position: Position) -> Option<Item> {
        self.cells
            .get_mut([position.row, position.col])
            .and_then(Option::take)
    }

    /// All cell positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.get(position).is_none())
            .collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether no empty cell remains
    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.size * self.size
    }

    /// Highest item level on the board
    pub fn highest_level(&self) -> Option<u8> {
        self.cells.iter().flatten().map(Item::level).max()
    }

    /// Orthogonal neighbors holding an item the cell's item can merge with
    ///
    /// Returned in up, down, left, right order. Empty when the cell itself is
    /// empty or outside the grid.
    pub fn mergeable_neighbors(&self, position: Position) -> Vec<Position> {
        let Some(item) = self.get(position) else {
            return Vec::new();
        };

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| position.offset(d_row, d_col))
            .filter(|&neighbor| {
                self.get(neighbor)
                    .is_some_and(|other| item.can_merge_with(other))
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::io::configuration::GRID_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| {
                    cell.map_or_else(
                        || "..".to_string(),
                        |item| {
                            let initial = item.name().chars().next().unwrap_or('?');
                            format!("{initial}{}", item.level())
                        },
                    )
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
