//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::EnumIter, strum::Display)]
pub enum Mark {
    /// Mark X (moves first, maximizes utility).
    X,
    /// Mark O (moves second, minimizes utility).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every rule that produces a new position
/// returns a fresh copy, so earlier boards in a search tree stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from explicit rows.
    ///
    /// No legality check is made; the rules treat any grid consistently.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Returns a copy with `(row, col)` set to `cell`.
    ///
    /// Callers must have checked the coordinates.
    pub(crate) fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[row][col] = cell;
        next
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let [a, b, c] = (*row).map(Cell::symbol);
            write!(f, "{a}|{b}|{c}")?;
            if i < SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|c| c == Cell::Empty));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_with_cell_leaves_input() {
        let board = Board::new();
        let next = board.with_cell(1, 1, Cell::Occupied(Mark::X));
        assert_eq!(board.get(1, 1), Some(Cell::Empty));
        assert_eq!(next.get(1, 1), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new()
            .with_cell(0, 0, Cell::Occupied(Mark::X))
            .with_cell(2, 1, Cell::Occupied(Mark::O));
        assert_eq!(board.to_string(), "X|.|.\n.|.|.\n.|O|.");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }
}
