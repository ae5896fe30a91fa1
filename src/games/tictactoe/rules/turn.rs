//! Turn order for tic-tac-toe.
//!
//! The mover is never stored; it is derived from the marks on the board.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Returns the starting board.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Counts the marks on the board as `(x_count, o_count)`.
pub fn mark_counts(board: &Board) -> (usize, usize) {
    board.cells().fold((0, 0), |(x, o), cell| match cell {
        Cell::Occupied(Mark::X) => (x + 1, o),
        Cell::Occupied(Mark::O) => (x, o + 1),
        Cell::Empty => (x, o),
    })
}

/// Returns the mark that moves next.
///
/// X moves first, so equal counts (including an empty board) give X.
/// Otherwise the mark with fewer pieces on the board is behind and moves.
#[instrument(level = "trace", skip(board))]
pub fn mover(board: &Board) -> Mark {
    let (x_count, o_count) = mark_counts(board);
    if x_count > o_count { Mark::O } else { Mark::X }
}
