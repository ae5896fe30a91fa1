//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Every winning line as `(row, col)` triples, in scan order:
/// rows, then columns, then the main diagonal and the anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in scan order, so a
/// malformed board with several complete lines still has a defined answer.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    let rows = board.rows();
    LINES.iter().find_map(|&[(r0, c0), (r1, c1), (r2, c2)]| {
        let cell = rows[r0][c0];
        match cell {
            Cell::Occupied(mark) if cell == rows[r1][c1] && cell == rows[r2][c2] => Some(mark),
            _ => None,
        }
    })
}
