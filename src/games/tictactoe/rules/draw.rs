//! Terminal detection and scoring for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use super::moves::legal_actions;
use super::win::winner;
use tracing::instrument;

/// Utility of a position from X's point of view.
pub type Utility = i8;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|c| c != Cell::Empty)
}

/// Returns true once the game is over: someone has won or no move is left.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || legal_actions(board).is_empty()
}

/// Scores the board: `1` if X has won, `-1` if O has won, `0` otherwise.
///
/// Non-terminal boards score `0` as well; check [`is_terminal`] first.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}
