//! Move generation and application for tic-tac-toe.

use super::super::action::{Action, InvalidActionError, InvalidActionKind};
use super::super::types::{Board, Cell, SIZE};
use super::turn::mover;
use tracing::instrument;

/// Returns every empty cell as an action, in row-major order.
///
/// A full board yields no actions.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
        .filter(|a| board.get(a.row, a.col) == Some(Cell::Empty))
        .collect()
}

/// Returns the board that results from the mover marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidActionError`] when the coordinates are off the board
/// or the target cell is already occupied.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    match board.get(action.row, action.col) {
        None => Err(InvalidActionError::new(
            InvalidActionKind::OutOfRange,
            action,
            *board,
        )),
        Some(Cell::Occupied(_)) => Err(InvalidActionError::new(
            InvalidActionKind::Occupied,
            action,
            *board,
        )),
        Some(Cell::Empty) => Ok(board.with_cell(
            action.row,
            action.col,
            Cell::Occupied(mover(board)),
        )),
    }
}
