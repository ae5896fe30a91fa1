//! Actions and the error raised when one cannot be applied.
//!
//! An action names the cell to mark. It carries no player: the mark is
//! always the board's current mover, so an action is only meaningful
//! relative to the board it is applied to.

use super::types::{Board, SIZE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A cell coordinate to mark, as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[display("({}, {})", row, col)]
pub struct Action {
    /// Board row (0-2 when valid).
    pub row: usize,
    /// Board column (0-2 when valid).
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true when both coordinates lie on the board.
    pub fn in_range(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Why an action could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionKind {
    /// Row or column outside `0..=2`.
    #[display("coordinates outside the board")]
    OutOfRange,
    /// The target cell already holds a mark.
    #[display("target cell is already occupied")]
    Occupied,
}

/// An action that cannot be applied to a board.
///
/// This signals a broken caller contract rather than a recoverable
/// condition. It is returned, never logged or printed at the raising site.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Getters)]
#[display("Invalid action {}: {} on board\n{}", action, kind, board)]
pub struct InvalidActionError {
    /// Which rule the action broke.
    kind: InvalidActionKind,
    /// The offending action.
    action: Action,
    /// The board the action was attempted against.
    board: Board,
}

impl InvalidActionError {
    /// Creates a new invalid action error.
    pub fn new(kind: InvalidActionKind, action: Action, board: Board) -> Self {
        Self { kind, action, board }
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> String {
        format!("Invalid action {}: {}", self.action, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert!(Action::new(0, 0).in_range());
        assert!(Action::new(2, 2).in_range());
        assert!(!Action::new(3, 0).in_range());
        assert!(!Action::new(0, 3).in_range());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::new(1, 2).to_string(), "(1, 2)");
        assert_eq!(Action::from((0, 1)), Action::new(0, 1));
    }

    #[test]
    fn test_error_messages_distinguish_kinds() {
        let board = Board::new();
        let range =
            InvalidActionError::new(InvalidActionKind::OutOfRange, Action::new(5, 0), board);
        let occupied =
            InvalidActionError::new(InvalidActionKind::Occupied, Action::new(0, 0), board);

        assert!(range.message().contains("outside"));
        assert!(occupied.message().contains("occupied"));
        assert!(range.to_string().contains("(5, 0)"));
        assert_eq!(*occupied.kind(), InvalidActionKind::Occupied);
        assert_eq!(*occupied.board(), board);
    }
}
