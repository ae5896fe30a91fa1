//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use strictly_minimax::{
    Board, Cell, Mark, Role, Utility, apply, initial_state, is_terminal, legal_actions, mover,
    utility,
};
use tracing_subscriber::EnvFilter;

pub const X: Cell = Cell::Occupied(Mark::X);
pub const O: Cell = Cell::Occupied(Mark::O);
pub const E: Cell = Cell::Empty;

/// Installs a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Every board reachable from the empty board by legal play.
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            stack.push(apply(&board, action).unwrap());
        }
    }

    boards
}

/// Plain minimax value without pruning, memoized by board and role.
///
/// Roles alternate every ply starting from `role`, while the marks placed
/// follow the count-derived mover, matching how the search walks the tree.
pub fn reference_value(
    board: &Board,
    role: Role,
    memo: &mut HashMap<(Board, Role), Utility>,
) -> Utility {
    if let Some(value) = memo.get(&(*board, role)) {
        return *value;
    }

    let value = if is_terminal(board) {
        utility(board)
    } else {
        let children = legal_actions(board)
            .into_iter()
            .map(|action| reference_value(&apply(board, action).unwrap(), role.opponent(), memo));
        match role {
            Role::Maximize => children.max().unwrap(),
            Role::Minimize => children.min().unwrap(),
        }
    };

    memo.insert((*board, role), value);
    value
}

/// Reference value for the side to move on `board`.
pub fn root_value(board: &Board, memo: &mut HashMap<(Board, Role), Utility>) -> Utility {
    reference_value(board, Role::for_mark(mover(board)), memo)
}

/// Number of marks on the board.
pub fn marks(board: &Board) -> usize {
    board.cells().filter(|c| *c != Cell::Empty).count()
}
