//! Tic-tac-toe board model.

mod action;
pub mod rules;
mod types;

pub use action::{Action, InvalidActionError, InvalidActionKind};
pub use rules::{
    Utility, apply, initial_state, is_full, is_terminal, legal_actions, mark_counts, mover,
    utility, winner,
};
pub use types::{Board, Cell, Mark, SIZE};
