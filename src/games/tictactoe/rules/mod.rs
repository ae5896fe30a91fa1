//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Each takes a board by reference and
//! either inspects it or returns a new board.

pub mod draw;
pub mod moves;
pub mod turn;
pub mod win;

pub use draw::{Utility, is_full, is_terminal, utility};
pub use moves::{apply, legal_actions};
pub use turn::{initial_state, mark_counts, mover};
pub use win::winner;
