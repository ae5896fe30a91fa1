//! Strictly Minimax - exact game-tree search for tic-tac-toe
//!
//! Given any board, the library derives whose turn it is, enumerates
//! legal actions and computes the optimal action for the mover by
//! exhaustive minimax search with pruning.
//!
//! # Architecture
//!
//! - **Board model**: immutable boards and the pure rule functions over them
//! - **Search**: recursive maximizing/minimizing search with a caller bound
//! - **Config**: TOML-backed search settings (move ordering)
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{apply, best_action, initial_state, is_terminal};
//!
//! # fn main() -> Result<(), strictly_minimax::InvalidActionError> {
//! let mut board = initial_state();
//! while let Some(action) = best_action(&board)? {
//!     board = apply(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod search;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigErrorKind, SearchConfig};

// Crate-level exports - Board model (tic-tac-toe)
pub use games::tictactoe::{
    Action, Board, Cell, InvalidActionError, InvalidActionKind, Mark, SIZE, Utility, apply,
    initial_state, is_full, is_terminal, legal_actions, mark_counts, mover, utility, winner,
};

// Crate-level exports - Search
pub use search::{
    MoveOrdering, Role, SearchOutcome, SearchStats, Sequencer, best_action, search, search_with,
};
