//! Adversarial search over tic-tac-toe boards.

mod minimax;
mod ordering;
mod role;
mod stats;

pub use minimax::{best_action, search, search_with};
pub use ordering::{MoveOrdering, Sequencer};
pub use role::Role;
pub use stats::{SearchOutcome, SearchStats};
