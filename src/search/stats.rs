//! Search results and diagnostics.

use crate::games::tictactoe::{Action, Utility};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Child positions visited.
    nodes_explored: u64,
    /// Times a node stopped early because its caller's bound was reached.
    cutoffs: u64,
}

impl SearchStats {
    pub(crate) fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    pub(crate) fn record_cutoff(&mut self) {
        self.cutoffs += 1;
    }
}

/// Result of searching a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best action for the mover, `None` on a terminal board.
    action: Option<Action>,
    /// Utility guaranteed under optimal play from both sides.
    value: Utility,
    /// Diagnostics for this search.
    stats: SearchStats,
}

impl SearchOutcome {
    pub(crate) fn new(action: Option<Action>, value: Utility, stats: SearchStats) -> Self {
        Self {
            action,
            value,
            stats,
        }
    }
}
