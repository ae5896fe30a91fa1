//! Order in which the search visits legal actions.
//!
//! The search is exhaustive, so ordering never changes the value found.
//! It only decides which of several equally good actions is returned.

use crate::games::tictactoe::Action;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How each node orders its legal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOrdering {
    /// Row-major order. Ties go to the first cell in reading order.
    #[default]
    Canonical,
    /// Shuffle actions at every node.
    Shuffled {
        /// Seed for a reproducible shuffle; entropy when absent.
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl MoveOrdering {
    /// Creates the per-search state that applies this ordering.
    #[instrument]
    pub fn sequencer(&self) -> Sequencer {
        match self {
            MoveOrdering::Canonical => Sequencer::Canonical,
            MoveOrdering::Shuffled { seed: Some(seed) } => {
                Sequencer::Shuffled(StdRng::seed_from_u64(*seed))
            }
            MoveOrdering::Shuffled { seed: None } => Sequencer::Shuffled(StdRng::from_entropy()),
        }
    }
}

/// Per-search ordering state.
#[derive(Debug, Clone)]
pub enum Sequencer {
    /// Leaves actions in row-major order.
    Canonical,
    /// Shuffles actions with its own RNG.
    Shuffled(StdRng),
}

impl Sequencer {
    /// Reorders `actions` in place.
    pub fn arrange(&mut self, actions: &mut [Action]) {
        match self {
            Sequencer::Canonical => {}
            Sequencer::Shuffled(rng) => actions.shuffle(rng),
        }
    }
}
