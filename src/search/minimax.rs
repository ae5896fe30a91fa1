//! Exhaustive minimax search with single-bound pruning.
//!
//! X maximizes utility and O minimizes it. Each node receives one bound
//! from its caller: the caller's best value so far. Once the node's own
//! running value reaches that bound the caller can no longer prefer it,
//! so the remaining actions are skipped. Utilities are confined to
//! `-1..=1`, which keeps this single-bound rule exact.

use super::ordering::Sequencer;
use super::role::Role;
use super::stats::{SearchOutcome, SearchStats};
use crate::config::SearchConfig;
use crate::games::tictactoe::{
    Action, Board, InvalidActionError, Utility, apply, is_terminal, legal_actions, mover,
    utility,
};
use tracing::{debug, instrument};

/// State threaded through one search.
struct SearchContext {
    sequencer: Sequencer,
    stats: SearchStats,
}

/// Returns the optimal action for the mover, or `None` on a terminal board.
///
/// Uses the default configuration (canonical ordering).
///
/// # Errors
///
/// Propagates [`InvalidActionError`] from the board model. The search only
/// applies actions it generated, so this indicates a broken board model.
#[instrument(skip(board))]
pub fn best_action(board: &Board) -> Result<Option<Action>, InvalidActionError> {
    Ok(*search(board)?.action())
}

/// Searches `board` with the default configuration.
///
/// # Errors
///
/// See [`best_action`].
#[instrument(skip(board))]
pub fn search(board: &Board) -> Result<SearchOutcome, InvalidActionError> {
    search_with(board, &SearchConfig::default())
}

/// Searches `board` with an explicit configuration.
///
/// # Errors
///
/// See [`best_action`].
#[instrument(skip(board, config), fields(ordering = ?config.ordering()))]
pub fn search_with(
    board: &Board,
    config: &SearchConfig,
) -> Result<SearchOutcome, InvalidActionError> {
    if is_terminal(board) {
        debug!("Board is terminal, nothing to search");
        return Ok(SearchOutcome::new(None, utility(board), SearchStats::default()));
    }

    let mark = mover(board);
    let role = Role::for_mark(mark);
    let mut ctx = SearchContext {
        sequencer: config.ordering().sequencer(),
        stats: SearchStats::default(),
    };

    let (value, action) = explore(board, role, role.unbounded(), &mut ctx)?;

    debug!(
        mover = %mark,
        ?role,
        value,
        action = ?action,
        nodes = ctx.stats.nodes_explored(),
        cutoffs = ctx.stats.cutoffs(),
        "Search complete"
    );
    Ok(SearchOutcome::new(action, value, ctx.stats))
}

/// Scores `board` for `role`, returning the value and the action achieving it.
fn explore(
    board: &Board,
    role: Role,
    bound: Utility,
    ctx: &mut SearchContext,
) -> Result<(Utility, Option<Action>), InvalidActionError> {
    if is_terminal(board) {
        return Ok((utility(board), None));
    }

    let mut value = role.worst();
    let mut best = None;

    let mut actions = legal_actions(board);
    ctx.sequencer.arrange(&mut actions);

    for action in actions {
        if role.cut_off(bound, value) {
            ctx.stats.record_cutoff();
            break;
        }

        ctx.stats.record_node();
        let child = apply(board, action)?;
        let (child_value, _) = explore(&child, role.opponent(), value, ctx)?;
        if role.improves(child_value, value) {
            value = child_value;
            best = Some(action);
        }
    }

    Ok((value, best))
}
