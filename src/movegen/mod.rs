//! Legal move generation and state transitions.
//!
//! Enumerates the blank moves available from a board and applies them,
//! producing new boards. Every transition costs exactly one step.

pub mod scramble;

pub use scramble::{scramble, scrambled_boards};

use crate::board::{Action, Board, ALL_ACTIONS};

/// Cost of a single transition. The puzzle is unit-cost.
pub const STEP_COST: u32 = 1;

/// Returns the legal actions from `state`, always in the order
/// UP, DOWN, LEFT, RIGHT (skipping any that would leave the board).
///
/// The order feeds the frontier's tie-breaking, so it is part of the
/// engine's observable behaviour.
pub fn legal_actions(state: &Board) -> Vec<Action> {
    let (row, col) = state.locate_blank();
    let last = state.size() - 1;
    let mut actions = Vec::with_capacity(4);
    if row > 0 {
        actions.push(Action::Up);
    }
    if row < last {
        actions.push(Action::Down);
    }
    if col > 0 {
        actions.push(Action::Left);
    }
    if col < last {
        actions.push(Action::Right);
    }
    actions
}

/// Whether `action` keeps the blank on the board.
pub fn is_legal(state: &Board, action: Action) -> bool {
    target_cell(state, action).is_some()
}

/// Row-major index the blank moves to, or `None` if off the board.
fn target_cell(state: &Board, action: Action) -> Option<usize> {
    let (row, col) = state.locate_blank();
    let (dr, dc) = action.delta();
    let n = state.size();
    let r = row.checked_add_signed(dr).filter(|&r| r < n)?;
    let c = col.checked_add_signed(dc).filter(|&c| c < n)?;
    Some(r * n + c)
}

/// Applies `action`, returning `None` if it is not legal from `state`.
pub fn try_apply(state: &Board, action: Action) -> Option<Board> {
    target_cell(state, action).map(|to| state.slide_blank(to))
}

/// Applies a legal `action`, swapping the blank with its neighbour in
/// that direction. The input board is never modified.
///
/// # Panics
///
/// Panics if `action` would move the blank off the board. Actions taken
/// from [`legal_actions`] never do.
pub fn apply(state: &Board, action: Action) -> Board {
    match try_apply(state, action) {
        Some(next) => next,
        None => panic!("{} is not legal from {}", action, state),
    }
}

/// Cost of moving from `_state` to `_next` via `_action`. Always
/// [`STEP_COST`].
pub fn step_cost(_state: &Board, _action: Action, _next: &Board) -> u32 {
    STEP_COST
}

/// Iterates over `(action, resulting board)` pairs in generation order.
pub fn successors(state: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    legal_actions(state)
        .into_iter()
        .map(move |a| (a, apply(state, a)))
}

/// Replays `actions` from `state`. Returns `None` as soon as an action
/// is illegal.
pub fn apply_path(state: &Board, actions: &[Action]) -> Option<Board> {
    actions
        .iter()
        .try_fold(state.clone(), |cur, &a| try_apply(&cur, a))
}

/// Number of legal actions from `state` (2 in a corner, 3 on an edge,
/// 4 inside).
pub fn branching_factor(state: &Board) -> usize {
    ALL_ACTIONS.iter().filter(|&&a| is_legal(state, a)).count()
}
