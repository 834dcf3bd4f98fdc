//! A* search over puzzle states.
//!
//! The frontier is a min-heap of [`SearchNode`]s ordered by
//! (f, g, state, path). The explored map records the lowest g seen for
//! each state; a child is pushed only if its state is new or reached with
//! a strictly lower g, and the map is updated at push time. Popped nodes
//! are not re-checked against the map, so a stale duplicate can still be
//! expanded when the heuristic is inconsistent.
//!
//! Generation counts every child considered, including rejected ones, plus
//! the initial node. Peak frontier size is sampled at the start of each
//! iteration.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::{debug, trace};

use crate::board::{Action, Board, BoardError};
use crate::eval::{heuristic, HeuristicKind};
use crate::movegen::{apply, legal_actions, step_cost};

/// Counters reported at the end of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped and expanded (the goal pop is not counted).
    pub expanded: u64,
    /// Nodes generated, including the initial node and rejected children.
    pub generated: u64,
    /// Largest frontier observed at the start of an iteration.
    pub max_frontier: usize,
}

/// A path from the initial state to the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cost: u32,
}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the frontier was exhausted without reaching the goal.
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Engine state after a call to [`AStar::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    GoalFound,
    Exhausted,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        self != SearchStatus::Running
    }
}

/// A frontier entry.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Estimated total cost, `g + h`.
    pub f: f64,
    /// Cost so far.
    pub g: u32,
    pub state: Board,
    /// Actions taken from the initial state.
    pub path: Vec<Action>,
}

impl Ord for SearchNode {
    /// Lexicographic on (f, g, state, path).
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| self.state.cmp(&other.state))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

/// A single A* run from one initial state to one goal.
///
/// Drive it with [`step`](AStar::step) to impose an external bound, or
/// call [`run`](AStar::run) to search to completion. The engine itself
/// never gives up early.
pub struct AStar {
    goal: Board,
    kind: HeuristicKind,
    frontier: BinaryHeap<Reverse<SearchNode>>,
    explored: HashMap<Board, u32>,
    stats: SearchStats,
    status: SearchStatus,
    solution: Option<Solution>,
}

impl AStar {
    /// Seeds the frontier with `initial` at g = 0.
    pub fn new(initial: &Board, goal: &Board, kind: HeuristicKind) -> Result<Self, BoardError> {
        if initial.size() != goal.size() {
            return Err(BoardError::SizeMismatch {
                initial: initial.size(),
                goal: goal.size(),
            });
        }

        let h = heuristic(goal, initial, kind);
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(SearchNode {
            f: h,
            g: 0,
            state: initial.clone(),
            path: Vec::new(),
        }));
        let mut explored = HashMap::new();
        explored.insert(initial.clone(), 0);

        debug!(%initial, heuristic = %kind, h, "starting A* search");

        Ok(AStar {
            goal: goal.clone(),
            kind,
            frontier,
            explored,
            stats: SearchStats {
                expanded: 0,
                generated: 1,
                max_frontier: 1,
            },
            status: SearchStatus::Running,
            solution: None,
        })
    }

    /// Runs one iteration: pop the best node, stop if it is the goal,
    /// otherwise expand it. Once terminal, keeps returning the same status.
    pub fn step(&mut self) -> SearchStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        let Some(Reverse(node)) = self.frontier.pop() else {
            self.status = SearchStatus::Exhausted;
            debug!(
                expanded = self.stats.expanded,
                generated = self.stats.generated,
                max_frontier = self.stats.max_frontier,
                "frontier exhausted, no solution"
            );
            return self.status;
        };

        if node.state == self.goal {
            debug!(
                cost = node.g,
                expanded = self.stats.expanded,
                generated = self.stats.generated,
                max_frontier = self.stats.max_frontier,
                "goal reached"
            );
            self.solution = Some(Solution {
                cost: node.g,
                actions: node.path,
            });
            self.status = SearchStatus::GoalFound;
            return self.status;
        }

        self.stats.expanded += 1;
        trace!(f = node.f, g = node.g, state = %node.state, "expanding");

        for action in legal_actions(&node.state) {
            let child = apply(&node.state, action);
            self.stats.generated += 1;
            let g = node.g + step_cost(&node.state, action, &child);

            let admit = match self.explored.get(&child) {
                Some(&best) => g < best,
                None => true,
            };
            if !admit {
                continue;
            }

            self.explored.insert(child.clone(), g);
            let f = g as f64 + heuristic(&self.goal, &child, self.kind);
            let mut path = Vec::with_capacity(node.path.len() + 1);
            path.extend_from_slice(&node.path);
            path.push(action);
            self.frontier.push(Reverse(SearchNode {
                f,
                g,
                state: child,
                path,
            }));
        }

        SearchStatus::Running
    }

    /// Steps until the search reaches a terminal state.
    pub fn run(mut self) -> SearchResult {
        while !self.step().is_terminal() {}
        SearchResult {
            solution: self.solution,
            stats: self.stats,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The solution, once the goal has been found.
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of distinct states with a recorded best g.
    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    pub fn heuristic_kind(&self) -> HeuristicKind {
        self.kind
    }
}

/// Searches from `initial` to `goal` with the given heuristic.
///
/// Fails only if the two boards differ in size. An unsolvable board is
/// not an error: the result simply has no solution.
pub fn search(
    initial: &Board,
    goal: &Board,
    kind: HeuristicKind,
) -> Result<SearchResult, BoardError> {
    Ok(AStar::new(initial, goal, kind)?.run())
}
