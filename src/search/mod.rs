//! Search.
//!
//! Best-first A* search from an initial board to a goal board, guided by
//! one of the heuristics in [`crate::eval`].

pub mod astar;

pub use astar::{search, AStar, SearchNode, SearchResult, SearchStats, SearchStatus, Solution};
