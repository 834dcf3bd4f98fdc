//! Position evaluation.
//!
//! Estimates the remaining cost from a board to the goal with one of four
//! interchangeable heuristics.

pub mod heuristic;

pub use heuristic::{
    heuristic, manhattan_distance, misplaced_tiles, HeuristicKind, ALL_HEURISTICS,
};
