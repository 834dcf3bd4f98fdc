//! Slidestar sliding-tile puzzle solver library.
//!
//! Exposes the board representation, move generation, heuristics, A*
//! search, and the batch runner for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod config;
pub mod eval;
pub mod movegen;
pub mod search;
pub mod solver;
