//! Board representation.
//!
//! Contains the immutable puzzle state, the blank actions, and the
//! supported puzzle sizes with their goals and predefined boards.

pub mod action;
pub mod presets;
pub mod state;

pub use action::{Action, ALL_ACTIONS};
pub use presets::{preset_boards, PuzzleSize};
pub use state::{Board, BoardError, MAX_SIZE, MIN_SIZE};
