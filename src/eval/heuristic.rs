//! Heuristic estimates of the remaining cost to the goal.
//!
//! Four strategies are available, selected once per search:
//!
//! - `zero`: always 0, turning A* into uniform-cost search.
//! - `misplaced`: non-blank tiles out of place, scanning only rows and
//!   columns `0..N-1` (the last row and last column are never inspected).
//! - `manhattan`: sum of each tile's grid distance to its home cell, where
//!   the home cell is derived from the tile label.
//! - `weighted_manhattan`: `manhattan * 1.5`. Overestimates, so paths are
//!   no longer guaranteed optimal.
//!
//! All values are multiples of 0.5, so they order exactly as `f64`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::ConfigError;

/// Factor applied by [`HeuristicKind::WeightedManhattan`].
pub const MANHATTAN_WEIGHT: f64 = 1.5;

/// Heuristic selection, fixed for the duration of one search.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Always 0 (uniform-cost search).
    #[value(name = "zero")]
    Zero,
    /// Misplaced tiles, excluding the last row and column.
    #[value(name = "misplaced")]
    Misplaced,
    /// Sum of Manhattan distances.
    #[value(name = "manhattan")]
    Manhattan,
    /// Manhattan distance scaled by 1.5 (inadmissible).
    #[value(name = "weighted_manhattan")]
    WeightedManhattan,
}

/// Every heuristic, in CLI listing order.
pub const ALL_HEURISTICS: [HeuristicKind; 4] = [
    HeuristicKind::Zero,
    HeuristicKind::Misplaced,
    HeuristicKind::Manhattan,
    HeuristicKind::WeightedManhattan,
];

impl HeuristicKind {
    /// Name used on the command line and in reports.
    pub const fn name(self) -> &'static str {
        match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::Misplaced => "misplaced",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::WeightedManhattan => "weighted_manhattan",
        }
    }

    /// Whether the estimate never exceeds the true remaining cost, which
    /// makes the returned path optimal.
    pub const fn is_admissible(self) -> bool {
        !matches!(self, HeuristicKind::WeightedManhattan)
    }

    /// Evaluates this heuristic for `state` against `goal`.
    #[inline]
    pub fn evaluate(self, goal: &Board, state: &Board) -> f64 {
        heuristic(goal, state, self)
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_HEURISTICS
            .into_iter()
            .find(|k| k.name() == s.trim())
            .ok_or_else(|| ConfigError::UnknownHeuristic(s.to_string()))
    }
}

/// Estimates the remaining cost from `state` to `goal`.
pub fn heuristic(goal: &Board, state: &Board, kind: HeuristicKind) -> f64 {
    match kind {
        HeuristicKind::Zero => 0.0,
        HeuristicKind::Misplaced => misplaced_tiles(goal, state) as f64,
        HeuristicKind::Manhattan => manhattan_distance(state) as f64,
        HeuristicKind::WeightedManhattan => manhattan_distance(state) as f64 * MANHATTAN_WEIGHT,
    }
}

/// Counts non-blank tiles that differ from `goal`, inspecting only rows
/// and columns `0..N-1`.
#[inline]
pub fn misplaced_tiles(goal: &Board, state: &Board) -> u32 {
    let n = state.size();
    let mut count = 0u32;
    for r in 0..n - 1 {
        for c in 0..n - 1 {
            let t = state.get(r, c);
            if t != 0 && t != goal.get(r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Sums `|row - home_row| + |col - home_col|` over all non-blank tiles.
/// Tile `v` lives at row `(v-1) / N`, column `(v-1) % N`.
#[inline]
pub fn manhattan_distance(state: &Board) -> u32 {
    let n = state.size();
    let mut total = 0u32;
    for (i, &t) in state.tiles().iter().enumerate() {
        if t == 0 {
            continue;
        }
        let home = t as usize - 1;
        total += ((i / n).abs_diff(home / n) + (i % n).abs_diff(home % n)) as u32;
    }
    total
}
