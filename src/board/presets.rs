//! Supported puzzle sizes, their goal states, and predefined boards.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::state::Board;
use crate::config::ConfigError;

/// The puzzle sizes the solver ships goals and boards for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum PuzzleSize {
    /// 3x3 board.
    #[value(name = "8")]
    #[serde(rename = "8")]
    Eight,
    /// 4x4 board.
    #[value(name = "15")]
    #[serde(rename = "15")]
    Fifteen,
}

static EIGHT_GOAL: LazyLock<Board> =
    LazyLock::new(|| Board::from_tiles(3, EIGHT_GOAL_TILES.to_vec()).unwrap());
static FIFTEEN_GOAL: LazyLock<Board> =
    LazyLock::new(|| Board::from_tiles(4, FIFTEEN_GOAL_TILES.to_vec()).unwrap());

const EIGHT_GOAL_TILES: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];
const FIFTEEN_GOAL_TILES: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];

/// Predefined 8-puzzle boards, in increasing optimal depth
/// (2, 5, 8, 11, 14, 17, 20, 23, 26, 31).
const EIGHT_PUZZLE_BOARDS: [[u8; 9]; 10] = [
    [1, 2, 3, 4, 0, 6, 7, 5, 8],
    [1, 2, 3, 5, 6, 0, 4, 7, 8],
    [4, 1, 2, 5, 3, 6, 7, 8, 0],
    [4, 1, 3, 7, 6, 8, 5, 0, 2],
    [1, 4, 3, 7, 0, 6, 5, 8, 2],
    [2, 3, 5, 4, 8, 0, 1, 6, 7],
    [6, 3, 4, 5, 7, 2, 0, 1, 8],
    [4, 6, 3, 5, 7, 8, 2, 0, 1],
    [6, 1, 4, 2, 0, 7, 3, 8, 5],
    [6, 4, 7, 8, 5, 0, 3, 2, 1],
];

/// Predefined 15-puzzle boards, in increasing optimal depth
/// (6, 12, 18, 20, 22, 28, 30).
const FIFTEEN_PUZZLE_BOARDS: [[u8; 16]; 7] = [
    [1, 2, 7, 3, 5, 6, 11, 4, 9, 10, 0, 8, 13, 14, 15, 12],
    [5, 1, 2, 4, 6, 10, 3, 7, 13, 9, 11, 8, 14, 0, 15, 12],
    [1, 2, 3, 4, 9, 5, 15, 11, 6, 10, 12, 7, 13, 14, 8, 0],
    [1, 3, 4, 8, 5, 9, 7, 12, 6, 2, 0, 15, 13, 10, 11, 14],
    [1, 2, 7, 6, 9, 5, 4, 0, 10, 14, 8, 3, 13, 11, 12, 15],
    [6, 1, 3, 4, 14, 5, 7, 8, 0, 2, 9, 11, 10, 15, 13, 12],
    [2, 4, 14, 3, 1, 10, 8, 0, 5, 7, 12, 6, 9, 13, 11, 15],
];

impl PuzzleSize {
    /// Side length of the board.
    pub const fn side(self) -> usize {
        match self {
            PuzzleSize::Eight => 3,
            PuzzleSize::Fifteen => 4,
        }
    }

    /// The fixed goal state for this size.
    pub fn goal(self) -> &'static Board {
        match self {
            PuzzleSize::Eight => &EIGHT_GOAL,
            PuzzleSize::Fifteen => &FIFTEEN_GOAL,
        }
    }

    /// Maps a side length back to a supported size.
    pub fn from_side(side: usize) -> Option<PuzzleSize> {
        match side {
            3 => Some(PuzzleSize::Eight),
            4 => Some(PuzzleSize::Fifteen),
            _ => None,
        }
    }
}

impl fmt::Display for PuzzleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleSize::Eight => f.write_str("8"),
            PuzzleSize::Fifteen => f.write_str("15"),
        }
    }
}

impl FromStr for PuzzleSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "8" => Ok(PuzzleSize::Eight),
            "15" => Ok(PuzzleSize::Fifteen),
            other => Err(ConfigError::UnsupportedSize(other.to_string())),
        }
    }
}

/// Returns the predefined initial boards for `size`, in catalogue order.
pub fn preset_boards(size: PuzzleSize) -> Vec<Board> {
    match size {
        PuzzleSize::Eight => EIGHT_PUZZLE_BOARDS
            .iter()
            .map(|t| Board::from_tiles(3, t.to_vec()).unwrap())
            .collect(),
        PuzzleSize::Fifteen => FIFTEEN_PUZZLE_BOARDS
            .iter()
            .map(|t| Board::from_tiles(4, t.to_vec()).unwrap())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_match_solved_layout() {
        assert_eq!(PuzzleSize::Eight.goal(), &Board::solved(3).unwrap());
        assert_eq!(PuzzleSize::Fifteen.goal(), &Board::solved(4).unwrap());
    }

    #[test]
    fn presets_have_matching_side_and_are_solvable() {
        for size in [PuzzleSize::Eight, PuzzleSize::Fifteen] {
            let boards = preset_boards(size);
            assert!(!boards.is_empty());
            for b in &boards {
                assert_eq!(b.size(), size.side());
                assert!(b.has_solvable_parity(), "unsolvable preset {}", b);
                assert_ne!(b, size.goal());
            }
        }
        assert_eq!(preset_boards(PuzzleSize::Eight).len(), 10);
        assert_eq!(preset_boards(PuzzleSize::Fifteen).len(), 7);
    }

    #[test]
    fn size_parses_from_cli_names() {
        assert_eq!("8".parse::<PuzzleSize>().unwrap(), PuzzleSize::Eight);
        assert_eq!("15".parse::<PuzzleSize>().unwrap(), PuzzleSize::Fifteen);
        assert!(matches!(
            "24".parse::<PuzzleSize>(),
            Err(ConfigError::UnsupportedSize(s)) if s == "24"
        ));
    }

    #[test]
    fn side_roundtrip() {
        for size in [PuzzleSize::Eight, PuzzleSize::Fifteen] {
            assert_eq!(PuzzleSize::from_side(size.side()), Some(size));
        }
        assert_eq!(PuzzleSize::from_side(5), None);
    }
}
