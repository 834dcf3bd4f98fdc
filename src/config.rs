//! Run configuration.
//!
//! A `SolveConfig` describes one batch: which puzzle size, which
//! heuristic, and where the initial boards come from. It is validated
//! before any search starts.

use crate::board::{Board, BoardError, PuzzleSize};
use crate::eval::HeuristicKind;

/// Errors that reject a configuration before searching.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown heuristic '{0}' (expected zero, misplaced, manhattan or weighted_manhattan)")]
    UnknownHeuristic(String),

    #[error("unsupported puzzle size '{0}' (expected 8 or 15)")]
    UnsupportedSize(String),

    #[error("board count must be at least 1")]
    NoBoards,

    #[error("thread count must be at least 1")]
    NoThreads,

    #[error("scramble length must be at least 1")]
    EmptyScramble,

    #[error("board #{index} is {found}x{found}, but the {size}-puzzle is {expected}x{expected}")]
    BoardSizeMismatch {
        index: usize,
        size: PuzzleSize,
        expected: usize,
        found: usize,
    },

    #[error("invalid board #{index}: {source}")]
    InvalidBoard {
        index: usize,
        #[source]
        source: BoardError,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Where the initial boards of a batch come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    /// The predefined boards for the selected size.
    Presets,
    /// Random walks of `moves` steps from the goal. `seed` 0 uses entropy.
    Scrambled { moves: usize, seed: u64 },
    /// Caller-supplied boards.
    Custom(Vec<Board>),
}

/// Configuration for a batch of searches.
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub size: PuzzleSize,
    pub heuristic: HeuristicKind,
    /// Maximum number of boards to solve. Presets are truncated to what is
    /// available; scrambled sources generate exactly this many.
    pub boards: usize,
    pub source: BoardSource,
    /// Worker threads. Each board is still searched on a single thread.
    pub threads: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            size: PuzzleSize::Eight,
            heuristic: HeuristicKind::Manhattan,
            boards: 3,
            source: BoardSource::Presets,
            threads: 1,
        }
    }
}

impl SolveConfig {
    /// Checks everything that can be checked before searching.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boards == 0 {
            return Err(ConfigError::NoBoards);
        }
        if self.threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        match &self.source {
            BoardSource::Presets => {}
            BoardSource::Scrambled { moves, .. } => {
                if *moves == 0 {
                    return Err(ConfigError::EmptyScramble);
                }
            }
            BoardSource::Custom(boards) => {
                if boards.is_empty() {
                    return Err(ConfigError::NoBoards);
                }
                let expected = self.size.side();
                for (i, b) in boards.iter().enumerate() {
                    if b.size() != expected {
                        return Err(ConfigError::BoardSizeMismatch {
                            index: i + 1,
                            size: self.size,
                            expected,
                            found: b.size(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Parses user-supplied board strings, tagging failures with their
/// 1-based position.
pub fn parse_boards<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Board>, ConfigError> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, s)| {
            s.as_ref()
                .parse::<Board>()
                .map_err(|source| ConfigError::InvalidBoard {
                    index: i + 1,
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SolveConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_boards_and_threads() {
        let config = SolveConfig {
            boards: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoBoards)));

        let config = SolveConfig {
            threads: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoThreads)));
    }

    #[test]
    fn rejects_empty_scramble() {
        let config = SolveConfig {
            source: BoardSource::Scrambled { moves: 0, seed: 1 },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyScramble)));
    }

    #[test]
    fn rejects_custom_board_of_wrong_size() {
        let config = SolveConfig {
            size: PuzzleSize::Eight,
            source: BoardSource::Custom(vec![
                Board::solved(3).unwrap(),
                Board::solved(4).unwrap(),
            ]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::BoardSizeMismatch { index: 2, expected: 3, found: 4, .. }
        ));
        assert_eq!(
            err.to_string(),
            "board #2 is 4x4, but the 8-puzzle is 3x3"
        );
    }

    #[test]
    fn parse_boards_reports_position() {
        let boards = parse_boards(&["1,2,3/4,0,6/7,5,8"]).unwrap();
        assert_eq!(boards.len(), 1);

        let err = parse_boards(&["1,2,3/4,0,6/7,5,8", "1,1,3/4,0,6/7,5,8"]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBoard { index: 2, source: BoardError::DuplicateTile(1) }
        ));
        assert_eq!(err.to_string(), "invalid board #2: duplicate tile 1");
    }
}
