//! Board state representation.
//!
//! A `Board` is an immutable snapshot of an N x N sliding-tile puzzle:
//! tile labels `1..N*N-1` plus the blank, stored as `0`. Boards compare,
//! hash and order by value so the search can deduplicate them.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Smallest supported side length.
pub const MIN_SIZE: usize = 2;

/// Largest supported side length (tile labels must fit in a `u8`).
pub const MAX_SIZE: usize = 16;

/// Errors that can occur while ingesting a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board side must be between 2 and 16, got {0}")]
    InvalidSize(usize),

    #[error("expected {expected} tiles, got {found}")]
    WrongTileCount { expected: usize, found: usize },

    #[error("tile count {0} is not a perfect square")]
    NotSquare(usize),

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile {value} is out of range (max {max})")]
    TileOutOfRange { value: u8, max: usize },

    #[error("board has no blank (0) tile")]
    MissingBlank,

    #[error("board has {0} blank (0) tiles, expected exactly one")]
    MultipleBlanks(usize),

    #[error("duplicate tile {0}")]
    DuplicateTile(u8),

    #[error("invalid tile value: '{0}'")]
    InvalidTile(String),

    #[error("initial board is {initial}x{initial} but goal is {goal}x{goal}")]
    SizeMismatch { initial: usize, goal: usize },
}

/// Immutable N x N puzzle state.
///
/// Tiles are stored row-major. The derived ordering compares tiles
/// lexicographically, which is the tie-break the frontier relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    size: usize,
    tiles: Box<[u8]>,
    /// Row-major index of the blank. Always consistent with `tiles`.
    blank: usize,
}

impl Board {
    /// Builds a board from row-major tiles, validating that they form a
    /// permutation of `0..size*size` with exactly one blank.
    pub fn from_tiles(size: usize, tiles: Vec<u8>) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        let cells = size * size;
        if tiles.len() != cells {
            return Err(BoardError::WrongTileCount {
                expected: cells,
                found: tiles.len(),
            });
        }
        if let Some(&value) = tiles.iter().find(|&&t| t as usize >= cells) {
            return Err(BoardError::TileOutOfRange {
                value,
                max: cells - 1,
            });
        }

        match tiles.iter().filter(|&&t| t == 0).count() {
            0 => return Err(BoardError::MissingBlank),
            1 => {}
            n => return Err(BoardError::MultipleBlanks(n)),
        }

        let mut seen = [false; MAX_SIZE * MAX_SIZE];
        let mut blank = 0;
        for (i, &t) in tiles.iter().enumerate() {
            if t == 0 {
                blank = i;
                continue;
            }
            if seen[t as usize] {
                return Err(BoardError::DuplicateTile(t));
            }
            seen[t as usize] = true;
        }

        Ok(Board {
            size,
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// Builds a board from a list of equal-length rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut tiles = Vec::with_capacity(size * size);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: size,
                    found: r.len(),
                });
            }
            tiles.extend_from_slice(r);
        }
        Board::from_tiles(size, tiles)
    }

    /// Returns the canonical solved layout: ascending tiles, blank last.
    pub fn solved(size: usize) -> Result<Self, BoardError> {
        let cells = size * size;
        let tiles = (1..cells)
            .map(|t| t as u8)
            .chain(std::iter::once(0))
            .collect();
        Board::from_tiles(size, tiles)
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tiles.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Tile at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * self.size + col]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.size)
    }

    /// Copies the board into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Returns the `(row, col)` of the blank.
    pub fn locate_blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Returns a copy with the blank swapped into row-major cell `to`.
    /// The caller guarantees `to` is orthogonally adjacent to the blank.
    pub(crate) fn slide_blank(&self, to: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, to);
        Board {
            size: self.size,
            tiles,
            blank: to,
        }
    }

    /// Whether the board is in the same permutation-parity class as the
    /// canonical solved layout, i.e. whether a solution exists.
    pub fn has_solvable_parity(&self) -> bool {
        let labels: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        let mut inversions = 0usize;
        for (i, &a) in labels.iter().enumerate() {
            inversions += labels[i + 1..].iter().filter(|&&b| b < a).count();
        }
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (blank_row, _) = self.locate_blank();
            (inversions + blank_row) % 2 == 1
        }
    }
}

impl fmt::Display for Board {
    /// Nested-list form, e.g. `[[1, 2, 3], [4, 0, 6], [7, 5, 8]]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (c, t) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", t)?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

impl Serialize for Board {
    /// Serializes as nested rows, matching the `Display` form.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses tiles separated by commas, whitespace or `/`, e.g.
    /// `"1,2,3/4,0,6/7,5,8"` or `"1 2 3 4 0 6 7 5 8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<u8>()
                    .map_err(|_| BoardError::InvalidTile(tok.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let size = (1..=MAX_SIZE)
            .find(|n| n * n >= tiles.len())
            .unwrap_or(MAX_SIZE + 1);
        if size * size != tiles.len() {
            return Err(BoardError::NotSquare(tiles.len()));
        }
        Board::from_tiles(size, tiles)
    }
}
