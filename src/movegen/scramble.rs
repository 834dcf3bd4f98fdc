//! Random solvable boards.
//!
//! Scrambles a goal board by a random walk of legal blank moves. Boards
//! produced this way are always solvable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{apply, legal_actions};
use crate::board::{Action, Board};

/// Walks the blank `moves` times from `goal`, never immediately undoing
/// the previous move.
pub fn scramble(goal: &Board, moves: usize, rng: &mut impl Rng) -> Board {
    let mut board = goal.clone();
    let mut last: Option<Action> = None;

    for _ in 0..moves {
        let options: Vec<Action> = legal_actions(&board)
            .into_iter()
            .filter(|a| Some(a.inverse()) != last)
            .collect();
        let action = options[rng.gen_range(0..options.len())];
        board = apply(&board, action);
        last = Some(action);
    }

    board
}

/// Produces `count` scrambled boards from `goal`.
///
/// A non-zero `seed` makes the batch reproducible; `0` draws from entropy.
pub fn scrambled_boards(goal: &Board, count: usize, moves: usize, seed: u64) -> Vec<Board> {
    let mut rng = if seed != 0 {
        SmallRng::seed_from_u64(seed)
    } else {
        SmallRng::from_entropy()
    };
    (0..count).map(|_| scramble(goal, moves, &mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_moves_returns_goal() {
        let goal = Board::solved(3).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(scramble(&goal, 0, &mut rng), goal);
    }

    #[test]
    fn scrambled_boards_stay_solvable() {
        for side in [2, 3, 4, 5] {
            let goal = Board::solved(side).unwrap();
            for board in scrambled_boards(&goal, 20, 37, 99) {
                assert_eq!(board.size(), side);
                assert!(board.has_solvable_parity(), "unsolvable scramble {}", board);
            }
        }
    }

    #[test]
    fn same_seed_same_boards() {
        let goal = Board::solved(4).unwrap();
        let a = scrambled_boards(&goal, 5, 40, 12345);
        let b = scrambled_boards(&goal, 5, 40, 12345);
        assert_eq!(a, b);
    }

    #[test]
    fn single_move_never_returns_goal() {
        let goal = Board::solved(3).unwrap();
        for seed in 1..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert_ne!(scramble(&goal, 1, &mut rng), goal);
        }
    }
}
