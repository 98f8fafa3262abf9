use super::walk;
use crate::board::{Board, BoardCell};
use rand::seq::SliceRandom;
use rand::Rng;

/// Half of all arrangements are solvable, so a couple of attempts
/// normally suffice. Past the cap the walk strategy takes over rather
/// than spinning.
const MAX_ATTEMPTS: usize = 64;

/// Produces a uniformly random solvable arrangement: an unbiased
/// shuffle of the full tile multiset, rejected until it is solvable and
/// not already solved.
pub fn shuffled_board<G: Rng>(size: usize, rng: &mut G) -> Board {
    let mut cells: Vec<BoardCell> = Board::solved(size).cells().collect();

    for _ in 0..MAX_ATTEMPTS {
        cells.shuffle(rng);

        let board = Board::from_cells(size, cells.clone()).unwrap();

        if board.is_solvable() && !board.is_solved() {
            return board;
        }
    }

    walk::scramble(Board::solved(size), size * size * 5, rng)
}
