use crate::board::Board;
use rand::seq::SliceRandom;
use rand::Rng;

/// Scrambles by random walk: each step slides a uniformly chosen
/// neighbour of the empty cell. Every intermediate state stays reachable
/// from the start, so solvability is preserved by construction.
pub fn scramble<G: Rng>(mut board: Board, moves: usize, rng: &mut G) -> Board {
    for _ in 0..moves {
        let targets = board.movable_positions();
        let &target = targets.choose(rng).unwrap();

        board = board.slide(target).unwrap();
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn a_walk_of_zero_moves_changes_nothing() {
        let mut rng = SmallRng::seed_from_u64(0);
        let board = Board::solved(4);

        assert_eq!(scramble(board.clone(), 0, &mut rng), board);
    }

    #[test]
    fn walks_preserve_solvability() {
        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let board = scramble(Board::solved(4), 200, &mut rng);

            assert!(board.is_solvable());
        }
    }

    #[test]
    fn walks_are_deterministic_under_a_seed() {
        let first = scramble(Board::solved(5), 100, &mut SmallRng::seed_from_u64(11));
        let second = scramble(Board::solved(5), 100, &mut SmallRng::seed_from_u64(11));

        assert_eq!(first, second);
    }
}
