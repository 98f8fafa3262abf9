mod pattern;
mod shuffle;
mod walk;

use crate::board::Board;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub use pattern::{generate_pattern, PatternType, UnknownPatternError, PATTERN_SIZE};
pub use shuffle::shuffled_board;
pub use walk::scramble;

/// How thoroughly a fresh board gets scrambled. The factor multiplies
/// the base walk length of five moves per cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    fn factor(self) -> usize {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn walk_length(self, size: usize) -> usize {
        size * size * 5 * self.factor()
    }
}

/// A colour puzzle: the scrambled starting board together with the
/// target pattern the player has to restore.
pub struct GeneratedPuzzle {
    pub board: Board,
    pub target: Board,
}

/// Produces a scrambled classic board that is solvable by construction:
/// a random walk of legal slides away from the solved arrangement.
pub fn generate_puzzle(size: usize, difficulty: Difficulty, seed: Option<u64>) -> Board {
    generate_puzzle_with(size, difficulty, &mut rng_for(seed))
}

pub fn generate_puzzle_with<G: Rng>(size: usize, difficulty: Difficulty, rng: &mut G) -> Board {
    scrambled_from(Board::solved(size), difficulty.walk_length(size), rng)
}

/// Produces a colour puzzle: a target pattern plus a starting board
/// scrambled away from it, so the target is reachable by construction.
pub fn generate_pattern_puzzle(
    kind: PatternType,
    difficulty: Difficulty,
    seed: Option<u64>,
) -> GeneratedPuzzle {
    generate_pattern_puzzle_with(kind, difficulty, &mut rng_for(seed))
}

pub fn generate_pattern_puzzle_with<G: Rng>(
    kind: PatternType,
    difficulty: Difficulty,
    rng: &mut G,
) -> GeneratedPuzzle {
    let target = pattern::generate_pattern(kind, rng);
    let board = scrambled_from(target.clone(), difficulty.walk_length(PATTERN_SIZE), rng);

    GeneratedPuzzle { board, target }
}

fn rng_for(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// A random walk can wander back to its starting point; a fresh puzzle
/// must never begin in the goal arrangement.
fn scrambled_from<G: Rng>(start: Board, moves: usize, rng: &mut G) -> Board {
    let goal = start.clone();
    let mut board = walk::scramble(start, moves, rng);

    while board == goal {
        board = walk::scramble(board, 1, rng);
    }

    board
}
