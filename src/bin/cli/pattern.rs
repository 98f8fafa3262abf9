use tile_slider::generation::{self, Difficulty, PatternType};

pub fn run(kind: PatternType, difficulty: Difficulty, seed: Option<u64>) {
    let puzzle = generation::generate_pattern_puzzle(kind, difficulty, seed);

    println!("Target:");
    println!("{}", puzzle.target);
    println!("Start:");
    println!("{}", puzzle.board);
}
