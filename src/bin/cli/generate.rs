use rand::rngs::SmallRng;
use rand::SeedableRng;
use tile_slider::generation::{self, Difficulty};

pub fn run(size: usize, difficulty: Difficulty, seed: Option<u64>, count: usize, uniform: bool) {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    for index in 0..count {
        let board = if uniform {
            generation::shuffled_board(size, &mut rng)
        } else {
            generation::generate_puzzle_with(size, difficulty, &mut rng)
        };

        println!("Board {}:", index + 1);
        println!("{}", board);
    }
}
