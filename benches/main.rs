use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tile_slider::board::{Board, Position};
use tile_slider::generation::{generate_puzzle_with, scramble, shuffled_board, Difficulty};

fn generating_boards(c: &mut Criterion) {
    let mut group = c.benchmark_group("generating boards");

    group.bench_function("walk 4x4 medium", |b| {
        b.iter_batched(
            || SmallRng::seed_from_u64(0),
            |mut rng| generate_puzzle_with(black_box(4), Difficulty::Medium, &mut rng),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("walk 9x9 hard", |b| {
        b.iter_batched(
            || SmallRng::seed_from_u64(0),
            |mut rng| generate_puzzle_with(black_box(9), Difficulty::Hard, &mut rng),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("uniform shuffle 4x4", |b| {
        b.iter_batched(
            || SmallRng::seed_from_u64(0),
            |mut rng| shuffled_board(black_box(4), &mut rng),
            BatchSize::SmallInput,
        )
    });
}

fn checking_solvability(c: &mut Criterion) {
    let mut group = c.benchmark_group("checking solvability");

    group.bench_function("9x9 scrambled", |b| {
        b.iter_batched(
            || {
                let mut rng = SmallRng::seed_from_u64(1);
                shuffled_board(9, &mut rng)
            },
            |board| black_box(&board).is_solvable(),
            BatchSize::SmallInput,
        )
    });
}

fn playing_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("playing moves");

    group.bench_function("single slide", |b| {
        b.iter_batched(
            || Board::solved(4),
            |board| board.slide(black_box(Position::new(3, 2))),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("long walk", |b| {
        b.iter_batched(
            || (Board::solved(5), SmallRng::seed_from_u64(2)),
            |(board, mut rng)| scramble(board, 500, &mut rng),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, generating_boards, checking_solvability, playing_moves);
criterion_main!(benches);
