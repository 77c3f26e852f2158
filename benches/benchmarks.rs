use chess_rules::{Board, Move};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Play ~20 random moves from the start to reach a realistic middlegame.
/// Fixed seed so runs are comparable.
fn setup_midgame() -> Board {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let moves = board.legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        board.make_move(mv);
    }
    board
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_legal_moves(c: &mut Criterion) {
    let board = setup_midgame();
    c.bench_function("legal_moves", |b| b.iter(|| black_box(board.legal_moves())));
}

fn bench_make_move(c: &mut Criterion) {
    let board = setup_midgame();
    let moves = board.legal_moves();
    let mv = *moves.first().unwrap();
    c.bench_function("make_move", |b| {
        b.iter_batched(
            || board.clone(),
            |mut g| {
                black_box(g.make_move(&mv));
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_is_in_check(c: &mut Criterion) {
    let board = setup_midgame();
    c.bench_function("is_in_check", |b| {
        b.iter(|| black_box(board.is_in_check(board.turn())))
    });
}

fn bench_outcome(c: &mut Criterion) {
    let board = setup_midgame();
    c.bench_function("outcome", |b| b.iter(|| black_box(board.outcome())));
}

fn bench_fen(c: &mut Criterion) {
    let board = setup_midgame();
    let fen = board.to_fen();
    c.bench_function("to_fen", |b| b.iter(|| black_box(board.to_fen())));
    c.bench_function("from_fen", |b| b.iter(|| black_box(Board::from_fen(&fen))));
}

fn bench_san(c: &mut Criterion) {
    let board = setup_midgame();
    let moves = board.legal_moves();
    let sans: Vec<String> = moves.iter().map(|mv| mv.to_san(&board)).collect();

    c.bench_function("move_to_san", |b| {
        b.iter(|| {
            for mv in &moves {
                black_box(board.move_to_san(mv));
            }
        })
    });
    c.bench_function("parse_san", |b| {
        b.iter(|| {
            for san in &sans {
                black_box(Move::parse_san(san, &board));
            }
        })
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut rng = StdRng::seed_from_u64(123);
            while !board.is_over() && board.history().len() < 300 {
                let moves = board.legal_moves();
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                board.make_move(mv);
            }
            black_box(board.outcome())
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10_000);
    targets =
        bench_legal_moves,
        bench_make_move,
        bench_is_in_check,
        bench_outcome,
        bench_fen,
        bench_san,
);
criterion_group!(
    name = playouts;
    config = Criterion::default().sample_size(100);
    targets =
        bench_random_playout,
);
criterion_main!(benches, playouts);
