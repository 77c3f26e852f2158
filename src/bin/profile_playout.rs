//! Random self-play for profiling. Build with `--features rand,hotpath` to get
//! per-function timings on exit.

use chess_rules::Board;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

const GAMES: usize = 200;
const MAX_PLIES: usize = 400;

#[hotpath::main]
fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut finished = 0;
    let mut plies = 0;

    for _ in 0..GAMES {
        let mut board = Board::new();
        while !board.is_over() && board.history().len() < MAX_PLIES {
            let moves = board.legal_moves();
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };
            let san = board.move_to_san(mv);
            if !board.make_move(mv) || san.is_none() {
                eprintln!("rejected generated move {} at {}", mv, board.to_fen());
                return;
            }
        }

        plies += board.history().len();
        if board.outcome().is_some() {
            finished += 1;
        }
    }

    println!(
        "{} games, {} decided by mate or stalemate, {} plies",
        GAMES, finished, plies
    );
}
