use common::games::tictactoe::{
    Board, COMPUTER_MARK, PLAYER_MARK, Search, SearchSettings, calculate_move,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MID_GAME: &str = "X.. .O. ..X";

fn search_root(board: Board, pruning: bool) -> i32 {
    let mut board = board;
    Search::new(&mut board, SearchSettings { pruning }).best_move().score
}

fn bench_full_game() {
    let settings = SearchSettings::default();
    let mut board = Board::new();
    while let Some(bot_move) = calculate_move(&board, &settings) {
        let pos = bot_move.position;
        board.apply_move(pos.row, pos.col, COMPUTER_MARK);
        if board.terminal_status().is_over() {
            break;
        }
        let Some(reply) = board.available_moves().into_iter().next() else {
            break;
        };
        board.apply_move(reply.row, reply.col, PLAYER_MARK);
    }
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let mid_game: Board = MID_GAME.parse().expect("valid board");

    group.bench_function("empty_pruned", |b| {
        b.iter(|| search_root(black_box(Board::new()), true))
    });

    group.bench_function("empty_unpruned", |b| {
        b.iter(|| search_root(black_box(Board::new()), false))
    });

    group.bench_function("mid_game_pruned", |b| {
        b.iter(|| search_root(black_box(mid_game), true))
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
