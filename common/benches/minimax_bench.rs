use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{
    Board, BotInput, GameMode, GameOutcome, Mark, TicTacToeGameState, calculate_minimax_move,
    compute_computer_move,
};

fn bench_reply_to_corner_opening() {
    let board: Board = "X../.../...".parse().unwrap();
    let _ = compute_computer_move(black_box(&board), Mark::O);
}

fn bench_reply_to_center_opening() {
    let board: Board = ".../.X./...".parse().unwrap();
    let _ = compute_computer_move(black_box(&board), Mark::O);
}

fn bench_first_move_as_x() {
    let input = BotInput {
        board: Board::new(),
        current_mark: Mark::X,
    };
    let _ = calculate_minimax_move(black_box(&input));
}

fn bench_self_play_round() {
    let mut state = TicTacToeGameState::new_round(GameMode::HumanVsHuman);
    while state.outcome() == GameOutcome::Ongoing {
        if state.apply_computer_move().is_err() {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("reply_to_corner_opening", |b| {
        b.iter(bench_reply_to_corner_opening)
    });

    group.bench_function("reply_to_center_opening", |b| {
        b.iter(bench_reply_to_center_opening)
    });

    group.sample_size(10);

    group.bench_function("first_move_as_x", |b| b.iter(bench_first_move_as_x));

    group.bench_function("self_play_round", |b| b.iter(bench_self_play_round));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
