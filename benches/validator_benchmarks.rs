//! Benchmarks for move validation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_validator::{Board, BoardBuilder, Color, Game, Piece, Square};

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");

    // Lone queen sweeping an otherwise empty board
    let open_board = BoardBuilder::new()
        .piece(Square(0, 3), Color::White, Piece::Queen)
        .build()
        .unwrap();
    group.bench_function("queen_open_board", |b| {
        b.iter(|| {
            let mut legal = 0u32;
            for rank in 0..8 {
                for file in 0..8 {
                    if open_board.is_legal_move(
                        Piece::Queen,
                        Color::White,
                        black_box(Square(0, 3)),
                        black_box(Square(rank, file)),
                    ) {
                        legal += 1;
                    }
                }
            }
            legal
        })
    });

    // Cluttered starting position, every slider ray blocked early
    let start = Board::new();
    group.bench_function("queen_startpos", |b| {
        b.iter(|| {
            let mut legal = 0u32;
            for rank in 0..8 {
                for file in 0..8 {
                    if start.is_legal_move(
                        Piece::Queen,
                        Color::White,
                        black_box(Square(0, 3)),
                        black_box(Square(rank, file)),
                    ) {
                        legal += 1;
                    }
                }
            }
            legal
        })
    });

    group.finish();
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("attempt_move");

    let exchange = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "e3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "e6"),
    ];
    group.bench_function("opening_sequence", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for (start, end) in exchange {
                game.attempt_move(black_box(start), black_box(end)).unwrap();
            }
            game
        })
    });

    group.bench_function("rejected_move", |b| {
        let mut game = Game::new();
        b.iter(|| game.attempt_move(black_box("a2"), black_box("a5")).is_err())
    });

    group.finish();
}

criterion_group!(benches, bench_legality, bench_attempt_move);
criterion_main!(benches);
