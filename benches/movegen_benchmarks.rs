//! Benchmarks for move generation and application.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cheesy::board::{Board, BoardBuilder, Color, Move, MoveList, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn middlegame() -> Board {
    BoardBuilder::starting_position()
        .clear(sq("e2"))
        .clear(sq("d7"))
        .piece(sq("e4"), Color::White, Piece::Pawn)
        .piece(sq("d5"), Color::Black, Piece::Pawn)
        .clear(sq("g1"))
        .piece(sq("f3"), Color::White, Piece::Knight)
        .clear(sq("f1"))
        .piece(sq("c4"), Color::White, Piece::Bishop)
        .build()
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves()))
    });

    let middle = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middle.generate_moves()))
    });

    let lone_queen = BoardBuilder::new()
        .piece(sq("d4"), Color::White, Piece::Queen)
        .build();
    group.bench_function("queen_rays", |b| {
        b.iter(|| {
            let mut moves = MoveList::new();
            lone_queen.generate_piece_moves(sq("d4"), Piece::Queen, Color::White, &mut moves);
            black_box(moves)
        })
    });

    group.finish();
}

fn bench_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("play");

    let line = [
        Move::normal(sq("e2"), sq("e4")),
        Move::normal(sq("e7"), sq("e5")),
        Move::normal(sq("g1"), sq("f3")),
        Move::normal(sq("b8"), sq("c6")),
    ];
    group.bench_function("opening_line", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let _ = board.play_moves(black_box(line));
            black_box(board)
        })
    });

    group.bench_function("to_fen", |b| {
        let board = middlegame();
        b.iter(|| black_box(board.to_fen()))
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_play);
criterion_main!(benches);
