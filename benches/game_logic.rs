use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{ActivePiece, GameSession, Grid};
use blockfall::types::{CellPos, Command, PieceKind};

fn bench_soft_drop(c: &mut Criterion) {
    let mut session = GameSession::new(12345);

    c.bench_function("soft_drop", |b| {
        b.iter(|| {
            if session.is_game_over() {
                session.new_game();
            }
            black_box(session.soft_drop());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                grid.fill_row(y);
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_validity(c: &mut Criterion) {
    let grid = Grid::from_ascii(&["#.#.#.#.#."; 10]);
    let piece = ActivePiece::at(PieceKind::T, 2, CellPos::new(3, 8));

    c.bench_function("is_valid", |b| {
        b.iter(|| black_box(piece.is_valid(black_box(&grid))))
    });
}

fn bench_apply_commands(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::MoveRight,
        Command::SoftDrop,
    ];

    c.bench_function("apply_commands", |b| {
        b.iter(|| {
            for cmd in script {
                session.apply(black_box(cmd));
            }
            if session.is_game_over() {
                session.new_game();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_soft_drop,
    bench_line_clear,
    bench_validity,
    bench_apply_commands
);
criterion_main!(benches);
