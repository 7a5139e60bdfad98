use criterion::{black_box, criterion_group, criterion_main, Criterion};
use classic_tetris::core::{Board, GameEngine};
use classic_tetris::term::{FrameBuffer, GameView, Viewport};
use classic_tetris::types::{Direction, GameCommand, PieceColor, TICK_UNITS};

fn running_engine() -> GameEngine {
    let mut engine = GameEngine::new(12345);
    engine.apply_command(GameCommand::Confirm);
    engine.apply_command(GameCommand::Confirm);
    let interval = engine.gravity_interval();
    for _ in 0..4 {
        engine.on_tick(interval);
    }
    engine
}

fn bench_tick(c: &mut Criterion) {
    let mut engine = running_engine();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            engine.on_tick(black_box(TICK_UNITS));
            if engine.active().is_none() {
                engine = running_engine();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 0..4 {
                for x in 0..10 {
                    board.set_cell(x, y, Some(PieceColor::Cyan));
                }
            }
            board.set_cell(3, 4, Some(PieceColor::Red));
            black_box(board.clear_completed_lines());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut engine = running_engine();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            engine.board_mut().clear();
            black_box(engine.spawn_next());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut engine = running_engine();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            engine.try_move(black_box(Direction::Right));
            engine.try_move(black_box(Direction::Left));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = running_engine();

    c.bench_function("rotate_clockwise", |b| {
        b.iter(|| {
            engine.rotate_clockwise();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = running_engine();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = engine.snapshot();

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
