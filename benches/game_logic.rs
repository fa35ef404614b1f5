use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Session, SimpleRng, Snapshot};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, Command};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(SimpleRng::new(12345));
    let mut now = 0.0;

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            now += 16.0;
            if session.is_game_over() {
                session.apply(Command::Reset);
                now = 0.0;
            }
            black_box(session.tick(black_box(now)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                board.fill_row_except(y, Color::Cyan, &[]);
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = Session::new(SimpleRng::new(12345));
    let mut right = true;

    c.bench_function("apply_move", |b| {
        b.iter(|| {
            let command = if right { Command::MoveRight } else { Command::MoveLeft };
            if !session.apply(command) {
                right = !right;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(SimpleRng::new(12345));

    c.bench_function("apply_rotate", |b| {
        b.iter(|| black_box(session.apply(Command::Rotate)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_and_lock", |b| {
        let mut session = Session::new(SimpleRng::new(12345));
        let mut now = 0.0;
        b.iter(|| {
            session.apply(Command::HardDrop);
            now += 1001.0;
            if session.tick(now) == blockfall::core::TickOutcome::GameOver {
                session.apply(Command::Reset);
                now = 0.0;
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = Session::new(SimpleRng::new(12345));
    let view = GameView::default();
    let mut snap = Snapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("snapshot_and_render_80x24", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(fb.width())
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
