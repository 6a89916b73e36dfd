use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_dice::core::{calculate_score, GameSnapshot, GameState};
use tui_dice::engine::App;
use tui_dice::term::{FrameBuffer, GameView, Viewport};
use tui_dice::types::{Theme, TICK_MS};

fn bench_roll_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("roll_tick_16ms", |b| {
        b.iter(|| {
            if !state.rolling() {
                state.roll_dice();
            }
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_full_roll(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("full_roll", |b| {
        b.iter(|| {
            state.roll_dice();
            while state.rolling() {
                state.tick(TICK_MS);
            }
        })
    });
}

fn bench_new_game(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("start_new_game", |b| {
        b.iter(|| {
            state.start_new_game();
        })
    });
}

fn bench_drop_reorder(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("drop_reorder", |b| {
        b.iter(|| {
            let first = state.dice()[0].id;
            let last = state.dice()[4].id;
            state.drag_start(first);
            state.drag_enter(last);
            state.drop_on(black_box(last));
        })
    });
}

fn bench_score(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("calculate_score", |b| {
        b.iter(|| calculate_score(black_box(state.dice())))
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let app = App::with_game(GameState::new(12345), Theme::Ocean);
    let view = GameView::default();
    let vp = Viewport::new(100, 32);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            let frame = app.view();
            black_box(view.render_into(&frame, vp, &mut fb));
        })
    });
}

criterion_group!(
    benches,
    bench_roll_tick,
    bench_full_roll,
    bench_new_game,
    bench_drop_reorder,
    bench_score,
    bench_snapshot_into,
    bench_render_frame
);
criterion_main!(benches);
