use criterion::{black_box, criterion_group, criterion_main, Criterion};
use car_counter::core::{
    params_for_round, CountdownId, CountdownObserver, GameConfig, MemoryStore, RoundController,
    RoundTimer, SimpleRng,
};
use car_counter::term::{FrameBuffer, GameView, ScreenState, Viewport};

fn bench_params(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("params_for_round_1_to_100", |b| {
        b.iter(|| {
            for round in 1..=100 {
                black_box(params_for_round(black_box(round), &config));
            }
        })
    });
}

fn bench_round_cycle(c: &mut Criterion) {
    let mut game = RoundController::new(
        GameConfig::default(),
        Box::new(MemoryStore::new()),
        SimpleRng::new(12345),
        ScreenState::new(),
    );
    game.start_game();

    c.bench_function("submit_and_advance", |b| {
        b.iter(|| {
            game.submit_answer(black_box("7"));
            game.advance_round();
        })
    });
}

struct Sink;

impl CountdownObserver for Sink {
    fn on_tick(&mut self, _id: CountdownId, remaining: u32) {
        black_box(remaining);
    }

    fn on_expired(&mut self, id: CountdownId) {
        black_box(id);
    }
}

fn bench_timer(c: &mut Criterion) {
    let mut timer = RoundTimer::new();

    c.bench_function("countdown_frame_50ms", |b| {
        b.iter(|| {
            if !timer.is_running() {
                timer.start(14);
            }
            timer.advance(black_box(50), &mut Sink);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = RoundController::new(
        GameConfig::default(),
        Box::new(MemoryStore::new()),
        SimpleRng::new(7),
        ScreenState::new(),
    );
    game.start_game();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_round_80x24", |b| {
        b.iter(|| {
            let input = car_counter::term::FrameInput {
                phase: game.phase(),
                screen: game.presenter(),
                answer: "12",
            };
            view.render_into(&input, Viewport::new(80, 24), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_params,
    bench_round_cycle,
    bench_timer,
    bench_render
);
criterion_main!(benches);
