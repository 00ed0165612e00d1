use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent};

use car_counter::core::{GameConfig, MemoryStore, RoundController, SimpleRng};
use car_counter::term::{FrameBuffer, GameView, ScreenState, Viewport};
use car_counter::types::Phase;
use car_counter::App;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn active_round_frames_are_allocation_free_after_warmup() {
    let mut app = App::new(RoundController::new(
        GameConfig::default(),
        Box::new(MemoryStore::new()),
        SimpleRng::new(1),
        ScreenState::new(),
    ));
    app.handle_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(app.phase(), Phase::RoundActive);

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    view.render_into(&app.frame_input(), viewport, &mut fb);

    // 200 frames of 50ms stay inside the 14s round-one countdown.
    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            app.tick(50);
            if i % 20 == 0 {
                app.handle_key(KeyEvent::from(KeyCode::Char('1')));
            }
            view.render_into(&app.frame_input(), viewport, &mut fb);
        }
    });

    assert_eq!(app.phase(), Phase::RoundActive);
    assert_eq!(allocs, 0);
}
