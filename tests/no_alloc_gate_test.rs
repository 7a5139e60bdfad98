use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use classic_tetris::core::{GameEngine, GameSnapshot, HighScores};
use classic_tetris::types::{GameCommand, Screen, TICK_UNITS};

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

/// Walk from wherever the engine is back into a running game.
fn restart(engine: &mut GameEngine) {
    if engine.screen() == Screen::GameOver {
        engine.apply_command(GameCommand::Confirm);
    }
    engine.apply_command(GameCommand::Confirm);
    engine.apply_command(GameCommand::Confirm);
}

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut engine = GameEngine::with_high_scores(1, HighScores::from_scores(0..10));
    let mut snap = GameSnapshot::default();
    restart(&mut engine);

    // Warm-up.
    engine.on_tick(TICK_UNITS);
    engine.snapshot_into(&mut snap);

    let allocs = with_alloc_counting(|| {
        // Countdown, first spawn and gravity.
        for _ in 0..400 {
            let _ = engine.on_tick(TICK_UNITS);
        }

        for _ in 0..50 {
            let _ = engine.apply_command(GameCommand::MoveLeft);
            let _ = engine.apply_command(GameCommand::MoveRight);
            let _ = engine.apply_command(GameCommand::Rotate);
            let _ = engine.apply_command(GameCommand::SoftDrop);
        }

        // Hard drops drive landing, line clears, spawning and game over.
        for _ in 0..200 {
            let _ = engine.apply_command(GameCommand::HardDrop);
            let _ = engine.on_tick(TICK_UNITS);
            let _ = engine.take_events();
            if engine.screen() == Screen::GameOver {
                restart(&mut engine);
                for _ in 0..300 {
                    let _ = engine.on_tick(TICK_UNITS);
                }
            }
            engine.snapshot_into(&mut snap);
        }

        let _ = engine.apply_command(GameCommand::TogglePause);
        let _ = engine.apply_command(GameCommand::TogglePause);
    });

    assert!(allocs == 0);
}
