//! Basket Catch entry point
//!
//! On the web this wires the game to the page. Natively it plays a headless
//! game on a virtual clock with the autopilot steering the basket.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    basket_catch::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use basket_catch::platform::{HeadlessRunner, HeadlessSurface};
    use basket_catch::sim::{BasketMetrics, Viewport};
    use basket_catch::{Game, Settings};

    env_logger::init();
    log::info!("Basket Catch (native) starting...");
    log::info!("Native mode is a headless demo - serve the wasm build for the real game");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_from(settings_path.as_deref());
    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let viewport = Viewport::new(400.0, 800.0);
    let game = Game::new(
        settings,
        viewport,
        BasketMetrics::bottom_aligned(viewport),
        seed,
        HeadlessSurface::default(),
    );
    let mut runner = HeadlessRunner::new(game).with_autopilot(true);

    // Two virtual minutes at 60 Hz
    let stopped = runner.run_until_stopped(60 * 120);
    let game = runner.game();
    println!(
        "{} after {:.1}s ({} frames), {}",
        if stopped { "Game over" } else { "Still going" },
        runner.now_ms() / 1000.0,
        runner.frames(),
        game.surface().score_text,
    );
}
