//! End-to-end game scenarios through the public API

use basket_catch::platform::{HeadlessRunner, HeadlessSurface};
use basket_catch::sim::{
    BasketMetrics, GameEvent, GamePhase, GameState, InputEvent, Key, Viewport, apply_input,
    clamp_position, spawn_at, tick,
};
use basket_catch::{Game, Settings};

fn viewport() -> Viewport {
    Viewport::new(400.0, 800.0)
}

fn state_with_basket_at(x: f32) -> GameState {
    let mut state = GameState::new(viewport(), BasketMetrics::bottom_aligned(viewport()));
    state.set_basket_x(x);
    state
}

/// Unit sample that places an item's left edge at `x` in a 400px viewport
fn x_unit(x: f32) -> f32 {
    x / (400.0 - 40.0)
}

#[test]
fn basket_catches_item_at_right_edge() {
    let settings = Settings::default();
    assert_eq!(clamp_position(350.0, 80.0, 400.0), 320.0);

    let mut state = state_with_basket_at(300.0);
    apply_input(&mut state, InputEvent::DragStart { x: 0.0 }, settings.key_step);
    apply_input(&mut state, InputEvent::DragMove { x: 50.0 }, settings.key_step);
    assert_eq!(state.basket.x, 320.0);

    let id = spawn_at(&mut state, &settings, x_unit(310.0), 0.5).unwrap();
    state.take_events();

    let mut ticks = 0;
    while state.score == 0 {
        assert!(tick(&mut state));
        ticks += 1;
        assert!(ticks < 1000);
    }
    assert_eq!(state.score, 1);
    assert!(state.items.is_empty());
    assert_eq!(state.take_events(), vec![GameEvent::Caught(id)]);
}

#[test]
fn item_far_from_basket_ends_game() {
    let settings = Settings::default();
    let mut state = state_with_basket_at(320.0);
    let id = spawn_at(&mut state, &settings, x_unit(10.0), 0.5).unwrap();
    state.take_events();

    while tick(&mut state) {}
    assert_eq!(state.phase, GamePhase::Stopped);
    assert_eq!(state.score, 0);
    assert!(state.items[0].y > 800.0);
    assert_eq!(state.take_events(), vec![GameEvent::Missed(id)]);
}

#[test]
fn catches_count_one_each() {
    let settings = Settings::default();
    let mut state = state_with_basket_at(160.0);
    // Same speed, staggered starts, all over the basket
    for _ in 0..3 {
        spawn_at(&mut state, &settings, x_unit(180.0), 0.0);
        for _ in 0..10 {
            tick(&mut state);
        }
    }

    let mut last_score = state.score;
    let mut last_len = state.items.len();
    while !state.items.is_empty() {
        assert!(tick(&mut state));
        if state.score != last_score {
            assert_eq!(state.score, last_score + 1);
            assert_eq!(state.items.len(), last_len - 1);
        }
        last_score = state.score;
        last_len = state.items.len();
    }
    assert_eq!(state.score, 3);
}

#[test]
fn keys_drive_basket_until_game_over() {
    let settings = Settings::default();
    let mut state = state_with_basket_at(0.0);
    apply_input(&mut state, InputEvent::KeyDown(Key::Right), settings.key_step);
    assert_eq!(state.basket.x, 20.0);

    spawn_at(&mut state, &settings, 1.0 - f32::EPSILON, 1.0 - f32::EPSILON);
    while tick(&mut state) {}
    apply_input(&mut state, InputEvent::KeyDown(Key::Right), settings.key_step);
    assert_eq!(state.basket.x, 20.0);
}

#[test]
fn restart_always_yields_fresh_game() {
    let settings = Settings {
        seed: Some(77),
        ..Default::default()
    };

    for steps in [0u64, 1, 50, 500, 5000] {
        let game = Game::new(
            settings.clone(),
            viewport(),
            BasketMetrics::bottom_aligned(viewport()),
            77,
            HeadlessSurface::default(),
        );
        let mut runner = HeadlessRunner::new(game).with_autopilot(steps % 2 == 0);
        for _ in 0..steps {
            runner.step();
        }

        runner.restart();
        let game = runner.game();
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().phase, GamePhase::Running);
        assert!(game.state().items.is_empty());
        assert!(game.surface().tokens.is_empty());
        assert!(!game.surface().game_over_visible);
        assert!(runner.frame_pending());
    }
}
