//! Game controller
//!
//! Owns the simulation state, the spawn RNG and the display surface. Hosts
//! forward their three event sources here:
//! - display refresh → [`Game::on_frame`]
//! - spawn timer → [`Game::on_spawn_timer`]
//! - user input → [`Game::handle_input`] and [`Game::restart`]
//!
//! Everything runs on one thread; each call finishes before the next starts.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::Surface;
use crate::settings::Settings;
use crate::sim::{
    BasketMetrics, GameEvent, GameState, InputEvent, Viewport, apply_input, spawn, tick,
};

/// A running game bound to a display surface
pub struct Game<S: Surface> {
    state: GameState,
    settings: Settings,
    rng: Pcg32,
    surface: S,
}

impl<S: Surface> Game<S> {
    /// Start a game in the running state with the basket centred
    pub fn new(
        settings: Settings,
        viewport: Viewport,
        metrics: BasketMetrics,
        seed: u64,
        surface: S,
    ) -> Self {
        let mut game = Self {
            state: GameState::new(viewport, metrics),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            surface,
        };
        game.surface.place_basket(game.state.basket.x);
        game.surface.set_score(0);
        game.surface.set_game_over_visible(false);
        log::info!("Game started with seed {}", seed);
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Apply a drag, key or resize event and move the basket token
    pub fn handle_input(&mut self, event: InputEvent) {
        apply_input(&mut self.state, event, self.settings.key_step);
        self.surface.place_basket(self.state.basket.x);
    }

    /// Spawn timer callback; a no-op while stopped
    pub fn on_spawn_timer(&mut self) {
        spawn(&mut self.state, &self.settings, &mut self.rng);
        self.flush_events();
    }

    /// Display refresh callback. Returns `true` if the host should request
    /// another frame.
    pub fn on_frame(&mut self) -> bool {
        let was_running = self.state.is_running();
        let reschedule = tick(&mut self.state);
        if was_running {
            for item in &self.state.items {
                self.surface.move_item(item.id, item.x, item.y);
            }
        }
        self.flush_events();
        reschedule
    }

    /// Reset to a fresh running game.
    ///
    /// From the stopped state this runs the first tick right away and returns
    /// whether the host must request the next frame. While already running
    /// the pending frame loop carries on, so no new frame is requested.
    pub fn restart(&mut self) -> bool {
        let was_running = self.state.is_running();

        let removed = self.state.reset();
        self.surface.set_score(0);
        self.surface.set_game_over_visible(false);
        for id in removed {
            self.surface.detach_item(id);
        }
        log::info!("Game restarted");

        if was_running {
            return false;
        }
        self.on_frame()
    }

    /// Mirror queued simulation events onto the surface
    fn flush_events(&mut self) {
        let mut score_changed = false;
        for event in self.state.take_events() {
            match event {
                GameEvent::Spawned(id) => {
                    if let Some(item) = self.state.items.iter().find(|item| item.id == id) {
                        self.surface.attach_item(id, item.x, item.y);
                    }
                }
                GameEvent::Caught(id) => {
                    self.surface.detach_item(id);
                    score_changed = true;
                }
                GameEvent::Missed(_) => self.surface.set_game_over_visible(true),
            }
        }
        if score_changed {
            self.surface.set_score(self.state.score);
        }
    }
}
