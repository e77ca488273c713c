//! Headless host: an in-memory surface and a virtual-clock scheduler
//!
//! Used by the native binary and by tests. The runner interleaves the display
//! refresh and the spawn timer the same way a browser would, without real time
//! passing.

use std::collections::BTreeMap;

use super::{Surface, score_text};
use crate::Game;
use crate::consts::FRAME_MS;
use crate::sim::{InputEvent, ItemId, Key};

/// Surface that records what a real display would show
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    pub basket_x: f32,
    /// Live item tokens and their (x, y) offsets
    pub tokens: BTreeMap<ItemId, (f32, f32)>,
    pub score_text: String,
    pub game_over_visible: bool,
}

impl HeadlessSurface {
    pub fn token(&self, id: ItemId) -> Option<(f32, f32)> {
        self.tokens.get(&id).copied()
    }
}

impl Surface for HeadlessSurface {
    fn place_basket(&mut self, x: f32) {
        self.basket_x = x;
    }

    fn attach_item(&mut self, id: ItemId, x: f32, y: f32) {
        self.tokens.insert(id, (x, y));
    }

    fn move_item(&mut self, id: ItemId, x: f32, y: f32) {
        if let Some(pos) = self.tokens.get_mut(&id) {
            *pos = (x, y);
        }
    }

    fn detach_item(&mut self, id: ItemId) {
        self.tokens.remove(&id);
    }

    fn set_score(&mut self, score: u32) {
        self.score_text = score_text(score);
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        self.game_over_visible = visible;
    }
}

/// Drives a [`Game`] from a virtual millisecond clock
pub struct HeadlessRunner {
    game: Game<HeadlessSurface>,
    /// Refresh periods elapsed on the virtual clock
    steps: u64,
    next_spawn_ms: f64,
    /// A frame has been requested and not yet delivered
    frame_pending: bool,
    autopilot: bool,
    frames: u64,
}

impl HeadlessRunner {
    pub fn new(game: Game<HeadlessSurface>) -> Self {
        let next_spawn_ms = f64::from(game.settings().spawn_interval_ms);
        Self {
            game,
            steps: 0,
            next_spawn_ms,
            frame_pending: true,
            autopilot: false,
            frames: 0,
        }
    }

    /// Steer the basket toward the lowest item with arrow keys
    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    pub fn game(&self) -> &Game<HeadlessSurface> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<HeadlessSurface> {
        &mut self.game
    }

    pub fn now_ms(&self) -> f64 {
        self.steps as f64 * FRAME_MS
    }

    /// Frames delivered to the game so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Advance the clock by one display refresh.
    ///
    /// Spawn timer ticks that fall due fire first, then input, then the frame
    /// (if one was requested).
    pub fn step(&mut self) {
        self.steps += 1;
        let now_ms = self.now_ms();

        let interval = f64::from(self.game.settings().spawn_interval_ms);
        while self.next_spawn_ms <= now_ms {
            self.game.on_spawn_timer();
            self.next_spawn_ms += interval;
        }

        if self.autopilot {
            self.steer();
        }

        if self.frame_pending {
            self.frame_pending = self.game.on_frame();
            self.frames += 1;
        }
    }

    /// Restart button pressed. From the stopped state the game runs its
    /// first frame right away.
    pub fn restart(&mut self) {
        if self.game.restart() {
            self.frames += 1;
            self.frame_pending = true;
        }
    }

    /// Step until the game stops or `max_steps` elapse. Returns `true` if the
    /// game stopped.
    pub fn run_until_stopped(&mut self, max_steps: u64) -> bool {
        for _ in 0..max_steps {
            self.step();
            if !self.game.is_running() {
                return true;
            }
        }
        false
    }

    fn steer(&mut self) {
        let state = self.game.state();
        let Some(target) = state.items.iter().max_by(|a, b| a.y.total_cmp(&b.y)) else {
            return;
        };

        let basket_centre = state.basket.x + state.basket.width / 2.0;
        let target_centre = target.x + target.size / 2.0;
        let dead_zone = self.game.settings().key_step / 2.0;
        let diff = target_centre - basket_centre;

        if diff > dead_zone {
            self.game.handle_input(InputEvent::KeyDown(Key::Right));
        } else if diff < -dead_zone {
            self.game.handle_input(InputEvent::KeyDown(Key::Left));
        }
    }
}
