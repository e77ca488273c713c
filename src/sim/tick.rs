//! Per-frame simulation step
//!
//! Advances the falling items by one display refresh and resolves catches and
//! misses.

use super::geometry::collides;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one tick.
///
/// Items are processed newest first so removing a caught item never skips
/// its neighbour. The first miss stops the game and ends the tick on the
/// spot; items not yet visited keep their old position.
///
/// Returns `true` if the frame loop should schedule another tick.
pub fn tick(state: &mut GameState) -> bool {
    if !state.is_running() {
        return false;
    }

    let basket = state.basket.rect();
    for i in (0..state.items.len()).rev() {
        let (id, rect, y) = {
            let item = &mut state.items[i];
            item.y += item.speed;
            (item.id, item.rect(), item.y)
        };

        if collides(&basket, &rect) {
            state.items.remove(i);
            state.score += 1;
            state.events.push(GameEvent::Caught(id));
            log::debug!("Caught {} (score {})", id, state.score);
        } else if y > state.viewport.height {
            state.phase = GamePhase::Stopped;
            state.events.push(GameEvent::Missed(id));
            log::info!("Missed {} - game over with score {}", id, state.score);
            return false;
        }
    }

    true
}
