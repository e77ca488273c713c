//! Input adapter: drag, arrow keys and resizes applied to the basket

use super::state::{BasketMetrics, DragState, GameState, Viewport};

/// Recognised discrete keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Input delivered by the host, one event at a time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on the basket at horizontal coordinate `x`
    DragStart { x: f32 },
    /// Pointer moved while pressed
    DragMove { x: f32 },
    DragEnd,
    KeyDown(Key),
    /// Viewport size changed; basket geometry re-measured
    Resize {
        viewport: Viewport,
        metrics: BasketMetrics,
    },
}

/// Apply one input event to the basket.
///
/// Drags follow the pointer 1:1 with no inertia. Keys move by `key_step` and
/// are ignored once the game has stopped.
pub fn apply_input(state: &mut GameState, event: InputEvent, key_step: f32) {
    match event {
        InputEvent::DragStart { x } => {
            state.drag = Some(DragState {
                pointer_start_x: x,
                basket_start_x: state.basket.x,
            });
        }
        InputEvent::DragMove { x } => {
            if let Some(drag) = state.drag {
                state.set_basket_x(drag.basket_start_x + (x - drag.pointer_start_x));
            }
        }
        InputEvent::DragEnd => state.drag = None,
        InputEvent::KeyDown(key) => {
            if !state.is_running() {
                return;
            }
            let delta = match key {
                Key::Left => -key_step,
                Key::Right => key_step,
            };
            state.set_basket_x(state.basket.x + delta);
        }
        InputEvent::Resize { viewport, metrics } => {
            state.viewport = viewport;
            state.basket.width = metrics.width;
            state.basket.height = metrics.height;
            state.basket.top = metrics.top;
            state.set_basket_x(state.basket.x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::KEY_STEP;
    use crate::sim::state::GamePhase;

    fn state_at(x: f32) -> GameState {
        let viewport = Viewport::new(400.0, 800.0);
        let mut state = GameState::new(viewport, BasketMetrics::bottom_aligned(viewport));
        state.set_basket_x(x);
        state
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_key_name("a"), None);
        assert_eq!(Key::from_key_name("ArrowUp"), None);
    }

    #[test]
    fn test_key_steps_and_clamps() {
        let mut state = state_at(300.0);
        apply_input(&mut state, InputEvent::KeyDown(Key::Right), KEY_STEP);
        assert_eq!(state.basket.x, 320.0);
        apply_input(&mut state, InputEvent::KeyDown(Key::Right), KEY_STEP);
        assert_eq!(state.basket.x, 320.0);
        apply_input(&mut state, InputEvent::KeyDown(Key::Left), KEY_STEP);
        assert_eq!(state.basket.x, 300.0);
    }

    #[test]
    fn test_keys_ignored_when_stopped() {
        let mut state = state_at(100.0);
        state.phase = GamePhase::Stopped;
        apply_input(&mut state, InputEvent::KeyDown(Key::Left), KEY_STEP);
        assert_eq!(state.basket.x, 100.0);
    }

    #[test]
    fn test_drag_follows_pointer_delta() {
        let mut state = state_at(100.0);
        apply_input(&mut state, InputEvent::DragStart { x: 50.0 }, KEY_STEP);
        apply_input(&mut state, InputEvent::DragMove { x: 80.0 }, KEY_STEP);
        assert_eq!(state.basket.x, 130.0);
        // Delta is always measured from the drag start, not the last move
        apply_input(&mut state, InputEvent::DragMove { x: 40.0 }, KEY_STEP);
        assert_eq!(state.basket.x, 90.0);
        apply_input(&mut state, InputEvent::DragMove { x: -500.0 }, KEY_STEP);
        assert_eq!(state.basket.x, 0.0);
    }

    #[test]
    fn test_drag_move_without_start_is_ignored() {
        let mut state = state_at(100.0);
        apply_input(&mut state, InputEvent::DragMove { x: 300.0 }, KEY_STEP);
        assert_eq!(state.basket.x, 100.0);

        apply_input(&mut state, InputEvent::DragStart { x: 0.0 }, KEY_STEP);
        apply_input(&mut state, InputEvent::DragEnd, KEY_STEP);
        apply_input(&mut state, InputEvent::DragMove { x: 50.0 }, KEY_STEP);
        assert_eq!(state.basket.x, 100.0);
    }

    #[test]
    fn test_drag_works_when_stopped() {
        let mut state = state_at(100.0);
        state.phase = GamePhase::Stopped;
        apply_input(&mut state, InputEvent::DragStart { x: 0.0 }, KEY_STEP);
        apply_input(&mut state, InputEvent::DragMove { x: 25.0 }, KEY_STEP);
        assert_eq!(state.basket.x, 125.0);
    }

    #[test]
    fn test_resize_reclamps_basket() {
        let mut state = state_at(320.0);
        let viewport = Viewport::new(300.0, 600.0);
        let metrics = BasketMetrics {
            width: 60.0,
            height: 15.0,
            top: 575.0,
        };
        apply_input(&mut state, InputEvent::Resize { viewport, metrics }, KEY_STEP);
        assert_eq!(state.viewport, viewport);
        assert_eq!(state.basket.x, 240.0);
        assert_eq!(state.basket.width, 60.0);
        assert_eq!(state.basket.top, 575.0);
    }
}
