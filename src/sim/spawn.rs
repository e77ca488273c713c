//! Item spawner, called from the fixed-period spawn timer

use rand::Rng;

use super::state::{FallingItem, GameEvent, GameState, ItemId};
use crate::settings::Settings;

/// Spawn one item using two draws from `rng`.
///
/// Does nothing while the game is stopped; the timer keeps firing regardless.
pub fn spawn<R: Rng>(
    state: &mut GameState,
    settings: &Settings,
    rng: &mut R,
) -> Option<ItemId> {
    if !state.is_running() {
        return None;
    }
    let x_unit = rng.random::<f32>();
    let speed_unit = rng.random::<f32>();
    spawn_at(state, settings, x_unit, speed_unit)
}

/// Spawn one item from two unit samples in `[0, 1)`.
///
/// `x_unit` picks the left edge across `[0, viewport.width - item_size)`,
/// `speed_unit` picks the speed across `[min_speed, max_speed)`.
pub fn spawn_at(
    state: &mut GameState,
    settings: &Settings,
    x_unit: f32,
    speed_unit: f32,
) -> Option<ItemId> {
    if !state.is_running() {
        return None;
    }

    let span = (state.viewport.width - settings.item_size).max(0.0);
    let x = x_unit * span;
    let speed = settings.min_speed + speed_unit * (settings.max_speed - settings.min_speed);

    let id = state.next_item_id();
    state.items.push(FallingItem {
        id,
        x,
        y: settings.item_start_y,
        speed,
        size: settings.item_size,
    });
    state.events.push(GameEvent::Spawned(id));
    log::debug!("Spawned {} at x={:.1} speed={:.2}", id, x, speed);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BasketMetrics, GamePhase, Viewport};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_state() -> GameState {
        let viewport = Viewport::new(400.0, 800.0);
        GameState::new(viewport, BasketMetrics::bottom_aligned(viewport))
    }

    #[test]
    fn test_spawn_at_maps_unit_samples() {
        let mut state = new_state();
        let settings = Settings::default();

        let id = spawn_at(&mut state, &settings, 0.5, 0.5).unwrap();
        let item = &state.items[0];
        assert_eq!(item.id, id);
        assert_eq!(item.x, 180.0); // 0.5 * (400 - 40)
        assert_eq!(item.y, -40.0);
        assert_eq!(item.speed, 3.5);
        assert_eq!(state.events, vec![GameEvent::Spawned(id)]);
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut state = new_state();
        let settings = Settings::default();
        let a = spawn_at(&mut state, &settings, 0.1, 0.0).unwrap();
        let b = spawn_at(&mut state, &settings, 0.9, 0.0).unwrap();
        let ids: Vec<_> = state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_spawn_skipped_when_stopped() {
        let mut state = new_state();
        state.phase = GamePhase::Stopped;
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(spawn(&mut state, &Settings::default(), &mut rng), None);
        assert!(state.items.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_spawn_narrow_viewport_pins_left() {
        let viewport = Viewport::new(30.0, 800.0);
        let mut state = GameState::new(viewport, BasketMetrics::bottom_aligned(viewport));
        spawn_at(&mut state, &Settings::default(), 0.99, 0.0);
        assert_eq!(state.items[0].x, 0.0);
    }

    #[test]
    fn test_seeded_spawns_stay_in_range() {
        let mut state = new_state();
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(12345);
        for _ in 0..200 {
            spawn(&mut state, &settings, &mut rng);
        }
        assert_eq!(state.items.len(), 200);
        for item in &state.items {
            assert!(item.x >= 0.0 && item.x <= 360.0);
            assert!(item.speed >= 2.0 && item.speed <= 5.0);
        }
    }

    #[test]
    fn test_same_seed_same_items() {
        let settings = Settings::default();
        let mut a = new_state();
        let mut b = new_state();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        for _ in 0..10 {
            spawn(&mut a, &settings, &mut rng_a);
            spawn(&mut b, &settings, &mut rng_b);
        }
        assert_eq!(a.items, b.items);
    }
}
