//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display refresh, fixed per-item speeds
//! - Seeded RNG only (passed in by the caller)
//! - Stable iteration order (most recently spawned first)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Rect, clamp_position, collides};
pub use input::{InputEvent, Key, apply_input};
pub use spawn::{spawn, spawn_at};
pub use state::{
    Basket, BasketMetrics, DragState, FallingItem, GameEvent, GamePhase, GameState, ItemId,
    Viewport,
};
pub use tick::tick;
