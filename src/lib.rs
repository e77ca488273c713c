//! Basket Catch - catch the falling items, miss one and it's over
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clamp, collisions, spawning, ticks)
//! - `game`: Controller that owns the run state and drives a display surface
//! - `platform`: Browser DOM and headless surfaces
//! - `settings`: Data-driven game tuning

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Period of the spawn timer (ms)
    pub const SPAWN_INTERVAL_MS: u32 = 800;
    /// Basket movement per arrow key press (px)
    pub const KEY_STEP: f32 = 20.0;

    /// Falling items are square
    pub const ITEM_SIZE: f32 = 40.0;
    /// Items start above the top edge and fall into view
    pub const ITEM_START_Y: f32 = -40.0;
    /// Fall speed range (px per tick), max exclusive
    pub const ITEM_MIN_SPEED: f32 = 2.0;
    pub const ITEM_MAX_SPEED: f32 = 5.0;

    /// Basket geometry used when the host can't measure it
    pub const BASKET_WIDTH: f32 = 80.0;
    pub const BASKET_HEIGHT: f32 = 20.0;
    /// Gap between the basket's bottom edge and the viewport bottom
    pub const BASKET_BOTTOM_MARGIN: f32 = 10.0;

    /// Display refresh period assumed by the headless runner (ms)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
