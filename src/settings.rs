//! Game tuning
//!
//! Persisted in LocalStorage on the web so a page can ship its own balance.
//! Every field has a default, so partial JSON is fine.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spawn timer period (ms)
    pub spawn_interval_ms: u32,
    /// Basket movement per arrow key press (px)
    pub key_step: f32,

    // === Items ===
    /// Side of the square item token (px)
    pub item_size: f32,
    /// Initial top edge of a new item; negative means above the screen
    pub item_start_y: f32,
    /// Slowest fall speed (px per tick)
    pub min_speed: f32,
    /// Fall speed upper bound (exclusive)
    pub max_speed: f32,

    /// Fixed RNG seed, `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            key_step: KEY_STEP,
            item_size: ITEM_SIZE,
            item_start_y: ITEM_START_Y,
            min_speed: ITEM_MIN_SPEED,
            max_speed: ITEM_MAX_SPEED,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::normalized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Repair values that would break the game loop
    pub fn normalized(mut self) -> Self {
        if self.spawn_interval_ms == 0 {
            self.spawn_interval_ms = SPAWN_INTERVAL_MS;
        }
        if !(self.key_step.is_finite() && self.key_step > 0.0) {
            self.key_step = KEY_STEP;
        }
        if !(self.item_size.is_finite() && self.item_size > 0.0) {
            self.item_size = ITEM_SIZE;
        }
        if !self.item_start_y.is_finite() {
            self.item_start_y = -self.item_size;
        }
        if !(self.min_speed.is_finite() && self.max_speed.is_finite()) {
            self.min_speed = ITEM_MIN_SPEED;
            self.max_speed = ITEM_MAX_SPEED;
        }
        if self.min_speed > self.max_speed {
            std::mem::swap(&mut self.min_speed, &mut self.max_speed);
        }
        // Items that don't fall never get caught or missed
        if self.min_speed <= 0.0 {
            self.min_speed = ITEM_MIN_SPEED;
            self.max_speed = ITEM_MAX_SPEED;
        }
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "basket_catch_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from an optional JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
