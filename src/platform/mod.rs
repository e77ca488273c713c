//! Platform abstraction layer
//!
//! The game controller only talks to a [`Surface`]; hosts provide one:
//! - `web`: DOM elements positioned with CSS (wasm32 only)
//! - `headless`: in-memory surface plus a virtual-clock runner

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{HeadlessRunner, HeadlessSurface};

use crate::sim::ItemId;

/// Display collaborator: places, moves and removes visual tokens and shows
/// the score and game-over panel.
pub trait Surface {
    /// Apply the basket's horizontal offset
    fn place_basket(&mut self, x: f32);

    /// Create the token for a newly spawned item
    fn attach_item(&mut self, id: ItemId, x: f32, y: f32);

    fn move_item(&mut self, id: ItemId, x: f32, y: f32);

    /// Remove an item's token. Unknown IDs are ignored.
    fn detach_item(&mut self, id: ItemId);

    fn set_score(&mut self, score: u32);

    fn set_game_over_visible(&mut self, visible: bool);
}

/// Scoreboard text
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}
