//! Game state and core simulation types

use std::fmt;

use super::geometry::{Rect, clamp_position};
use crate::consts::*;

/// Run state of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Items fall, the frame loop reschedules itself
    Running,
    /// An item was missed; waiting for restart
    Stopped,
}

/// Handle of a falling item and of its visual token on the display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Visible area of the game (CSS px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Basket size and vertical placement as laid out by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasketMetrics {
    pub width: f32,
    pub height: f32,
    /// Distance from the viewport top to the basket's top edge
    pub top: f32,
}

impl BasketMetrics {
    /// Default-sized basket resting near the bottom of the viewport
    pub fn bottom_aligned(viewport: Viewport) -> Self {
        Self {
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
            top: viewport.height - BASKET_BOTTOM_MARGIN - BASKET_HEIGHT,
        }
    }
}

/// The player's basket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basket {
    /// Left edge (px), always within `[0, viewport.width - width]`
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub top: f32,
}

impl Basket {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.x, self.top, self.width, self.height)
    }
}

/// A falling item entity
#[derive(Debug, Clone, PartialEq)]
pub struct FallingItem {
    pub id: ItemId,
    pub x: f32,
    /// Top edge; starts negative so the item slides into view
    pub y: f32,
    /// Pixels per tick
    pub speed: f32,
    /// Side length of the square token
    pub size: f32,
}

impl FallingItem {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.size, self.size)
    }
}

/// Pointer positions captured at drag start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub pointer_start_x: f32,
    pub basket_start_x: f32,
}

/// Simulation changes the display surface has to mirror
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned(ItemId),
    Caught(ItemId),
    Missed(ItemId),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub score: u32,
    pub phase: GamePhase,
    pub basket: Basket,
    pub viewport: Viewport,
    /// Active items in spawn order
    pub items: Vec<FallingItem>,
    /// Set while a touch drag is in progress
    pub drag: Option<DragState>,
    /// Pending events, drained by the controller
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh running game with the basket centred
    pub fn new(viewport: Viewport, metrics: BasketMetrics) -> Self {
        let mut state = Self {
            score: 0,
            phase: GamePhase::Running,
            basket: Basket {
                x: 0.0,
                width: metrics.width,
                height: metrics.height,
                top: metrics.top,
            },
            viewport,
            items: Vec::new(),
            drag: None,
            events: Vec::new(),
            next_id: 1,
        };
        state.set_basket_x(viewport.width / 2.0 - metrics.width / 2.0);
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new item ID
    pub fn next_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Move the basket, clamped to the viewport
    pub fn set_basket_x(&mut self, x: f32) {
        self.basket.x = clamp_position(x, self.basket.width, self.viewport.width);
    }

    /// Take the events queued since the last drain
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Back to a running game with no score and no items.
    ///
    /// Returns the IDs of the items that were still falling so their tokens
    /// can be detached.
    pub fn reset(&mut self) -> Vec<ItemId> {
        self.score = 0;
        self.events.clear();
        let removed = self.items.drain(..).map(|item| item.id).collect();
        self.phase = GamePhase::Running;
        removed
    }
}
