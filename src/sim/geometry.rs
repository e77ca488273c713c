//! Screen-space geometry: basket clamping and rectangle overlap
//!
//! Coordinates are CSS pixels with the origin at the top-left of the viewport
//! and y growing downward.

use glam::Vec2;

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        let min = Vec2::new(x, y);
        Self {
            min,
            max: min + Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }
}

/// Constrain the basket's left edge so it stays fully inside the viewport.
///
/// Result lies in `[0, viewport_width - width]`. When the basket is wider
/// than the viewport the range collapses and the basket sits at the left edge.
pub fn clamp_position(x: f32, width: f32, viewport_width: f32) -> f32 {
    // f32::max ignores NaN, so a bogus viewport collapses the range to 0
    let max_x = (viewport_width - width).max(0.0);
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, max_x)
}

/// Bounding-box overlap test. Touching edges count as a hit.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.left() || a.left() > b.right() || a.bottom() < b.top() || a.top() > b.bottom())
}
