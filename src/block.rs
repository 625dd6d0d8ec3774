//! A single drifting block
//!
//! Immutable shape, mutable position: width and height are fixed at
//! creation, only the origin moves afterwards. Velocity is fixed too and
//! re-rolled only when the churn policy replaces the whole block.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// One rectangle in the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    rect: Rect,
    velocity: Vec2,
}

impl Block {
    /// Stores the rectangle and velocity as given, no validation.
    /// The caller guarantees a non-negative size.
    pub const fn new(rect: Rect, velocity: Vec2) -> Self {
        Self { rect, velocity }
    }

    /// Advance the position by `(velocity + extra) * dt`.
    ///
    /// `extra` is the field-wide drift shared by every block. A zero `dt`
    /// is a no-op; there is no allocation and no failure mode. Negative
    /// `dt` would rewind the position and is clamped away at the field
    /// level, not here.
    pub fn advance(&mut self, dt: f32, extra: Vec2) {
        self.rect.translate((self.velocity + extra) * dt);
    }

    /// Overwrite the x position, bypassing integration. Recycling only.
    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.rect.pos.x = x;
    }

    /// Overwrite the y position, bypassing integration. Recycling only.
    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.rect.pos.y = y;
    }

    /// Current rectangle, by value.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Drift velocity in units per second.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_integrates_exactly() {
        let mut block = Block::new(Rect::new(3.0, 4.0, 10.0, 12.0), Vec2::new(1.5, -2.0));
        let drift = Vec2::new(0.25, 1.0);
        block.advance(0.5, drift);
        let expected = Vec2::new(3.0 + (1.5 + 0.25) * 0.5, 4.0 + (-2.0 + 1.0) * 0.5);
        assert_eq!(block.rect().pos, expected);
        assert_eq!(block.velocity(), Vec2::new(1.5, -2.0));
    }

    #[test]
    fn test_zero_dt_is_a_noop() {
        let mut block = Block::new(Rect::new(7.0, 9.0, 4.0, 4.0), Vec2::new(100.0, 100.0));
        block.advance(0.0, Vec2::new(50.0, 50.0));
        assert_eq!(block.rect().pos, Vec2::new(7.0, 9.0));
    }

    #[test]
    fn test_size_never_changes() {
        let mut block = Block::new(Rect::new(0.0, 0.0, 64.0, 50.0), Vec2::new(30.0, 15.0));
        block.advance(2.0, Vec2::ZERO);
        block.set_x(-500.0);
        block.set_y(999.0);
        assert_eq!(block.rect().size, Vec2::new(64.0, 50.0));
    }

    #[test]
    fn test_position_overwrite() {
        let mut block = Block::new(Rect::new(10.0, 10.0, 5.0, 5.0), Vec2::ZERO);
        block.set_x(42.0);
        block.set_y(-7.0);
        assert_eq!(block.rect().pos, Vec2::new(42.0, -7.0));
    }
}
