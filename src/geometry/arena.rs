use crate::error::{KinematicsError, Result};

use super::vec2::Vec2;

/// Rectangular region `[0, width) x [0, height)` that bodies must stay inside.
///
/// The last addressable coordinate on each axis is `dimension - 1`, matching
/// the pixel bounds of the raster the arena is usually drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    width: f32,
    height: f32,
}

impl Arena {
    /// Create an arena, rejecting zero, negative and non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(KinematicsError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Right border (largest valid x)
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.width - 1.0
    }

    /// Top border (largest valid y)
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.height - 1.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Is `point` inside the borders, allowing `tolerance` of overshoot?
    pub fn contains(&self, point: Vec2, tolerance: f32) -> bool {
        point.x >= -tolerance
            && point.y >= -tolerance
            && point.x <= self.max_x() + tolerance
            && point.y <= self.max_y() + tolerance
    }
}
